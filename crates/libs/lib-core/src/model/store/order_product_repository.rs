//! # Order Line Item Repository
//!
//! Read/write access to `order_products`, the association between an order and the
//! products on it. Orders and products themselves are owned by other services.

use super::models::{OrderProduct, OrderProductForCreate};
use super::DbPool;
use sqlx::query_as;

pub struct OrderProductRepository;

impl OrderProductRepository {
    /// Add a line item to an order.
    pub async fn create(
        pool: &DbPool,
        item: OrderProductForCreate,
    ) -> Result<OrderProduct, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO order_products (order_id, product_id, quantity, price) VALUES (?, ?, ?, ?)"
        )
        .bind(item.order_id)
        .bind(item.product_id)
        .bind(item.quantity)
        .bind(item.price)
        .execute(pool)
        .await?;

        query_as::<_, OrderProduct>("SELECT * FROM order_products WHERE id = ?")
            .bind(result.last_insert_rowid())
            .fetch_one(pool)
            .await
    }

    /// All line items of an order, in insertion order.
    pub async fn find_by_order(pool: &DbPool, order_id: i64) -> Result<Vec<OrderProduct>, sqlx::Error> {
        query_as::<_, OrderProduct>("SELECT * FROM order_products WHERE order_id = ? ORDER BY id")
            .bind(order_id)
            .fetch_all(pool)
            .await
    }

    /// Sum of `quantity × price` over an order's line items. `0.0` for an empty order.
    pub async fn order_total(pool: &DbPool, order_id: i64) -> Result<f64, sqlx::Error> {
        let (total,): (Option<f64>,) = query_as(
            "SELECT SUM(quantity * price) FROM order_products WHERE order_id = ?"
        )
        .bind(order_id)
        .fetch_one(pool)
        .await?;

        Ok(total.unwrap_or(0.0))
    }
}
