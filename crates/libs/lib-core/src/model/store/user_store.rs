//! # User Store
//!
//! The lookup interface the authentication flow depends on. The SQLite-backed
//! [`SqliteUserStore`] is the production implementation; tests substitute their own.

use async_trait::async_trait;
use thiserror::Error;

use super::models::User;
use super::user_repository::UserRepository;
use super::DbPool;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Read-only user lookups used during login and token validation.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
}

#[derive(Clone)]
pub struct SqliteUserStore {
    pool: DbPool,
}

impl SqliteUserStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        Ok(UserRepository::find_by_id(&self.pool, id).await?)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(UserRepository::find_by_email(&self.pool, email).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::store::{test_pool, UserForCreate};

    #[tokio::test]
    async fn test_sqlite_store_lookups() {
        let pool = test_pool().await;
        let user = UserRepository::create(
            &pool,
            UserForCreate::new("Bob".to_string(), "bob@example.com".to_string(), "hash".to_string()),
        )
        .await
        .expect("Insert should succeed");

        let store = SqliteUserStore::new(pool);
        let found = store.find_by_id(user.id).await.expect("Lookup should succeed");
        assert_eq!(found.map(|u| u.email), Some("bob@example.com".to_string()));

        let found = store.find_by_email("bob@example.com").await.expect("Lookup should succeed");
        assert_eq!(found.map(|u| u.id), Some(user.id));
    }

    #[tokio::test]
    async fn test_closed_pool_is_store_error() {
        let pool = test_pool().await;
        pool.close().await;

        let store = SqliteUserStore::new(pool);
        assert!(matches!(store.find_by_id(1).await, Err(StoreError::Database(_))));
    }
}
