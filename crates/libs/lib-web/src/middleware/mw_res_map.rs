//! # Response Mapping Middleware
//!
//! Logs server errors on the way out, tagged with the request ID.

use axum::{
    extract::Request,
    middleware::Next,
    response::Response,
};
use tracing::error;

use crate::middleware::mw_req_stamp::RequestStamp;

/// Response mapping middleware.
pub async fn map_res(req: Request, next: Next) -> Response {
    let request_id = req
        .extensions()
        .get::<RequestStamp>()
        .map(|s| s.id.clone());
    let path = req.uri().path().to_string();

    let res = next.run(req).await;

    if res.status().is_server_error() {
        error!(
            request_id = ?request_id,
            "[RESPONSE] Server error on {}: {}",
            path,
            res.status()
        );
    }

    res
}
