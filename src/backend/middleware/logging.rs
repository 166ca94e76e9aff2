//! Request logging middleware.
//!
//! Logs method and path for every request. Bodies are never logged; login
//! and signup payloads carry credentials.

use axum::{extract::Request, middleware::Next, response::Response};

/// Log method and path, then run the rest of the stack
pub async fn log_requests(request: Request, next: Next) -> Response {
    tracing::info!("{} {}", request.method(), request.uri().path());
    next.run(request).await
}
