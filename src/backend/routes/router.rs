//! Router configuration.
//!
//! Combines the API routes with the cross-cutting layers:
//!
//! 1. API routes (auth, health)
//! 2. CORS with the configured origin allow-list
//! 3. Request logging (method + path)
//! 4. Fallback handler for unknown routes

use axum::{
    http::{
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    middleware, Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::backend::middleware::logging::log_requests;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::config::allowed_origins;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes and layers configured
///
/// Cross-origin requests are only accepted from the configured allow-list;
/// anything else is rejected at this boundary before reaching the
/// authenticator.
pub fn create_router(app_state: AppState) -> Router {
    let router = configure_api_routes(Router::new());

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins()))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, ACCEPT])
        .allow_credentials(true);

    router
        .layer(cors)
        .layer(middleware::from_fn(log_requests))
        .fallback(|| async { "404 Not Found" })
        .with_state(app_state)
}
