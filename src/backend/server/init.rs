//! Server initialization.
//!
//! Builds the application in order: load the database, assemble the state,
//! create the router with its middleware layers. Missing configuration is
//! logged and degraded around, not fatal.

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Initialization Steps
///
/// 1. **Load services**: open the account database and run migrations
/// 2. **Create app state**: wrap the pool for handler extraction
/// 3. **Create router**: routes, CORS allow-list, request logging
pub async fn create_app() -> Router {
    tracing::info!("Initializing Wayfare auth server");

    let db_pool = load_database().await;

    let app_state = AppState { db_pool };

    create_router(app_state)
}
