//! Application state.
//!
//! The gateway has exactly one shared service: the account database.
//! Handlers extract it as `State<Option<SqlitePool>>` via `FromRef`, so
//! they never need the whole `AppState`.

use axum::extract::FromRef;
use sqlx::SqlitePool;

/// Central state container for the Axum application
#[derive(Clone)]
pub struct AppState {
    /// Account database pool
    ///
    /// `None` when the database could not be configured; handlers answer
    /// with a generic server error in that case.
    pub db_pool: Option<SqlitePool>,
}

impl FromRef<AppState> for Option<SqlitePool> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}
