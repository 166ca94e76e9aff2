//! API route handlers.
//!
//! Signup and login are public; profile sits behind the bearer-token
//! middleware, which handles the 401/403 side of the contract before the
//! handler runs.

use axum::{middleware, routing::get, routing::post, Router};

use crate::backend::auth::{health, login, profile, signup};
use crate::backend::middleware::auth::auth_middleware;
use crate::backend::server::state::AppState;

/// Add the auth and health endpoints to the router
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route(
            "/api/auth/profile",
            get(profile).layer(middleware::from_fn(auth_middleware)),
        )
        .route("/api/health", get(health))
}
