//! Middleware Module
//!
//! HTTP middleware for the gateway:
//!
//! - **`auth`** - bearer-token verification for protected routes
//! - **`logging`** - method + path request log (no payloads)

pub mod auth;
pub mod logging;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
pub use logging::log_requests;
