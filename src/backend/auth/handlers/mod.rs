//! Authentication Handlers Module
//!
//! Thin HTTP handlers for the auth endpoints. Each handler checks the
//! request shape, delegates to [`service`](crate::backend::auth::service),
//! and maps the outcome through [`AuthError`](crate::backend::error::AuthError).
//!
//! # Handlers
//!
//! - **`signup`** - POST /api/auth/signup - account registration
//! - **`login`** - POST /api/auth/login - credential verification, token issuance
//! - **`profile`** - GET /api/auth/profile - current account (bearer token)
//! - **`health`** - GET /api/health - liveness check

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Profile handler
pub mod profile;

/// Health check handler
pub mod health;

pub use health::health;
pub use login::login;
pub use profile::profile;
pub use signup::signup;
