//! Route Configuration Module
//!
//! Assembles the HTTP surface of the gateway.
//!
//! - **`router`** - router creation and layer stacking
//! - **`api_routes`** - the auth and health endpoints
//!
//! # Routes
//!
//! - `POST /api/auth/signup` - account registration
//! - `POST /api/auth/login` - credential verification, token issuance
//! - `GET /api/auth/profile` - current account (bearer token required)
//! - `GET /api/health` - liveness check

pub mod api_routes;
pub mod router;

pub use router::create_router;
