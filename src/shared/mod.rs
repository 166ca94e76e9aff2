//! Shared Wire Types
//!
//! Types that cross the HTTP boundary between the Session Gateway and the
//! Client Session Manager. Both sides serialize them with serde, so the
//! JSON field names here ARE the public API contract.

/// Request and response bodies for the auth endpoints
pub mod types;

pub use types::{
    ErrorResponse, HealthResponse, LoginRequest, LoginResponse, SignupRequest, SignupResponse,
    UserSummary, UserView,
};
