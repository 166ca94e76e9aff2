//! Backend Error Module
//!
//! Defines the error taxonomy for the auth core and its conversion to HTTP
//! responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - AuthError definition and status mapping
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Error Taxonomy
//!
//! - `Validation` - malformed or missing input, caught before any store access
//! - `DuplicateEmail` - an account with that normalized email already exists
//! - `InvalidCredentials` - login failure, identical for unknown email and
//!   wrong password so the response carries no enumeration signal
//! - `MissingToken` / `InvalidToken` - bearer token absent, malformed,
//!   expired, or signed with the wrong key
//! - `NotFound` - the account behind a valid token no longer exists
//! - `Database` / `Hash` / `Internal` - infrastructure failures, logged
//!   server-side and surfaced as a generic server error

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::AuthError;
