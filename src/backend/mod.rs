//! Backend Server Module
//!
//! Server-side half of the auth core: the Axum Session Gateway, the
//! Authenticator business rules, and the SQLite credential store.
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── auth/        - Credential store, token handling, HTTP handlers
//! ├── error/       - AuthError taxonomy and HTTP response mapping
//! ├── middleware/  - Bearer-token auth and request logging
//! ├── routes/      - Route table and layer assembly
//! └── server/      - Configuration, state, app initialization
//! ```

/// Authentication: store, tokens, business rules, handlers
pub mod auth;

/// Error types and their HTTP response conversion
pub mod error;

/// HTTP middleware (bearer auth, request logging)
pub mod middleware;

/// Route configuration
pub mod routes;

/// Server configuration, state, and initialization
pub mod server;

#[cfg(test)]
pub(crate) mod test_support;
