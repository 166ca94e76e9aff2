//! Client Session Manager
//!
//! The application-side half of the auth core: owns "who is currently
//! logged in", talks to the auth endpoints, and persists the session so a
//! login survives an application restart.
//!
//! # Module Structure
//!
//! ```text
//! client/
//! ├── mod.rs      - Module exports
//! ├── config.rs   - Server URL configuration
//! ├── error.rs    - Client-side error type
//! ├── api.rs      - HTTP calls to the auth endpoints
//! ├── storage.rs  - Durable session storage
//! └── session.rs  - The session state machine
//! ```
//!
//! All consumers read the current identity through
//! [`SessionManager::current_session`]; there is no ambient token floating
//! around the rest of the application.

/// Server URL configuration
pub mod config;

/// Client-side error type
pub mod error;

/// HTTP calls to the auth endpoints
pub mod api;

/// Durable session storage
pub mod storage;

/// Session lifecycle state machine
pub mod session;

pub use config::Config;
pub use error::ClientError;
pub use session::{ClientSession, SessionManager, SessionState};
pub use storage::SessionStorage;
