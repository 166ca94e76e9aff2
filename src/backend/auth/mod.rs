//! Authentication Module
//!
//! This module handles account registration, credential verification, and
//! session tokens. It provides the HTTP handlers for the auth endpoints and
//! the business rules behind them.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports
//! ├── users.rs        - Account model and credential store operations
//! ├── validation.rs   - Pure email/password checks
//! ├── sessions.rs     - JWT token generation and verification
//! ├── service.rs      - Register/login/profile business rules
//! └── handlers/       - HTTP handlers
//!     ├── signup.rs   - POST /api/auth/signup
//!     ├── login.rs    - POST /api/auth/login
//!     ├── profile.rs  - GET /api/auth/profile
//!     └── health.rs   - GET /api/health
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: input validated → password hashed → account created
//! 2. **Login**: credentials verified → 24-hour JWT returned with user info
//! 3. **Profile**: JWT verified → fresh redacted account view returned
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (fixed cost) before storage
//! - Tokens are stateless JWTs; validity is signature plus expiry
//! - Unknown email and wrong password produce the identical error
//! - Plaintext passwords are never logged and never stored

/// Account model and credential store operations
pub mod users;

/// Pure validation checks for emails and passwords
pub mod validation;

/// JWT token generation and verification
pub mod sessions;

/// Registration, login, and profile business rules
pub mod service;

/// HTTP handlers for the auth endpoints
pub mod handlers;

pub use handlers::{health, login, profile, signup};
