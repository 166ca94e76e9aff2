//! Wayfare - Travel Planning App Auth Core
//!
//! Wayfare is a travel-planning web application (itinerary builder,
//! destination browser, bookings). This crate implements its authentication
//! and session-management core: account registration, credential
//! verification, signed session tokens, and the client-side session
//! lifecycle that gates access to the rest of the application.
//!
//! # Module Structure
//!
//! The library is organized into three main modules:
//!
//! - **`shared`** - Wire types used by both the server and the client
//!   - Request/response bodies for the auth endpoints
//!   - The redacted account views (never carry the password hash)
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP gateway exposing signup/login/profile/health
//!   - Credential store over SQLite (sqlx)
//!   - Password hashing (bcrypt) and JWT session tokens
//!
//! - **`client`** - Client session manager
//!   - HTTP calls to the auth endpoints (reqwest)
//!   - The session state machine (anonymous / bootstrapping / authenticated)
//!   - Durable session storage so a login survives an application restart
//!
//! # Authentication Flow
//!
//! 1. **Signup**: credentials validated, password hashed, account created
//! 2. **Login**: credentials verified, 24-hour JWT issued with the user view
//! 3. **Profile**: bearer token verified, fresh redacted account returned
//!
//! Tokens are stateless: the server keeps no session table, so validity is
//! purely a function of signature and expiry.
//!
//! # Usage
//!
//! ## Server
//!
//! ```rust,no_run
//! use wayfare::backend::server::init::create_app;
//!
//! # async fn example() {
//! let app = create_app().await;
//! // Serve `app` with Axum
//! # }
//! ```
//!
//! ## Client
//!
//! ```rust,no_run
//! use wayfare::client::{Config, SessionManager};
//!
//! # async fn example() {
//! let mut session = SessionManager::new(Config::default());
//! session.bootstrap().await;
//! if !session.is_authenticated() {
//!     session.login("ann@example.com", "Abc12345!").await.ok();
//! }
//! # }
//! ```

/// Wire types shared between server and client
pub mod shared;

/// Backend server-side code
pub mod backend;

/// Client session manager
pub mod client;
