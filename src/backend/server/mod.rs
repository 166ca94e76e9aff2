//! Server Module
//!
//! Configuration loading, application state, and server initialization.
//!
//! - **`config`** - environment-driven settings (database, port, CORS origins)
//! - **`state`** - `AppState` and its `FromRef` extractions
//! - **`init`** - `create_app()`, the one-stop router factory

pub mod config;
pub mod init;
pub mod state;

pub use init::create_app;
pub use state::AppState;
