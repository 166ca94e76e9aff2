//! Error types for the auth backend.
//!
//! Every handler and service function returns `AuthError`; the HTTP status
//! and public message live here so the mapping is in one place. Anything in
//! the infrastructure group surfaces as a generic "Server error" - the
//! detail goes to the server log only.

use axum::http::StatusCode;
use thiserror::Error;

/// Errors produced by the authenticator, the credential store, and the
/// HTTP boundary.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Malformed or missing input, rejected before any store access
    #[error("Validation error in field '{field}': {message}")]
    Validation {
        /// The field that failed validation
        field: String,
        /// Message safe to show to the end user
        message: String,
    },

    /// An account with the same normalized email already exists
    #[error("Email already exists")]
    DuplicateEmail,

    /// Unknown email or wrong password - deliberately indistinguishable
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No bearer token, or an Authorization header that is not `Bearer <token>`
    #[error("Access denied. No token provided.")]
    MissingToken,

    /// Token malformed, expired, or signature mismatch
    #[error("Invalid token")]
    InvalidToken,

    /// The referenced account no longer exists
    #[error("User not found")]
    NotFound,

    /// Credential store failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing or verification failure
    #[error("Password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Any other server-side failure (token signing, worker pool, ...)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl AuthError {
    /// Create a validation error for a specific field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::DuplicateEmail => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials | Self::MissingToken => StatusCode::UNAUTHORIZED,
            Self::InvalidToken => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Hash(_) | Self::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to return to the caller
    ///
    /// Infrastructure errors collapse to "Server error"; their detail is
    /// only logged.
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::DuplicateEmail => "Email already exists".to_string(),
            Self::InvalidCredentials => "Invalid credentials".to_string(),
            Self::MissingToken => "Access denied. No token provided.".to_string(),
            Self::InvalidToken => "Invalid token".to_string(),
            Self::NotFound => "User not found".to_string(),
            Self::Database(_) | Self::Hash(_) | Self::Internal { .. } => {
                "Server error".to_string()
            }
        }
    }
}
