//! Client-side error type.
//!
//! Storage problems are deliberately not represented here: a session file
//! that cannot be read counts as "no session", and a failed write is logged
//! without failing the login that produced it.

use thiserror::Error;

/// Errors surfaced by the client session manager
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connection refused, DNS, timeout)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status
    ///
    /// `message` is the `error` field of the response body when present.
    #[error("{message}")]
    Api { status: u16, message: String },
}

impl ClientError {
    /// Whether the server rejected the request as unauthenticated
    ///
    /// A 401 on an authenticated call is the signal for forced logout.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_detection() {
        let err = ClientError::Api {
            status: 401,
            message: "Invalid credentials".to_string(),
        };
        assert!(err.is_unauthorized());

        let err = ClientError::Api {
            status: 403,
            message: "Invalid token".to_string(),
        };
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_api_error_display() {
        let err = ClientError::Api {
            status: 400,
            message: "Email already exists".to_string(),
        };
        assert_eq!(err.to_string(), "Email already exists");
    }
}
