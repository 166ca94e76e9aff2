//! Request and response types for the auth endpoints.
//!
//! These types are shared between the server handlers and the client
//! session manager. Account ids travel as `_id` and names in camelCase,
//! matching what the web front end expects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sign up request
///
/// Required fields are `Option` so that a missing field is rejected with a
/// field-level validation error at the gateway instead of failing inside
/// the JSON extractor.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: Option<String>,
    /// Plaintext password; hashed before storage, never logged
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Response to a successful signup
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub message: String,
    /// Id of the newly created account
    pub user_id: String,
}

/// Response to a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    /// Signed session token, valid for 24 hours
    pub token: String,
    pub user: UserSummary,
}

/// Redacted account summary returned at login
///
/// This is the user object the client session holds. It never contains the
/// password hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: Option<String>,
}

/// Redacted account view returned by the profile endpoint
///
/// The full account minus the password hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl From<UserView> for UserSummary {
    fn from(view: UserView) -> Self {
        Self {
            id: view.id,
            email: view.email,
            first_name: view.first_name,
            last_name: view.last_name,
        }
    }
}

/// Error body returned by every failing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_summary_wire_names() {
        let user = UserSummary {
            id: "abc".to_string(),
            email: "a@example.com".to_string(),
            first_name: "Ann".to_string(),
            last_name: None,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["_id"], "abc");
        assert_eq!(json["firstName"], "Ann");
        assert!(json.get("first_name").is_none());
    }

    #[test]
    fn test_user_view_never_carries_hash() {
        let view = UserView {
            id: "abc".to_string(),
            email: "a@example.com".to_string(),
            first_name: "Ann".to_string(),
            last_name: Some("Lee".to_string()),
            phone: None,
            created_at: Utc::now(),
            last_login: None,
        };
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("passwordHash").is_none());
        assert_eq!(json["lastName"], "Lee");
    }

    #[test]
    fn test_signup_request_missing_fields_deserialize() {
        let request: SignupRequest = serde_json::from_str(r#"{"email":"a@example.com"}"#).unwrap();
        assert_eq!(request.email.as_deref(), Some("a@example.com"));
        assert!(request.password.is_none());
        assert!(request.first_name.is_none());
    }

    #[test]
    fn test_summary_from_view() {
        let view = UserView {
            id: "abc".to_string(),
            email: "a@example.com".to_string(),
            first_name: "Ann".to_string(),
            last_name: None,
            phone: Some("555".to_string()),
            created_at: Utc::now(),
            last_login: None,
        };
        let summary = UserSummary::from(view);
        assert_eq!(summary.id, "abc");
        assert_eq!(summary.first_name, "Ann");
    }
}
