//! Login handler for POST /api/auth/login.
//!
//! Missing fields are a 400 at the boundary; a failed credential check is a
//! 401 with the same body whether the email was unknown or the password was
//! wrong.

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::service;
use crate::backend::error::AuthError;
use crate::shared::types::{LoginRequest, LoginResponse, UserSummary};

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - email or password missing from the body
/// * `401 Unauthorized` - credentials did not verify
/// * `500 Internal Server Error` - store or token failure (generic body)
pub async fn login(
    State(pool): State<Option<SqlitePool>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AuthError> {
    let pool = pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        AuthError::internal("database not configured")
    })?;

    let (Some(email), Some(password)) = (request.email, request.password) else {
        return Err(AuthError::validation(
            "body",
            "Email and password are required",
        ));
    };

    tracing::info!("Login request for {}", email);

    let (token, user) = service::login(&pool, &email, &password).await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
        user: UserSummary::from(user),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::service::{register, Registration};
    use crate::backend::test_support::memory_pool;
    use axum::http::StatusCode;

    async fn seeded_pool() -> SqlitePool {
        let pool = memory_pool().await;
        register(
            &pool,
            Registration {
                email: "test@example.com".to_string(),
                password: "Abc12345!".to_string(),
                first_name: "Ann".to_string(),
                last_name: Some("Lee".to_string()),
                phone: None,
            },
        )
        .await
        .unwrap();
        pool
    }

    fn request(email: Option<&str>, password: Option<&str>) -> LoginRequest {
        LoginRequest {
            email: email.map(str::to_string),
            password: password.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_login_success() {
        let pool = seeded_pool().await;
        let response = login(
            State(Some(pool)),
            Json(request(Some("test@example.com"), Some("Abc12345!"))),
        )
        .await
        .unwrap();

        assert_eq!(response.message, "Login successful");
        assert!(!response.token.is_empty());
        assert_eq!(response.user.email, "test@example.com");
        assert_eq!(response.user.first_name, "Ann");
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let pool = seeded_pool().await;
        let err = login(
            State(Some(pool)),
            Json(request(Some("test@example.com"), Some("Wrong123!"))),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.public_message(), "Invalid credentials");
    }

    #[tokio::test]
    async fn test_login_missing_password() {
        let pool = seeded_pool().await;
        let err = login(
            State(Some(pool)),
            Json(request(Some("test@example.com"), None)),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
