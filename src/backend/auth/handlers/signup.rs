//! Signup handler for POST /api/auth/signup.
//!
//! Request shape is checked here at the boundary: a missing email, password,
//! or first name is a 400 with a field-level message, before the
//! authenticator or the store are involved. Everything else (format checks,
//! strength policy, duplicate detection, hashing) happens in the service
//! layer.

use axum::{extract::State, http::StatusCode, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::service::{self, Registration};
use crate::backend::error::AuthError;
use crate::shared::types::{SignupRequest, SignupResponse};

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - missing/invalid fields or an already-registered email
/// * `500 Internal Server Error` - store or hashing failure (generic body)
pub async fn signup(
    State(pool): State<Option<SqlitePool>>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), AuthError> {
    let pool = pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        AuthError::internal("database not configured")
    })?;

    let (Some(email), Some(password), Some(first_name)) =
        (request.email, request.password, request.first_name)
    else {
        return Err(AuthError::validation(
            "body",
            "Email, password, and first name are required",
        ));
    };

    tracing::info!("Signup request for {}", email);

    let user_id = service::register(
        &pool,
        Registration {
            email,
            password,
            first_name,
            last_name: request.last_name,
            phone: request.phone,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "Signup successful".to_string(),
            user_id,
        }),
    ))
}
