//! Profile handler for GET /api/auth/profile.
//!
//! The route is protected by the bearer-token middleware; by the time this
//! handler runs, the token has been verified and the claims are in the
//! request extensions. The handler re-fetches the account so the view is
//! fresh, and answers 404 when the account was deleted after the token was
//! issued.

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::service;
use crate::backend::error::AuthError;
use crate::backend::middleware::auth::AuthUser;
use crate::shared::types::UserView;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - missing or malformed Authorization header (middleware)
/// * `403 Forbidden` - invalid or expired token (middleware)
/// * `404 Not Found` - account no longer exists
pub async fn profile(
    State(pool): State<Option<SqlitePool>>,
    AuthUser(auth): AuthUser,
) -> Result<Json<UserView>, AuthError> {
    let pool = pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        AuthError::internal("database not configured")
    })?;

    let user = service::get_profile(&pool, &auth.user_id).await?;
    Ok(Json(UserView::from(user)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::service::{login, register, Registration};
    use crate::backend::middleware::auth::AuthenticatedUser;
    use crate::backend::test_support::memory_pool;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_profile_success_and_idempotent() {
        let pool = memory_pool().await;
        register(
            &pool,
            Registration {
                email: "test@example.com".to_string(),
                password: "Abc12345!".to_string(),
                first_name: "Ann".to_string(),
                last_name: None,
                phone: None,
            },
        )
        .await
        .unwrap();
        let (_, user) = login(&pool, "test@example.com", "Abc12345!").await.unwrap();

        let auth = AuthenticatedUser {
            user_id: user.id.clone(),
            email: user.email.clone(),
        };

        let first = profile(State(Some(pool.clone())), AuthUser(auth.clone()))
            .await
            .unwrap();
        let second = profile(State(Some(pool)), AuthUser(auth)).await.unwrap();

        assert_eq!(first.0, second.0);
        assert_eq!(first.email, "test@example.com");
    }

    #[tokio::test]
    async fn test_profile_account_deleted() {
        let pool = memory_pool().await;
        let auth = AuthenticatedUser {
            user_id: "deleted-account".to_string(),
            email: "gone@example.com".to_string(),
        };

        let err = profile(State(Some(pool)), AuthUser(auth)).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }
}
