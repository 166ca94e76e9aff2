//! Registration, login, and profile business rules.
//!
//! The HTTP handlers stay thin; everything that decides whether an auth
//! operation succeeds lives here. All functions take the pool explicitly
//! and return [`AuthError`], which the gateway maps to status codes.
//!
//! Bcrypt work runs on the blocking thread pool so a hash in progress does
//! not stall other requests.

use chrono::Utc;
use sqlx::SqlitePool;

use crate::backend::auth::sessions::{self, Claims};
use crate::backend::auth::users::{
    self, create_user, get_user_by_email, get_user_by_id, NewUser,
};
use crate::backend::auth::validation::{is_valid_email, is_valid_password, normalize_email};
use crate::backend::error::AuthError;

/// Bcrypt work factor, fixed
pub const HASH_COST: u32 = 10;

/// Validated-at-the-boundary registration input
#[derive(Debug, Clone)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub phone: Option<String>,
}

/// Register a new account
///
/// Validates input before touching the store, hashes the password, and
/// inserts the account. Returns the new account id.
///
/// # Errors
///
/// * [`AuthError::Validation`] - bad email format, weak password, or empty
///   first name
/// * [`AuthError::DuplicateEmail`] - the normalized email is already taken
pub async fn register(pool: &SqlitePool, registration: Registration) -> Result<String, AuthError> {
    let email = normalize_email(&registration.email);
    if !is_valid_email(&email) {
        return Err(AuthError::validation("email", "Invalid email format"));
    }
    if !is_valid_password(&registration.password) {
        return Err(AuthError::validation(
            "password",
            "Password must be at least 8 characters and include uppercase, lowercase, number, and special character",
        ));
    }
    let first_name = registration.first_name.trim().to_string();
    if first_name.is_empty() {
        return Err(AuthError::validation(
            "firstName",
            "Email, password, and first name are required",
        ));
    }

    // Friendly pre-check; the unique index backstops concurrent signups.
    if get_user_by_email(pool, &email).await?.is_some() {
        return Err(AuthError::DuplicateEmail);
    }

    let password = registration.password;
    let password_hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, HASH_COST))
        .await
        .map_err(|err| {
            tracing::error!("Password hashing task failed: {:?}", err);
            AuthError::internal("password hashing task failed")
        })??;

    let user = create_user(
        pool,
        NewUser {
            email,
            password_hash,
            first_name,
            last_name: trim_optional(registration.last_name),
            phone: trim_optional(registration.phone),
        },
    )
    .await?;

    tracing::info!("User created: {} ({})", user.id, user.email);
    Ok(user.id)
}

/// Authenticate an account and issue a session token
///
/// Returns the token and the account it was issued for. Unknown email and
/// wrong password both yield [`AuthError::InvalidCredentials`] so the
/// response reveals nothing about which one it was.
pub async fn login(
    pool: &SqlitePool,
    email: &str,
    password: &str,
) -> Result<(String, users::User), AuthError> {
    let email = normalize_email(email);
    let Some(user) = get_user_by_email(pool, &email).await? else {
        tracing::debug!("Login failed: unknown email");
        return Err(AuthError::InvalidCredentials);
    };

    let password = password.to_string();
    let stored_hash = user.password_hash.clone();
    let valid = tokio::task::spawn_blocking(move || bcrypt::verify(password, &stored_hash))
        .await
        .map_err(|err| {
            tracing::error!("Password verification task failed: {:?}", err);
            AuthError::internal("password verification task failed")
        })??;

    if !valid {
        tracing::debug!("Login failed: wrong password for {}", user.id);
        return Err(AuthError::InvalidCredentials);
    }

    // Best-effort; a missed write must not fail the login.
    if let Err(err) = users::update_last_login(pool, &user.id, Utc::now()).await {
        tracing::warn!("Failed to record last login for {}: {:?}", user.id, err);
    }

    let token = sessions::create_token(&user.id, &user.email).map_err(|err| {
        tracing::error!("Failed to create token: {:?}", err);
        AuthError::internal("token creation failed")
    })?;

    tracing::info!("User logged in: {}", user.id);
    Ok((token, user))
}

/// Verify a session token and return its claims
///
/// Does not load the account; callers that need fresh profile data fetch it
/// themselves (and handle the account having been deleted since issuance).
pub fn verify_token(token: &str) -> Result<Claims, AuthError> {
    sessions::verify_token(token).map_err(|err| {
        tracing::debug!("Token rejected: {:?}", err);
        AuthError::InvalidToken
    })
}

/// Fetch the redacted profile for an account id
pub async fn get_profile(pool: &SqlitePool, user_id: &str) -> Result<users::User, AuthError> {
    get_user_by_id(pool, user_id)
        .await?
        .ok_or(AuthError::NotFound)
}

fn trim_optional(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::test_support::memory_pool;

    fn registration(email: &str, password: &str) -> Registration {
        Registration {
            email: email.to_string(),
            password: password.to_string(),
            first_name: "Ann".to_string(),
            last_name: Some("Lee".to_string()),
            phone: None,
        }
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let pool = memory_pool().await;

        let user_id = register(&pool, registration("a@example.com", "Abc12345!"))
            .await
            .unwrap();

        let (token, user) = login(&pool, "a@example.com", "Abc12345!").await.unwrap();
        assert_eq!(user.id, user_id);

        // the token embeds the account it was issued for
        let claims = verify_token(&token).unwrap();
        assert_eq!(claims.sub, user_id);
    }

    #[tokio::test]
    async fn test_register_normalizes_email() {
        let pool = memory_pool().await;

        register(&pool, registration("  Ann@Example.COM ", "Abc12345!"))
            .await
            .unwrap();

        // a case/whitespace variant is the same account
        let err = register(&pool, registration("ann@example.com", "Abc12345!"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::DuplicateEmail));

        // and login works with another variant
        let (_, user) = login(&pool, "ANN@example.com  ", "Abc12345!").await.unwrap();
        assert_eq!(user.email, "ann@example.com");
    }

    #[tokio::test]
    async fn test_weak_password_rejected_before_store() {
        let pool = memory_pool().await;

        let err = register(&pool, registration("a@example.com", "abc12345"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Validation { ref field, .. } if field == "password"));

        // nothing was created
        assert!(get_user_by_email(&pool, "a@example.com")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_invalid_email_rejected() {
        let pool = memory_pool().await;
        let err = register(&pool, registration("not-an-email", "Abc12345!"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Validation { ref field, .. } if field == "email"));
    }

    #[tokio::test]
    async fn test_blank_first_name_rejected() {
        let pool = memory_pool().await;
        let mut reg = registration("a@example.com", "Abc12345!");
        reg.first_name = "   ".to_string();
        let err = register(&pool, reg).await.unwrap_err();
        assert!(matches!(err, AuthError::Validation { ref field, .. } if field == "firstName"));
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let pool = memory_pool().await;
        register(&pool, registration("a@example.com", "Abc12345!"))
            .await
            .unwrap();

        let wrong_password = login(&pool, "a@example.com", "Wrong123!").await.unwrap_err();
        let unknown_email = login(&pool, "b@example.com", "Abc12345!").await.unwrap_err();

        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(unknown_email, AuthError::InvalidCredentials));
        assert_eq!(
            wrong_password.public_message(),
            unknown_email.public_message()
        );
    }

    #[tokio::test]
    async fn test_login_records_last_login() {
        let pool = memory_pool().await;
        register(&pool, registration("a@example.com", "Abc12345!"))
            .await
            .unwrap();

        let (_, user) = login(&pool, "a@example.com", "Abc12345!").await.unwrap();
        let reloaded = get_profile(&pool, &user.id).await.unwrap();
        assert!(reloaded.last_login.is_some());
    }

    #[tokio::test]
    async fn test_profile_missing_account() {
        let pool = memory_pool().await;
        let err = get_profile(&pool, "gone").await.unwrap_err();
        assert!(matches!(err, AuthError::NotFound));
    }

    #[tokio::test]
    async fn test_optional_fields_trimmed() {
        let pool = memory_pool().await;
        let mut reg = registration("a@example.com", "Abc12345!");
        reg.last_name = Some("  ".to_string());
        reg.phone = Some(" 555-0100 ".to_string());

        let user_id = register(&pool, reg).await.unwrap();
        let user = get_profile(&pool, &user_id).await.unwrap();
        assert!(user.last_name.is_none());
        assert_eq!(user.phone.as_deref(), Some("555-0100"));
    }
}
