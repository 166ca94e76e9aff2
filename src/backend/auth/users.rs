//! Account model and credential store operations.
//!
//! Lookup and insertion of accounts, keyed by id and by normalized email.
//! Callers are expected to normalize emails (see
//! [`validation::normalize_email`](crate::backend::auth::validation::normalize_email))
//! before calling in; rows are stored pre-normalized and the unique index on
//! `email` makes the duplicate check-and-insert atomic even when two signups
//! race on the same address.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::backend::error::AuthError;
use crate::shared::types::{UserSummary, UserView};

/// An account row as stored
///
/// Deliberately not serializable: only the redacted [`UserView`] and
/// [`UserSummary`] cross the wire.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique account id (UUID string), generated at insert
    pub id: String,
    /// Normalized email address (unique)
    pub email: String,
    /// Bcrypt hash; the plaintext is never stored
    pub password_hash: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    /// Set once at creation
    pub created_at: DateTime<Utc>,
    /// Updated on every successful login, best-effort
    pub last_login: Option<DateTime<Utc>>,
}

/// Fields required to insert a new account
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub phone: Option<String>,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            phone: user.phone,
            created_at: user.created_at,
            last_login: user.last_login,
        }
    }
}

/// Create a new account
///
/// Fails with [`AuthError::DuplicateEmail`] when an account with the same
/// normalized email already exists. The uniqueness check rides on the
/// store's unique index, so two concurrent inserts for the same email
/// cannot both succeed.
pub async fn create_user(pool: &SqlitePool, new_user: NewUser) -> Result<User, AuthError> {
    let id = uuid::Uuid::new_v4().to_string();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, email, password_hash, first_name, last_name, phone, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, email, password_hash, first_name, last_name, phone, created_at, last_login
        "#,
    )
    .bind(&id)
    .bind(&new_user.email)
    .bind(&new_user.password_hash)
    .bind(&new_user.first_name)
    .bind(&new_user.last_name)
    .bind(&new_user.phone)
    .bind(now)
    .fetch_one(pool)
    .await
    .map_err(|err| {
        if is_unique_violation(&err) {
            AuthError::DuplicateEmail
        } else {
            AuthError::from(err)
        }
    })?;

    Ok(user)
}

/// Get an account by normalized email
pub async fn get_user_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, first_name, last_name, phone, created_at, last_login
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Get an account by id
pub async fn get_user_by_id(pool: &SqlitePool, id: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, first_name, last_name, phone, created_at, last_login
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Record a successful login
///
/// Callers treat a failure here as non-fatal: a missed `last_login` write
/// must not block the login itself.
pub async fn update_last_login(
    pool: &SqlitePool,
    id: &str,
    timestamp: DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET last_login = $1 WHERE id = $2")
        .bind(timestamp)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map(|db| db.is_unique_violation())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::test_support::memory_pool;

    fn sample(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            password_hash: "$2b$10$hash".to_string(),
            first_name: "Ann".to_string(),
            last_name: None,
            phone: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_lookup() {
        let pool = memory_pool().await;

        let user = create_user(&pool, sample("ann@example.com")).await.unwrap();
        assert!(!user.id.is_empty());
        assert!(user.last_login.is_none());

        let by_email = get_user_by_email(&pool, "ann@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_email.id, user.id);

        let by_id = get_user_by_id(&pool, &user.id).await.unwrap().unwrap();
        assert_eq!(by_id.email, "ann@example.com");
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected_atomically() {
        let pool = memory_pool().await;

        create_user(&pool, sample("ann@example.com")).await.unwrap();
        let err = create_user(&pool, sample("ann@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::DuplicateEmail));

        // exactly one row survives
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE email = $1")
            .bind("ann@example.com")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(row.0, 1);
    }

    #[tokio::test]
    async fn test_lookup_misses() {
        let pool = memory_pool().await;
        assert!(get_user_by_email(&pool, "nobody@example.com")
            .await
            .unwrap()
            .is_none());
        assert!(get_user_by_id(&pool, "missing-id").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_last_login() {
        let pool = memory_pool().await;
        let user = create_user(&pool, sample("ann@example.com")).await.unwrap();

        let when = Utc::now();
        update_last_login(&pool, &user.id, when).await.unwrap();

        let reloaded = get_user_by_id(&pool, &user.id).await.unwrap().unwrap();
        let recorded = reloaded.last_login.unwrap();
        assert!((recorded - when).num_seconds().abs() < 2);
    }
}
