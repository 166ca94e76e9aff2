//! Session tokens.
//!
//! Signed, expiring JWTs standing in for a server-side session table. The
//! server keeps no session state: a token is valid exactly when its
//! signature checks out and its expiry has not passed. The flip side of
//! that trade-off is that a token cannot be revoked before it expires.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Token lifetime: 24 hours, non-refreshable
pub const TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Account id
    pub sub: String,
    /// Email at issuance
    pub email: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Get the signing secret from the environment
///
/// The fallback exists for local development only; deployments must set
/// `JWT_SECRET`.
fn jwt_secret() -> String {
    std::env::var("JWT_SECRET").unwrap_or_else(|_| {
        tracing::warn!("JWT_SECRET not set, using development default");
        "wayfare_dev_secret".to_string()
    })
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

/// Create a session token for an account
pub fn create_token(user_id: &str, email: &str) -> Result<String, jsonwebtoken::errors::Error> {
    create_token_with_ttl(user_id, email, TOKEN_TTL_SECS)
}

pub(crate) fn create_token_with_ttl(
    user_id: &str,
    email: &str,
    ttl_secs: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = unix_now();
    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        exp: (now + ttl_secs).max(0) as u64,
        iat: now.max(0) as u64,
    };

    let key = EncodingKey::from_secret(jwt_secret().as_ref());
    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a session token
///
/// Fails when the signature does not match, the payload is malformed, or
/// the expiry has passed.
pub fn verify_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(jwt_secret().as_ref());
    let token_data = decode::<Claims>(token, &key, &Validation::default())?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_token() {
        let token = create_token("user-1", "test@example.com").unwrap();
        assert!(!token.is_empty());
    }

    #[test]
    fn test_round_trip() {
        let token = create_token("user-1", "test@example.com").unwrap();
        let claims = verify_token(&token).unwrap();
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.email, "test@example.com");
        assert!(claims.exp > claims.iat);
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS as u64);
    }

    #[test]
    fn test_malformed_token_rejected() {
        assert!(verify_token("invalid.token.here").is_err());
        assert!(verify_token("").is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        // past the default 60s validation leeway
        let token = create_token_with_ttl("user-1", "test@example.com", -3600).unwrap();
        assert!(verify_token(&token).is_err());
    }

    #[test]
    fn test_tampered_token_rejected() {
        let token = create_token("user-1", "test@example.com").unwrap();
        let mut tampered = token.clone();
        // flip a character in the signature segment
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'a' { 'b' } else { 'a' });
        assert!(verify_token(&tampered).is_err());
    }
}
