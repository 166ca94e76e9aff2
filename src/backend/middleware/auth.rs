//! Authentication middleware.
//!
//! Protects routes that require a logged-in user. The middleware extracts
//! the bearer token from the Authorization header, verifies it, and attaches
//! the authenticated identity to the request extensions for handlers to
//! pick up. It deliberately does not load the account: a handler that needs
//! fresh profile data fetches it itself.
//!
//! Status mapping follows the gateway contract: a missing or malformed
//! header is 401, a token that fails verification (bad signature, bad
//! shape, expired) is 403.

use axum::{
    extract::{FromRequestParts, Request},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::service;
use crate::backend::error::AuthError;

/// Identity extracted from a verified session token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub email: String,
}

/// Bearer-token verification middleware
///
/// 1. Extracts the token from `Authorization: Bearer <token>`
/// 2. Verifies signature and expiry
/// 3. Attaches [`AuthenticatedUser`] to the request extensions
pub async fn auth_middleware(mut request: Request, next: Next) -> Result<Response, AuthError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            AuthError::MissingToken
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        AuthError::MissingToken
    })?;

    let claims = service::verify_token(token)?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: claims.sub,
        email: claims.email,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Usable as a handler parameter on any route behind [`auth_middleware`].
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                AuthError::MissingToken
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_extractor_with_identity() {
        let (mut parts, _) = axum::http::Request::builder()
            .uri("http://example.com")
            .body(())
            .unwrap()
            .into_parts();

        parts.extensions.insert(AuthenticatedUser {
            user_id: "user-1".to_string(),
            email: "test@example.com".to_string(),
        });

        let AuthUser(user) = AuthUser::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(user.user_id, "user-1");
    }

    #[tokio::test]
    async fn test_extractor_without_identity() {
        let (mut parts, _) = axum::http::Request::builder()
            .uri("http://example.com")
            .body(())
            .unwrap()
            .into_parts();

        let err = AuthUser::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }
}
