//! HTTP client functions for the auth endpoints.
//!
//! Plain request/response plumbing; session state is handled one level up
//! in [`session`](crate::client::session). A non-success status becomes
//! [`ClientError::Api`] carrying the server's `error` message when the body
//! has one.

use reqwest::Client;

use crate::client::config::Config;
use crate::client::error::ClientError;
use crate::shared::types::{
    ErrorResponse, LoginRequest, LoginResponse, SignupRequest, SignupResponse, UserView,
};

/// Register a new account
///
/// Signup does not log the user in; the caller follows up with
/// [`login`] once the account exists.
pub async fn signup(
    client: &Client,
    config: &Config,
    request: &SignupRequest,
) -> Result<SignupResponse, ClientError> {
    let response = client
        .post(config.api_url("/api/auth/signup"))
        .json(request)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(error_from_response(response).await);
    }
    Ok(response.json().await?)
}

/// Authenticate and obtain a session token
pub async fn login(
    client: &Client,
    config: &Config,
    email: &str,
    password: &str,
) -> Result<LoginResponse, ClientError> {
    let request = LoginRequest {
        email: Some(email.to_string()),
        password: Some(password.to_string()),
    };

    let response = client
        .post(config.api_url("/api/auth/login"))
        .json(&request)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(error_from_response(response).await);
    }
    Ok(response.json().await?)
}

/// Fetch the current account view with a bearer token
pub async fn get_profile(
    client: &Client,
    config: &Config,
    token: &str,
) -> Result<UserView, ClientError> {
    let response = client
        .get(config.api_url("/api/auth/profile"))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(error_from_response(response).await);
    }
    Ok(response.json().await?)
}

async fn error_from_response(response: reqwest::Response) -> ClientError {
    let status = response.status().as_u16();
    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => format!("Request failed with status {}", status),
    };
    ClientError::Api { status, message }
}
