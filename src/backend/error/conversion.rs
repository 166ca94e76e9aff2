//! Conversion of `AuthError` into HTTP responses.
//!
//! Handlers return `Result<_, AuthError>` and Axum calls this conversion
//! for the error arm. The body is always `{"error": <message>}`; server
//! errors log their full detail here, once, before being collapsed to the
//! generic message.

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::AuthError;
use crate::shared::types::ErrorResponse;

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {:?}", self);
        } else {
            tracing::debug!("Request rejected: {}", self);
        }

        let body = Json(ErrorResponse {
            error: self.public_message(),
        });
        (status, body).into_response()
    }
}
