//! Health check handler for GET /api/health.

use axum::response::Json;

use crate::shared::types::HealthResponse;

/// Liveness check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Server is running".to_string(),
    })
}
