use axum::Json;

use crate::models::HealthResponse;

/// GET /health
/// Liveness probe for process supervisors and orchestration health checks.
/// Probes nothing downstream; a 200 only means the process is serving.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
