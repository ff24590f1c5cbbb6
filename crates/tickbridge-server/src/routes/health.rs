use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}

/// GET /api/health, a liveness probe for the dashboard.
pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}
