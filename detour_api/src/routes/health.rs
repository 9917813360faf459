use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: "route engine is running",
    })
}

pub async fn root_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "detour api",
    })
}
