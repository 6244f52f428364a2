use axum::extract::State;
use fitplan_core::domain::health::ports::HealthCheckService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub database_latency_ms: u64,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Readiness check",
    description = "Pings the account database and reports the round-trip latency.",
    responses(
        (status = 200, body = HealthResponse),
        (status = 500, body = ApiErrorResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> Result<Response<HealthResponse>, ApiError> {
    let database_latency_ms = state.service.health().await.map_err(ApiError::from)?;

    Ok(Response::OK(HealthResponse {
        status: "ok".to_string(),
        database_latency_ms,
    }))
}
