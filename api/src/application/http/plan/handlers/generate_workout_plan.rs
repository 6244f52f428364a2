use axum::extract::State;
use fitplan_core::domain::plan::ports::PlanService;

use crate::application::http::{
    plan::{handlers::generate_diet_plan::GeneratePlanResponse, validators::GenerateWorkoutRequest},
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/generate_workout",
    tag = "plan",
    summary = "Generate workout plan",
    responses(
        (status = 200, body = GeneratePlanResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    ),
    request_body = GenerateWorkoutRequest
)]
pub async fn generate_workout_plan(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateWorkoutRequest>,
) -> Result<Response<GeneratePlanResponse>, ApiError> {
    let plan = state
        .service
        .generate_workout_plan(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GeneratePlanResponse { plan }))
}
