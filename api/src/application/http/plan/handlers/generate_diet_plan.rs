use axum::extract::State;
use fitplan_core::domain::plan::{entities::GeneratedPlan, ports::PlanService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    plan::validators::GenerateDietRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GeneratePlanResponse {
    pub plan: GeneratedPlan,
}

#[utoipa::path(
    post,
    path = "/generate_diet",
    tag = "plan",
    summary = "Generate diet plan",
    description = "Builds a diet prompt from the profile, asks the language model for a plan, replaces foods the preference or restrictions forbid and returns HTML-ready text.",
    responses(
        (status = 200, body = GeneratePlanResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse, description = "Empty model answer or model call failure")
    ),
    request_body = GenerateDietRequest
)]
pub async fn generate_diet_plan(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateDietRequest>,
) -> Result<Response<GeneratePlanResponse>, ApiError> {
    let profile = payload.into_profile()?;

    let plan = state
        .service
        .generate_diet_plan(profile)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GeneratePlanResponse { plan }))
}
