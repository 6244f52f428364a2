use axum::extract::State;
use fitplan_core::domain::account::{ports::AccountService, value_objects::UpdateProfileInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    account::validators::UpdateProfileRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateProfileResponse {
    pub message: String,
    pub username: String,
}

#[utoipa::path(
    post,
    path = "/update_profile",
    tag = "account",
    summary = "Update username and optionally password",
    description = "The account is looked up by email.",
    responses(
        (status = 200, body = UpdateProfileResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 404, body = ApiErrorResponse)
    ),
    request_body = UpdateProfileRequest
)]
pub async fn update_profile(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateProfileRequest>,
) -> Result<Response<UpdateProfileResponse>, ApiError> {
    let account = state
        .service
        .update_profile(UpdateProfileInput {
            email: payload.email,
            username: payload.username,
            password: payload.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateProfileResponse {
        message: "Profile updated".to_string(),
        username: account.username,
    }))
}
