use axum::extract::State;
use fitplan_core::domain::account::{ports::AccountService, value_objects::SignupInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    account::validators::SignupRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SignupResponse {
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/signup",
    tag = "account",
    summary = "Create an account",
    responses(
        (status = 200, body = SignupResponse),
        (status = 400, body = ApiErrorResponse, description = "Missing fields or account already exists")
    ),
    request_body = SignupRequest
)]
pub async fn signup(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SignupRequest>,
) -> Result<Response<SignupResponse>, ApiError> {
    state
        .service
        .signup(SignupInput {
            username: payload.username,
            email: payload.email,
            password: payload.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SignupResponse {
        message: "Signup successful".to_string(),
    }))
}
