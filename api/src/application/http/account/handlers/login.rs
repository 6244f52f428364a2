use axum::extract::State;
use chrono::NaiveDate;
use fitplan_core::domain::account::{ports::AccountService, value_objects::LoginInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    account::validators::LoginRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LoginResponse {
    pub message: String,
    pub username: String,
    pub member_since: NaiveDate,
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "account",
    summary = "Log in",
    responses(
        (status = 200, body = LoginResponse),
        (status = 401, body = ApiErrorResponse)
    ),
    request_body = LoginRequest
)]
pub async fn login(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<LoginRequest>,
) -> Result<Response<LoginResponse>, ApiError> {
    let account = state
        .service
        .login(LoginInput {
            email: payload.email,
            password: payload.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(LoginResponse {
        message: "Login successful".to_string(),
        username: account.username,
        member_since: account.member_since,
    }))
}
