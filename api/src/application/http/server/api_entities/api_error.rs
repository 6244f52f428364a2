use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fitplan_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    EmptyGeneration(String),
    #[error("{0}")]
    InternalServerError(String),
}

/// Body of every error answer.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ApiErrorResponse {
    pub error: String,
    pub code: String,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "E_BAD_REQUEST"),
            ApiError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "E_UNAUTHORIZED"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "E_NOT_FOUND"),
            ApiError::EmptyGeneration(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "E_EMPTY_GENERATION")
            }
            ApiError::InternalServerError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "E_INTERNAL_SERVER_ERROR")
            }
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(message) => ApiError::BadRequest(message),
            CoreError::DuplicateAccount => ApiError::BadRequest(error.to_string()),
            CoreError::InvalidCredentials => ApiError::Unauthorized(error.to_string()),
            CoreError::NotFound => ApiError::NotFound("Account not found".to_string()),
            CoreError::EmptyGeneration => {
                ApiError::EmptyGeneration("No response from the AI model".to_string())
            }
            CoreError::ExternalServiceError(message) => ApiError::InternalServerError(message),
            CoreError::HashError | CoreError::InternalServerError => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        if status.is_server_error() {
            tracing::error!(code, "request failed: {}", self);
        }

        let body = ApiErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON extractor that runs `validator` rules before the handler sees the body.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| ApiError::BadRequest(errors.to_string()))?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_keep_their_messages() {
        assert_eq!(
            ApiError::from(CoreError::Validation("All fields required".to_string())),
            ApiError::BadRequest("All fields required".to_string())
        );
        assert_eq!(
            ApiError::from(CoreError::DuplicateAccount),
            ApiError::BadRequest("User already exists".to_string())
        );
        assert_eq!(
            ApiError::from(CoreError::InvalidCredentials),
            ApiError::Unauthorized("Invalid credentials".to_string())
        );
        assert_eq!(
            ApiError::from(CoreError::ExternalServiceError("quota exceeded".to_string())),
            ApiError::InternalServerError("quota exceeded".to_string())
        );
    }

    #[test]
    fn test_status_codes() {
        let cases = [
            (CoreError::Validation("x".to_string()), StatusCode::BAD_REQUEST),
            (CoreError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (CoreError::NotFound, StatusCode::NOT_FOUND),
            (CoreError::EmptyGeneration, StatusCode::INTERNAL_SERVER_ERROR),
            (CoreError::HashError, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, status) in cases {
            assert_eq!(ApiError::from(error).into_response().status(), status);
        }
    }
}
