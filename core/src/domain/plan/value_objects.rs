use crate::domain::common::entities::app_errors::CoreError;

/// Outcome of one call to the text-generation model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// Non-blank text, already trimmed.
    Success(String),
    EmptyResponse,
    TransportFailure(String),
}

impl GenerationOutcome {
    pub fn into_result(self) -> Result<String, CoreError> {
        match self {
            Self::Success(text) => Ok(text),
            Self::EmptyResponse => Err(CoreError::EmptyGeneration),
            Self::TransportFailure(message) => Err(CoreError::ExternalServiceError(message)),
        }
    }
}

impl From<Result<String, CoreError>> for GenerationOutcome {
    fn from(result: Result<String, CoreError>) -> Self {
        match result {
            Ok(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    Self::EmptyResponse
                } else {
                    Self::Success(trimmed.to_string())
                }
            }
            Err(CoreError::ExternalServiceError(message)) => Self::TransportFailure(message),
            Err(CoreError::EmptyGeneration) => Self::EmptyResponse,
            Err(other) => Self::TransportFailure(other.to_string()),
        }
    }
}
