use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("{0}")]
    Validation(String),

    #[error("User already exists")]
    DuplicateAccount,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Not found")]
    NotFound,

    /// The model answered but produced no usable text.
    #[error("The model returned an empty plan")]
    EmptyGeneration,

    #[error("{0}")]
    ExternalServiceError(String),

    #[error("Failed to process password")]
    HashError,

    #[error("Internal server error")]
    InternalServerError,
}
