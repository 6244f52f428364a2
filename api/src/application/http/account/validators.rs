use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// Missing fields deserialize as empty strings so the account service can
// answer with its own "All fields required" message.

#[derive(Debug, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct SignupRequest {
    #[serde(default)]
    #[validate(length(max = 64, message = "username must be at most 64 characters"))]
    #[schema(example = "asha")]
    pub username: String,
    #[serde(default)]
    #[validate(length(max = 254, message = "email must be at most 254 characters"))]
    #[schema(example = "asha@example.com")]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 128, message = "password must be at most 128 characters"))]
    pub password: String,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(max = 254, message = "email must be at most 254 characters"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 128, message = "password must be at most 128 characters"))]
    pub password: String,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    #[validate(length(max = 254, message = "email must be at most 254 characters"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 64, message = "username must be at most 64 characters"))]
    pub username: String,
    /// Leave out or send an empty string to keep the current password.
    #[validate(length(max = 128, message = "password must be at most 128 characters"))]
    pub password: Option<String>,
}
