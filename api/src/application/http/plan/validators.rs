use fitplan_core::domain::plan::entities::{
    DEFAULT_MEALS_PER_DAY, DietProfile, FoodPreference, WorkoutProfile,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::application::http::server::api_entities::api_error::ApiError;

const MAX_FREE_TEXT_CHARS: usize = 500;

/// A profile field as the client sent it: any JSON value except null.
/// It only ever ends up interpolated into a prompt, so it is kept textual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DisplayValue {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
    /// Arrays and objects, rendered as compact JSON.
    Other(serde_json::Value),
}

impl DisplayValue {
    pub fn into_text(self) -> String {
        match self {
            DisplayValue::Text(text) => text,
            DisplayValue::Number(number) => number.to_string(),
            DisplayValue::Flag(flag) => flag.to_string(),
            DisplayValue::Other(value) => value.to_string(),
        }
    }

    fn char_count(&self) -> usize {
        match self {
            DisplayValue::Text(text) => text.chars().count(),
            DisplayValue::Other(value) => value.to_string().chars().count(),
            DisplayValue::Number(_) | DisplayValue::Flag(_) => 0,
        }
    }
}

fn validate_free_text(value: &DisplayValue) -> Result<(), ValidationError> {
    if value.char_count() > MAX_FREE_TEXT_CHARS {
        return Err(ValidationError::new("too_long")
            .with_message("must be at most 500 characters".into()));
    }
    Ok(())
}

fn display(value: Option<DisplayValue>) -> Option<String> {
    value.map(DisplayValue::into_text)
}

/// Meals per day: an integer or a numeric string, 4 when missing or blank.
pub fn parse_meals(value: Option<DisplayValue>) -> Result<u32, ApiError> {
    let invalid = || ApiError::BadRequest("meals must be a positive integer".to_string());

    let meals = match value {
        None => return Ok(DEFAULT_MEALS_PER_DAY),
        Some(DisplayValue::Text(text)) if text.trim().is_empty() => {
            return Ok(DEFAULT_MEALS_PER_DAY);
        }
        Some(DisplayValue::Text(text)) => text.trim().parse::<u32>().map_err(|_| invalid())?,
        Some(DisplayValue::Number(number)) => number
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(invalid)?,
        Some(DisplayValue::Flag(_) | DisplayValue::Other(_)) => return Err(invalid()),
    };

    if meals == 0 {
        return Err(invalid());
    }

    Ok(meals)
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct GenerateDietRequest {
    #[schema(value_type = Option<String>, example = "72")]
    pub weight: Option<DisplayValue>,
    #[schema(value_type = Option<String>, example = "178")]
    pub height: Option<DisplayValue>,
    #[schema(value_type = Option<String>, example = "male")]
    pub gender: Option<DisplayValue>,
    #[schema(value_type = Option<String>, example = "muscle gain")]
    #[validate(custom(function = "validate_free_text"))]
    pub goal: Option<DisplayValue>,
    #[schema(value_type = Option<String>, example = "Indian")]
    #[validate(custom(function = "validate_free_text"))]
    pub cuisine: Option<DisplayValue>,
    #[schema(value_type = Option<String>, example = "vegetarian")]
    pub food_preference: Option<DisplayValue>,
    #[schema(value_type = Option<String>, example = "nuts, soy")]
    #[validate(custom(function = "validate_free_text"))]
    pub restrictions: Option<DisplayValue>,
    #[schema(value_type = Option<u32>, example = 4)]
    pub meals: Option<DisplayValue>,
}

impl GenerateDietRequest {
    pub fn into_profile(self) -> Result<DietProfile, ApiError> {
        let meals_per_day = parse_meals(self.meals)?;
        let food_preference_label = display(self.food_preference);
        let food_preference = food_preference_label
            .as_deref()
            .map(FoodPreference::parse)
            .unwrap_or_default();

        Ok(DietProfile {
            weight: display(self.weight),
            height: display(self.height),
            gender: display(self.gender),
            goal: display(self.goal),
            cuisine: display(self.cuisine),
            food_preference,
            food_preference_label,
            restrictions: display(self.restrictions),
            meals_per_day,
        })
    }
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct GenerateWorkoutRequest {
    #[schema(value_type = Option<String>, example = "72")]
    pub weight: Option<DisplayValue>,
    #[schema(value_type = Option<String>, example = "178")]
    pub height: Option<DisplayValue>,
    #[schema(value_type = Option<String>, example = "female")]
    pub gender: Option<DisplayValue>,
    #[schema(value_type = Option<String>, example = "fat loss")]
    #[validate(custom(function = "validate_free_text"))]
    pub goal: Option<DisplayValue>,
    #[schema(value_type = Option<String>, example = "push pull legs")]
    #[validate(custom(function = "validate_free_text"))]
    pub split: Option<DisplayValue>,
    #[schema(value_type = Option<String>, example = "beginner")]
    pub level: Option<DisplayValue>,
}

impl From<GenerateWorkoutRequest> for WorkoutProfile {
    fn from(request: GenerateWorkoutRequest) -> Self {
        Self {
            weight: display(request.weight),
            height: display(request.height),
            gender: display(request.gender),
            goal: display(request.goal),
            split: display(request.split),
            level: display(request.level),
        }
    }
}
