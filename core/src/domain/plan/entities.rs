use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_MEALS_PER_DAY: u32 = 4;

/// Dietary category a diet plan has to respect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FoodPreference {
    Omnivore,
    Vegetarian,
    Vegan,
    #[default]
    Unspecified,
}

impl FoodPreference {
    /// Normalises free text coming from a client. Anything that is not one of
    /// the known categories maps to `Unspecified`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "omnivore" | "non-vegetarian" | "non vegetarian" => Self::Omnivore,
            "vegetarian" => Self::Vegetarian,
            "vegan" => Self::Vegan,
            _ => Self::Unspecified,
        }
    }
}

impl fmt::Display for FoodPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Omnivore => "omnivore",
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
            Self::Unspecified => "unspecified",
        };
        f.write_str(label)
    }
}

/// Request-scoped description of the person a diet plan is generated for.
///
/// Body metrics and goals are display values only; they are interpolated
/// into the prompt verbatim and never validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DietProfile {
    pub weight: Option<String>,
    pub height: Option<String>,
    pub gender: Option<String>,
    pub goal: Option<String>,
    pub cuisine: Option<String>,
    pub food_preference: FoodPreference,
    /// Raw preference text as the client sent it, echoed back into the prompt.
    pub food_preference_label: Option<String>,
    pub restrictions: Option<String>,
    pub meals_per_day: u32,
}

impl Default for DietProfile {
    fn default() -> Self {
        Self {
            weight: None,
            height: None,
            gender: None,
            goal: None,
            cuisine: None,
            food_preference: FoodPreference::Unspecified,
            food_preference_label: None,
            restrictions: None,
            meals_per_day: DEFAULT_MEALS_PER_DAY,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkoutProfile {
    pub weight: Option<String>,
    pub height: Option<String>,
    pub gender: Option<String>,
    pub goal: Option<String>,
    pub split: Option<String>,
    pub level: Option<String>,
}

/// Plan text ready for display, with the goal it was generated for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GeneratedPlan {
    pub goal: String,
    pub details: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalises_case_and_whitespace() {
        assert_eq!(FoodPreference::parse("  Vegan "), FoodPreference::Vegan);
        assert_eq!(
            FoodPreference::parse("VEGETARIAN"),
            FoodPreference::Vegetarian
        );
        assert_eq!(FoodPreference::parse("omnivore"), FoodPreference::Omnivore);
    }

    #[test]
    fn test_parse_unknown_is_unspecified() {
        assert_eq!(FoodPreference::parse(""), FoodPreference::Unspecified);
        assert_eq!(
            FoodPreference::parse("pescatarian"),
            FoodPreference::Unspecified
        );
    }

    #[test]
    fn test_default_profile_has_four_meals() {
        assert_eq!(DietProfile::default().meals_per_day, 4);
    }
}
