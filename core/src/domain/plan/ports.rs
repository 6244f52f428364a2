use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    plan::entities::{DietProfile, GeneratedPlan, WorkoutProfile},
};

/// LLM Client trait for calling the text-generation model
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Returns the raw model text. An empty string is a valid transport-level
    /// answer; callers decide what emptiness means.
    fn generate_text(&self, prompt: String)
    -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for plan generation
#[cfg_attr(test, mockall::automock)]
pub trait PlanService: Send + Sync {
    fn generate_diet_plan(
        &self,
        profile: DietProfile,
    ) -> impl Future<Output = Result<GeneratedPlan, CoreError>> + Send;

    fn generate_workout_plan(
        &self,
        profile: WorkoutProfile,
    ) -> impl Future<Output = Result<GeneratedPlan, CoreError>> + Send;
}
