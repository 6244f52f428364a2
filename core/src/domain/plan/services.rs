use tracing::{error, info, warn};

use crate::domain::{
    account::ports::AccountRepository,
    common::{entities::app_errors::CoreError, services::Service},
    content_filter::{ForbiddenTermSet, SUBSTITUTE_PHRASE, filter},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    plan::{
        entities::{DietProfile, GeneratedPlan, WorkoutProfile},
        formatter::format_for_display,
        ports::{LLMClient, PlanService},
        value_objects::GenerationOutcome,
    },
    prompt::{build_diet_prompt, build_workout_prompt},
};

impl<A, H, LLM, HC> Service<A, H, LLM, HC>
where
    A: AccountRepository,
    H: HasherRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    /// One model call, no retries.
    async fn generate(&self, prompt: String) -> Result<String, CoreError> {
        let outcome = GenerationOutcome::from(self.llm_client.generate_text(prompt).await);

        match &outcome {
            GenerationOutcome::Success(text) => {
                info!("Model returned {} characters", text.len());
            }
            GenerationOutcome::EmptyResponse => warn!("Model returned an empty response"),
            GenerationOutcome::TransportFailure(message) => {
                error!("Model call failed: {}", message);
            }
        }

        outcome.into_result()
    }
}

impl<A, H, LLM, HC> PlanService for Service<A, H, LLM, HC>
where
    A: AccountRepository,
    H: HasherRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    async fn generate_diet_plan(&self, profile: DietProfile) -> Result<GeneratedPlan, CoreError> {
        info!(
            preference = %profile.food_preference,
            meals = profile.meals_per_day,
            "Generating diet plan"
        );

        // 1. Render prompt
        let prompt = build_diet_prompt(&profile);

        // 2. Call LLM
        let raw = self.generate(prompt).await?;

        // 3. Filter before formatting
        let terms = ForbiddenTermSet::for_profile(
            profile.food_preference,
            profile.restrictions.as_deref().unwrap_or_default(),
        );
        let filtered = filter(&raw, &terms, SUBSTITUTE_PHRASE);

        Ok(GeneratedPlan {
            goal: profile.goal.unwrap_or_default(),
            details: format_for_display(&filtered),
        })
    }

    async fn generate_workout_plan(
        &self,
        profile: WorkoutProfile,
    ) -> Result<GeneratedPlan, CoreError> {
        info!("Generating workout plan");

        let prompt = build_workout_prompt(&profile);
        let raw = self.generate(prompt).await?;

        Ok(GeneratedPlan {
            goal: profile.goal.unwrap_or_default(),
            details: format_for_display(&raw),
        })
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::function;

    use super::*;
    use crate::domain::{
        account::ports::MockAccountRepository, crypto::ports::MockHasherRepository,
        health::ports::MockHealthCheckRepository, plan::entities::FoodPreference,
        plan::ports::MockLLMClient,
    };

    type TestService =
        Service<MockAccountRepository, MockHasherRepository, MockLLMClient, MockHealthCheckRepository>;

    fn service_with_reply(reply: Result<String, CoreError>) -> TestService {
        let mut llm_client = MockLLMClient::new();
        llm_client
            .expect_generate_text()
            .times(1)
            .returning(move |_| {
                let reply = reply.clone();
                Box::pin(async move { reply })
            });

        Service::new(
            MockAccountRepository::new(),
            MockHasherRepository::new(),
            llm_client,
            MockHealthCheckRepository::new(),
        )
    }

    #[tokio::test]
    async fn test_vegan_plan_is_filtered_then_formatted() {
        let service = service_with_reply(Ok(
            "Breakfast: scrambled egg and milk\n**Lunch:** chicken salad".to_string(),
        ));

        let plan = service
            .generate_diet_plan(DietProfile {
                goal: Some("muscle gain".to_string()),
                food_preference: FoodPreference::Vegan,
                restrictions: Some("nuts".to_string()),
                meals_per_day: 3,
                ..DietProfile::default()
            })
            .await
            .unwrap();

        let lowered = plan.details.to_lowercase();
        assert!(!lowered.contains("egg"));
        assert!(!lowered.contains("milk"));
        assert!(!lowered.contains("chicken"));
        assert!(!plan.details.contains("**"));
        assert!(plan.details.contains("<br>"));
        assert_eq!(plan.details.matches(SUBSTITUTE_PHRASE).count(), 3);
        assert_eq!(plan.goal, "muscle gain");
    }

    #[tokio::test]
    async fn test_prompt_carries_meal_count() {
        let mut llm_client = MockLLMClient::new();
        llm_client
            .expect_generate_text()
            .with(function(|prompt: &String| {
                prompt.contains("Provide exactly 5 meals per day.")
            }))
            .times(1)
            .returning(|_| Box::pin(async { Ok("Meal plan".to_string()) }));

        let service = Service::new(
            MockAccountRepository::new(),
            MockHasherRepository::new(),
            llm_client,
            MockHealthCheckRepository::new(),
        );

        let plan = service
            .generate_diet_plan(DietProfile {
                meals_per_day: 5,
                ..DietProfile::default()
            })
            .await
            .unwrap();

        assert_eq!(plan.details, "Meal plan");
        assert_eq!(plan.goal, "");
    }

    #[tokio::test]
    async fn test_empty_generation_is_an_error() {
        let service = service_with_reply(Ok(String::new()));

        let result = service.generate_diet_plan(DietProfile::default()).await;

        assert_eq!(result, Err(CoreError::EmptyGeneration));
    }

    #[tokio::test]
    async fn test_oracle_failure_message_is_forwarded() {
        let service = service_with_reply(Err(CoreError::ExternalServiceError(
            "LLM API returned error: 429 Too Many Requests".to_string(),
        )));

        let result = service.generate_workout_plan(WorkoutProfile::default()).await;

        assert_eq!(
            result,
            Err(CoreError::ExternalServiceError(
                "LLM API returned error: 429 Too Many Requests".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_workout_plan_is_formatted_but_not_filtered() {
        let service = service_with_reply(Ok(
            "  **Day 1:** Chest\nPost-workout: chicken and eggs  ".to_string(),
        ));

        let plan = service
            .generate_workout_plan(WorkoutProfile {
                goal: Some("strength".to_string()),
                ..WorkoutProfile::default()
            })
            .await
            .unwrap();

        assert_eq!(
            plan.details,
            "Day 1: Chest<br>Post-workout: chicken and eggs"
        );
        assert_eq!(plan.goal, "strength");
    }
}
