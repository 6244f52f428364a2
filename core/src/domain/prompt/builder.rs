use crate::domain::plan::entities::{DietProfile, FoodPreference, WorkoutProfile};

const MISSING_VALUE: &str = "not specified";

fn display(value: &Option<String>) -> &str {
    match value.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => MISSING_VALUE,
    }
}

fn diet_headline(preference: FoodPreference) -> &'static str {
    match preference {
        FoodPreference::Vegetarian => {
            "Create a detailed, personalized vegetarian diet plan only (no meat or eggs)."
        }
        FoodPreference::Vegan => {
            "Create a detailed, personalized vegan diet plan only (no meat, eggs, dairy or other animal products)."
        }
        FoodPreference::Omnivore | FoodPreference::Unspecified => {
            "Create a detailed, personalized diet plan."
        }
    }
}

pub fn build_diet_prompt(profile: &DietProfile) -> String {
    let meals = profile.meals_per_day;
    let food_preference = match display(&profile.food_preference_label) {
        MISSING_VALUE => profile.food_preference.to_string(),
        label => label.to_string(),
    };

    format!(
        "You are a certified nutritionist AI.\n\
         {headline}\n\
         Strictly follow:\n\
         - Provide exactly {meals} meals per day.\n\
         - Do NOT include restricted items or allergies.\n\
         - Include calories, protein, carbs, and fats per meal.\n\
         - Adapt to cuisine and food preference.\n\
         \n\
         User details:\n\
         Weight: {weight} kg\n\
         Height: {height} cm\n\
         Gender: {gender}\n\
         Goal: {goal}\n\
         Cuisine Preference: {cuisine}\n\
         Food Preference: {food_preference}\n\
         Restrictions: {restrictions}\n\
         Meals: {meals}\n",
        headline = diet_headline(profile.food_preference),
        weight = display(&profile.weight),
        height = display(&profile.height),
        gender = display(&profile.gender),
        goal = display(&profile.goal),
        cuisine = display(&profile.cuisine),
        restrictions = display(&profile.restrictions),
    )
}

pub fn build_workout_prompt(profile: &WorkoutProfile) -> String {
    format!(
        "Generate a personalized AI-powered workout plan based on these details:\n\
         Weight: {weight} kg\n\
         Height: {height} cm\n\
         Gender: {gender}\n\
         Goal: {goal}\n\
         Preferred Split: {split}\n\
         Experience Level: {level}\n\
         \n\
         Format the response clearly with workout days, exercises, and reps.",
        weight = display(&profile.weight),
        height = display(&profile.height),
        gender = display(&profile.gender),
        goal = display(&profile.goal),
        split = display(&profile.split),
        level = display(&profile.level),
    )
}
