pub mod generate_diet_plan;
pub mod generate_workout_plan;
