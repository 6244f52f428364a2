pub mod builder;

pub use builder::{build_diet_prompt, build_workout_prompt};
