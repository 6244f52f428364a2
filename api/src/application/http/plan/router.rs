use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    generate_diet_plan::{__path_generate_diet_plan, generate_diet_plan},
    generate_workout_plan::{__path_generate_workout_plan, generate_workout_plan},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(generate_diet_plan, generate_workout_plan))]
pub struct PlanApiDoc;

pub fn plan_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/generate_diet", state.args.server.root_path),
            post(generate_diet_plan),
        )
        .route(
            &format!("{}/api/generate_workout", state.args.server.root_path),
            post(generate_workout_plan),
        )
}
