use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    banner::{__path_banner, banner},
    health::{__path_health, health},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(banner, health))]
pub struct HealthApiDoc;

pub fn health_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;
    let banner_path = if root_path.is_empty() {
        "/".to_string()
    } else {
        root_path.clone()
    };

    Router::new()
        .route(&banner_path, get(banner))
        .route(&format!("{}/health", root_path), get(health))
}
