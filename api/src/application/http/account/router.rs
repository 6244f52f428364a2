use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    login::{__path_login, login},
    signup::{__path_signup, signup},
    update_profile::{__path_update_profile, update_profile},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(signup, login, update_profile))]
pub struct AccountApiDoc;

pub fn account_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/signup", state.args.server.root_path),
            post(signup),
        )
        .route(
            &format!("{}/api/login", state.args.server.root_path),
            post(login),
        )
        .route(
            &format!("{}/api/update_profile", state.args.server.root_path),
            post(update_profile),
        )
}
