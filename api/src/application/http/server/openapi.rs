use utoipa::OpenApi;

use crate::application::http::{
    account::router::AccountApiDoc, health::router::HealthApiDoc, plan::router::PlanApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FitPlan API",
        description = "Diet and workout plans generated by a language model, plus minimal accounts."
    ),
    nest(
        (path = "/api", api = PlanApiDoc),
        (path = "/api", api = AccountApiDoc),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Full document with every path prefixed by `root_path`.
    pub fn with_root_path(root_path: &str) -> utoipa::openapi::OpenApi {
        let mut openapi = ApiDoc::openapi().merge_from(HealthApiDoc::openapi());
        let mut paths = openapi.paths.clone();
        paths.paths = openapi
            .paths
            .paths
            .into_iter()
            .map(|(path, item)| (format!("{root_path}{path}"), item))
            .collect();
        openapi.paths = paths;
        openapi
    }
}
