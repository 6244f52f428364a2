pub const BANNER: &str = "FitAI backend running";

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    summary = "Liveness banner",
    responses(
        (status = 200, body = String, content_type = "text/plain")
    )
)]
pub async fn banner() -> &'static str {
    BANNER
}
