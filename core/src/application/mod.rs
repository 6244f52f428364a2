use crate::{
    domain::common::{FitPlanConfig, services::Service},
    infrastructure::{
        account::SqliteAccountRepository,
        crypto::Argon2HasherRepository,
        db::sqlite::{Sqlite, SqliteConfig},
        health::SqliteHealthCheckRepository,
        llm::GeminiLLMClient,
    },
};

pub type FitPlanService = Service<
    SqliteAccountRepository,
    Argon2HasherRepository,
    GeminiLLMClient,
    SqliteHealthCheckRepository,
>;

pub async fn create_service(config: FitPlanConfig) -> Result<FitPlanService, anyhow::Error> {
    let sqlite = Sqlite::new(SqliteConfig {
        database_url: config.database.url.clone(),
    })
    .await?;

    let account = SqliteAccountRepository::new(sqlite.get_db());
    let hasher = Argon2HasherRepository::new();
    let llm_client = GeminiLLMClient::new(&config.llm)?;
    let health = SqliteHealthCheckRepository::new(sqlite.get_db());

    Ok(Service::new(account, hasher, llm_client, health))
}
