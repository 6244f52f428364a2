use crate::domain::{
    account::ports::AccountRepository,
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::{HealthCheckRepository, HealthCheckService},
    plan::ports::LLMClient,
};

impl<A, H, LLM, HC> HealthCheckService for Service<A, H, LLM, HC>
where
    A: AccountRepository,
    H: HasherRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
