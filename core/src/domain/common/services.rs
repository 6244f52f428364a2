use std::sync::Arc;

use crate::domain::{
    account::ports::AccountRepository, crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository, plan::ports::LLMClient,
};

/// Holds every outbound port the domain services talk to.
///
/// The service traits (`PlanService`, `AccountService`, `HealthCheckService`)
/// are implemented on this one struct so the HTTP layer only carries a single
/// handle around.
pub struct Service<A, H, LLM, HC>
where
    A: AccountRepository,
    H: HasherRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    pub(crate) account_repository: Arc<A>,
    pub(crate) hasher_repository: Arc<H>,
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) health_check_repository: Arc<HC>,
}

impl<A, H, LLM, HC> Service<A, H, LLM, HC>
where
    A: AccountRepository,
    H: HasherRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    pub fn new(
        account_repository: A,
        hasher_repository: H,
        llm_client: LLM,
        health_check_repository: HC,
    ) -> Self {
        Self {
            account_repository: Arc::new(account_repository),
            hasher_repository: Arc::new(hasher_repository),
            llm_client: Arc::new(llm_client),
            health_check_repository: Arc::new(health_check_repository),
        }
    }
}

impl<A, H, LLM, HC> Clone for Service<A, H, LLM, HC>
where
    A: AccountRepository,
    H: HasherRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    fn clone(&self) -> Self {
        Self {
            account_repository: Arc::clone(&self.account_repository),
            hasher_repository: Arc::clone(&self.hasher_repository),
            llm_client: Arc::clone(&self.llm_client),
            health_check_repository: Arc::clone(&self.health_check_repository),
        }
    }
}
