use tracing::{info, warn};

use crate::domain::{
    account::{
        entities::Account,
        ports::{AccountRepository, AccountService},
        value_objects::{LoginInput, SignupInput, UpdateProfileInput},
    },
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    plan::ports::LLMClient,
};

const ALL_FIELDS_REQUIRED: &str = "All fields required";

fn required(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl<A, H, LLM, HC> AccountService for Service<A, H, LLM, HC>
where
    A: AccountRepository,
    H: HasherRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    async fn signup(&self, input: SignupInput) -> Result<Account, CoreError> {
        let (Some(username), Some(email)) = (required(&input.username), required(&input.email))
        else {
            return Err(CoreError::Validation(ALL_FIELDS_REQUIRED.to_string()));
        };
        if input.password.trim().is_empty() {
            return Err(CoreError::Validation(ALL_FIELDS_REQUIRED.to_string()));
        }

        let password_hash = self.hasher_repository.hash_password(input.password).await?;

        let account = self
            .account_repository
            .create(Account::new(username, email, password_hash))
            .await?;

        info!(account_id = %account.id, "Account created");

        Ok(account)
    }

    async fn login(&self, input: LoginInput) -> Result<Account, CoreError> {
        let email = required(&input.email).ok_or(CoreError::InvalidCredentials)?;

        let Some(account) = self.account_repository.get_by_email(email).await? else {
            warn!("Login attempt for unknown email");
            return Err(CoreError::InvalidCredentials);
        };

        let valid = self
            .hasher_repository
            .verify_password(input.password, account.password_hash.clone())
            .await?;

        if !valid {
            warn!(account_id = %account.id, "Login attempt with wrong password");
            return Err(CoreError::InvalidCredentials);
        }

        Ok(account)
    }

    async fn update_profile(&self, input: UpdateProfileInput) -> Result<Account, CoreError> {
        let (Some(email), Some(username)) = (required(&input.email), required(&input.username))
        else {
            return Err(CoreError::Validation(
                "email and username are required".to_string(),
            ));
        };

        let mut account = self
            .account_repository
            .get_by_email(email)
            .await?
            .ok_or(CoreError::NotFound)?;

        let new_password = input
            .password
            .filter(|password| !password.trim().is_empty());
        let password_hash = match new_password {
            Some(password) => Some(self.hasher_repository.hash_password(password).await?),
            None => None,
        };

        account.update(username, password_hash);

        let account = self.account_repository.update(account).await?;

        info!(account_id = %account.id, "Account profile updated");

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::{
        account::ports::MockAccountRepository, crypto::ports::MockHasherRepository,
        health::ports::MockHealthCheckRepository, plan::ports::MockLLMClient,
    };

    type TestService =
        Service<MockAccountRepository, MockHasherRepository, MockLLMClient, MockHealthCheckRepository>;

    fn service(accounts: MockAccountRepository, hasher: MockHasherRepository) -> TestService {
        Service::new(
            accounts,
            hasher,
            MockLLMClient::new(),
            MockHealthCheckRepository::new(),
        )
    }

    fn stored_account() -> Account {
        Account::new(
            "alice".to_string(),
            "alice@example.com".to_string(),
            "hashed:secret".to_string(),
        )
    }

    #[tokio::test]
    async fn test_signup_requires_every_field() {
        let service = service(MockAccountRepository::new(), MockHasherRepository::new());

        let result = service
            .signup(SignupInput {
                username: "alice".to_string(),
                email: "   ".to_string(),
                password: "secret".to_string(),
            })
            .await;

        assert_eq!(
            result,
            Err(CoreError::Validation("All fields required".to_string()))
        );
    }

    #[tokio::test]
    async fn test_signup_stores_hashed_password() {
        let mut hasher = MockHasherRepository::new();
        hasher
            .expect_hash_password()
            .with(eq("secret".to_string()))
            .times(1)
            .returning(|password| Box::pin(async move { Ok(format!("hashed:{password}")) }));

        let mut accounts = MockAccountRepository::new();
        accounts
            .expect_create()
            .times(1)
            .returning(|account| Box::pin(async move { Ok(account) }));

        let account = service(accounts, hasher)
            .signup(SignupInput {
                username: " alice ".to_string(),
                email: "alice@example.com".to_string(),
                password: "secret".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(account.username, "alice");
        assert_eq!(account.password_hash, "hashed:secret");
        assert_eq!(account.member_since, account.created_at.date_naive());
    }

    #[tokio::test]
    async fn test_signup_duplicate_is_reported() {
        let mut hasher = MockHasherRepository::new();
        hasher
            .expect_hash_password()
            .returning(|_| Box::pin(async { Ok("hashed".to_string()) }));

        let mut accounts = MockAccountRepository::new();
        accounts
            .expect_create()
            .returning(|_| Box::pin(async { Err(CoreError::DuplicateAccount) }));

        let result = service(accounts, hasher)
            .signup(SignupInput {
                username: "alice".to_string(),
                email: "alice@example.com".to_string(),
                password: "secret".to_string(),
            })
            .await;

        assert_eq!(result, Err(CoreError::DuplicateAccount));
    }

    #[tokio::test]
    async fn test_login_unknown_email_is_invalid_credentials() {
        let mut accounts = MockAccountRepository::new();
        accounts
            .expect_get_by_email()
            .returning(|_| Box::pin(async { Ok(None) }));

        let result = service(accounts, MockHasherRepository::new())
            .login(LoginInput {
                email: "nobody@example.com".to_string(),
                password: "secret".to_string(),
            })
            .await;

        assert_eq!(result, Err(CoreError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_invalid_credentials() {
        let mut accounts = MockAccountRepository::new();
        accounts
            .expect_get_by_email()
            .with(eq("alice@example.com".to_string()))
            .returning(|_| Box::pin(async { Ok(Some(stored_account())) }));

        let mut hasher = MockHasherRepository::new();
        hasher
            .expect_verify_password()
            .returning(|_, _| Box::pin(async { Ok(false) }));

        let result = service(accounts, hasher)
            .login(LoginInput {
                email: "alice@example.com".to_string(),
                password: "wrong".to_string(),
            })
            .await;

        assert_eq!(result, Err(CoreError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_returns_account() {
        let mut accounts = MockAccountRepository::new();
        accounts
            .expect_get_by_email()
            .returning(|_| Box::pin(async { Ok(Some(stored_account())) }));

        let mut hasher = MockHasherRepository::new();
        hasher
            .expect_verify_password()
            .with(eq("secret".to_string()), eq("hashed:secret".to_string()))
            .returning(|_, _| Box::pin(async { Ok(true) }));

        let account = service(accounts, hasher)
            .login(LoginInput {
                email: "alice@example.com".to_string(),
                password: "secret".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(account.username, "alice");
    }

    #[tokio::test]
    async fn test_update_profile_unknown_email_is_not_found() {
        let mut accounts = MockAccountRepository::new();
        accounts
            .expect_get_by_email()
            .returning(|_| Box::pin(async { Ok(None) }));

        let result = service(accounts, MockHasherRepository::new())
            .update_profile(UpdateProfileInput {
                email: "nobody@example.com".to_string(),
                username: "bob".to_string(),
                password: None,
            })
            .await;

        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_update_profile_keeps_password_when_blank() {
        for blank in ["", "   ", "\t\n"] {
            let mut accounts = MockAccountRepository::new();
            accounts
                .expect_get_by_email()
                .returning(|_| Box::pin(async { Ok(Some(stored_account())) }));
            accounts
                .expect_update()
                .times(1)
                .returning(|account| Box::pin(async move { Ok(account) }));

            let mut hasher = MockHasherRepository::new();
            hasher.expect_hash_password().never();

            let account = service(accounts, hasher)
                .update_profile(UpdateProfileInput {
                    email: "alice@example.com".to_string(),
                    username: "alice2".to_string(),
                    password: Some(blank.to_string()),
                })
                .await
                .unwrap();

            assert_eq!(account.username, "alice2");
            assert_eq!(account.password_hash, "hashed:secret", "password {blank:?}");
        }
    }

    #[tokio::test]
    async fn test_update_profile_rehashes_new_password() {
        let mut accounts = MockAccountRepository::new();
        accounts
            .expect_get_by_email()
            .returning(|_| Box::pin(async { Ok(Some(stored_account())) }));
        accounts
            .expect_update()
            .returning(|account| Box::pin(async move { Ok(account) }));

        let mut hasher = MockHasherRepository::new();
        hasher
            .expect_hash_password()
            .with(eq("new-secret".to_string()))
            .times(1)
            .returning(|password| Box::pin(async move { Ok(format!("hashed:{password}")) }));

        let account = service(accounts, hasher)
            .update_profile(UpdateProfileInput {
                email: "alice@example.com".to_string(),
                username: "alice".to_string(),
                password: Some("new-secret".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(account.password_hash, "hashed:new-secret");
    }
}
