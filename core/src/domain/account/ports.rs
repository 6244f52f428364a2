use std::future::Future;

use crate::domain::{
    account::{
        entities::Account,
        value_objects::{LoginInput, SignupInput, UpdateProfileInput},
    },
    common::entities::app_errors::CoreError,
};

#[cfg_attr(test, mockall::automock)]
pub trait AccountService: Send + Sync {
    fn signup(&self, input: SignupInput)
    -> impl Future<Output = Result<Account, CoreError>> + Send;

    fn login(&self, input: LoginInput) -> impl Future<Output = Result<Account, CoreError>> + Send;

    fn update_profile(
        &self,
        input: UpdateProfileInput,
    ) -> impl Future<Output = Result<Account, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait AccountRepository: Send + Sync {
    /// Fails with `CoreError::DuplicateAccount` when username or email is taken.
    fn create(&self, account: Account) -> impl Future<Output = Result<Account, CoreError>> + Send;

    fn get_by_email(
        &self,
        email: String,
    ) -> impl Future<Output = Result<Option<Account>, CoreError>> + Send;

    /// Fails with `CoreError::NotFound` when the row no longer exists.
    fn update(&self, account: Account) -> impl Future<Output = Result<Account, CoreError>> + Send;
}
