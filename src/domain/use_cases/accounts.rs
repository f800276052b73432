use validator::Validate;

use crate::{
    entities::account::{Account, AccountId, NewAccount},
    errors::AppError,
    repositories::account::AccountRepository,
};

pub struct AccountHandler<R>
where
    R: AccountRepository,
{
    pub account_repo: R,
}

impl<R> AccountHandler<R>
where
    R: AccountRepository,
{
    pub fn new(account_repo: R) -> Self {
        AccountHandler { account_repo }
    }

    pub async fn register(&self, request: NewAccount) -> Result<Account, AppError> {
        request.validate()?;

        self.account_repo.create_account(request).await
    }

    pub async fn find(&self, id: AccountId) -> Result<Account, AppError> {
        self.account_repo
            .get_account(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Account not found".to_string()))
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<Account>, AppError> {
        self.account_repo.get_account_by_username(username).await
    }
}
