use async_trait::async_trait;

use crate::{
    entities::account::{Account, AccountId, NewAccount},
    errors::AppError,
    repositories::memory_store::MemoryStore,
};

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn create_account(&self, account: NewAccount) -> Result<Account, AppError>;
    async fn get_account(&self, id: AccountId) -> Result<Option<Account>, AppError>;
    async fn get_account_by_username(&self, username: &str) -> Result<Option<Account>, AppError>;
}

#[async_trait]
impl AccountRepository for MemoryStore {
    async fn create_account(&self, account: NewAccount) -> Result<Account, AppError> {
        let mut tables = self.tables.write();

        if tables.accounts.values().any(|existing| existing.username == account.username) {
            return Err(AppError::Conflict("Account with this username already exists".to_string()));
        }

        let id = tables.allocate_account_id();
        let account = account.into_account(id);
        tables.accounts.insert(id, account.clone());

        Ok(account)
    }

    async fn get_account(&self, id: AccountId) -> Result<Option<Account>, AppError> {
        Ok(self.tables.read().accounts.get(&id).cloned())
    }

    async fn get_account_by_username(&self, username: &str) -> Result<Option<Account>, AppError> {
        Ok(self
            .tables
            .read()
            .accounts
            .values()
            .find(|account| account.username == username)
            .cloned())
    }
}
