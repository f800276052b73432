use serde::{Deserialize, Serialize};
use validator::Validate;

pub type AccountId = i32;

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: AccountId,
    pub username: String,
    /// Opaque; stored as given and never serialized.
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewAccount {
    #[validate(length(min = 1, max = 64, message = "Username must be 1-64 characters"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: String,
}

impl NewAccount {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn into_account(self, id: AccountId) -> Account {
        Account {
            id,
            username: self.username,
            password: self.password,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PublicAccount {
    pub id: AccountId,
    pub username: String,
}

impl From<Account> for PublicAccount {
    fn from(account: Account) -> Self {
        PublicAccount {
            id: account.id,
            username: account.username,
        }
    }
}
