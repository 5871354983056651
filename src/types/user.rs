use serde::{Deserialize, Serialize};

pub type AccountId = String;

/// A user record as held by the user store.
#[derive(Clone)]
pub struct Account {
    pub id: AccountId,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub active: bool,
}

impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("name", &self.name)
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}

/// An [`Account`] without its secret material, safe to hand to callers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizedAccount {
    pub id: AccountId,
    pub email: String,
    pub name: String,
    pub active: bool,
}

impl From<&Account> for SanitizedAccount {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.clone(),
            email: account.email.clone(),
            name: account.name.clone(),
            active: account.active,
        }
    }
}
