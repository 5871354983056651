use std::collections::HashMap;

use crate::core::error::Error;
use crate::store::UserRepository;
use crate::types::Account;

/// In-memory repository for tests; `failure` makes every lookup error out.
#[derive(Default)]
pub(crate) struct FakeRepository {
    accounts: HashMap<String, Account>,
    failure: Option<String>,
}

impl FakeRepository {
    pub(crate) fn with_accounts(accounts: impl IntoIterator<Item = Account>) -> Self {
        Self {
            accounts: accounts
                .into_iter()
                .map(|account| (account.email.clone(), account))
                .collect(),
            failure: None,
        }
    }

    pub(crate) fn failing(message: &str) -> Self {
        Self {
            accounts: HashMap::new(),
            failure: Some(message.to_owned()),
        }
    }
}

impl UserRepository for FakeRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, Error> {
        if let Some(message) = &self.failure {
            return Err(Error::Repository(message.clone()));
        }

        Ok(self.accounts.get(email).cloned())
    }
}

pub(crate) fn account(id: &str, email: &str, password: &str, active: bool) -> Account {
    Account {
        id: id.into(),
        email: email.into(),
        name: "Test User".into(),
        password_hash: bcrypt::hash(password, 4).unwrap(),
        active,
    }
}
