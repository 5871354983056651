use std::sync::Arc;

use tracing::instrument;

use crate::core::error::ConfigError;
use crate::store::UserRepository;
use crate::types::SanitizedAccount;

const DUMMY_SECRET: &str = "sessiongate-dummy-secret";

/// Checks an email/password pair against the user store.
///
/// Every rejection collapses to `None`. The reason is only ever logged, and
/// every path pays for one bcrypt comparison at `hash_cost` so response time
/// does not tell the reasons apart either.
pub struct CredentialValidator<R> {
    repository: Arc<R>,
    dummy_hash: Arc<str>,
}

impl<R> Clone for CredentialValidator<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            dummy_hash: Arc::clone(&self.dummy_hash),
        }
    }
}

impl<R> std::fmt::Debug for CredentialValidator<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialValidator").finish_non_exhaustive()
    }
}

impl<R: UserRepository> CredentialValidator<R> {
    /// `hash_cost` should match the cost stored password hashes were made with.
    pub fn new(repository: Arc<R>, hash_cost: u32) -> Result<Self, ConfigError> {
        Ok(Self {
            repository,
            dummy_hash: bcrypt::hash(DUMMY_SECRET, hash_cost)?.into(),
        })
    }

    #[instrument(skip(self, secret))]
    pub async fn validate(&self, email: &str, secret: &str) -> Option<SanitizedAccount> {
        let account = match self.repository.find_by_email(email).await {
            Ok(Some(account)) => account,
            Ok(None) => {
                tracing::debug!("no account for email");
                return self.reject(secret);
            }
            Err(e) => {
                tracing::warn!("account lookup failed: {}", e);
                return self.reject(secret);
            }
        };

        match bcrypt::verify(secret, &account.password_hash) {
            Ok(true) if account.active => Some(SanitizedAccount::from(&account)),
            Ok(true) => {
                tracing::debug!(id = %account.id, "account is inactive");
                None
            }
            Ok(false) => {
                tracing::debug!(id = %account.id, "password mismatch");
                None
            }
            Err(e) => {
                tracing::warn!(id = %account.id, "stored hash unusable: {}", e);
                self.reject(secret)
            }
        }
    }

    /// Burns the same work as a real comparison before failing.
    fn reject(&self, secret: &str) -> Option<SanitizedAccount> {
        let _ = bcrypt::verify(secret, &self.dummy_hash);
        None
    }
}
