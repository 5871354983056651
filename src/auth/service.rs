use std::sync::Arc;

use tracing::instrument;

use crate::auth::issuer::TokenIssuer;
use crate::auth::validator::CredentialValidator;
use crate::core::error::{ConfigError, Error};
use crate::store::UserRepository;
use crate::types::{DecodedRenewalToken, SanitizedAccount, TokenPair, response};

/// Entry points used by the transport layer: validate, login, refresh.
pub struct AuthService<R> {
    validator: CredentialValidator<R>,
    issuer: Arc<TokenIssuer>,
    repository: Arc<R>,
    refresh_requires_active: bool,
}

impl<R> Clone for AuthService<R> {
    fn clone(&self) -> Self {
        Self {
            validator: self.validator.clone(),
            issuer: Arc::clone(&self.issuer),
            repository: Arc::clone(&self.repository),
            refresh_requires_active: self.refresh_requires_active,
        }
    }
}

impl<R> std::fmt::Debug for AuthService<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("validator", &self.validator)
            .field("issuer", &self.issuer)
            .field("refresh_requires_active", &self.refresh_requires_active)
            .finish()
    }
}

impl<R: UserRepository> AuthService<R> {
    pub fn new(
        repository: Arc<R>,
        issuer: Arc<TokenIssuer>,
        refresh_requires_active: bool,
        hash_cost: u32,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            validator: CredentialValidator::new(Arc::clone(&repository), hash_cost)?,
            issuer,
            repository,
            refresh_requires_active,
        })
    }

    pub fn issuer(&self) -> &TokenIssuer {
        &self.issuer
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub async fn validate_credentials(
        &self,
        email: &str,
        secret: &str,
    ) -> Option<SanitizedAccount> {
        self.validator.validate(email, secret).await
    }

    /// Issues a pair for an account that already passed validation.
    #[instrument(skip_all, fields(id = %account.id))]
    pub fn login(&self, account: SanitizedAccount) -> Result<response::Login, Error> {
        let tokens = self.issuer.issue(&account.id, &account.email)?;

        tracing::info!("issued token pair");

        Ok(response::Login::new(account, tokens))
    }

    /// Issues a new pair for the current state of the account a renewal
    /// token was issued to.
    ///
    /// Repository errors are returned as-is; a vanished account yields
    /// [`Error::UserDoesNotExist`].
    #[instrument(skip_all, fields(sub = %decoded.sub))]
    pub async fn refresh(&self, decoded: &DecodedRenewalToken) -> Result<TokenPair, Error> {
        let account = self
            .repository
            .find_by_email(&decoded.email)
            .await?
            .ok_or(Error::UserDoesNotExist)?;

        if self.refresh_requires_active && !account.active {
            return Err(Error::AccountInactive);
        }

        let tokens = self.issuer.issue(&account.id, &account.email)?;

        tracing::info!(id = %account.id, "refreshed token pair");

        Ok(tokens)
    }
}
