use std::sync::Arc;

use crate::auth::{AuthService, TokenIssuer};
use crate::core::config::Args;
use crate::core::error::ConfigError;
use crate::store::{PgUserRepository, UserRepository};

#[derive(Debug)]
pub(crate) struct AppState<R = PgUserRepository> {
    pub(crate) auth: AuthService<R>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            auth: self.auth.clone(),
        }
    }
}

impl<R: UserRepository> AppState<R> {
    pub(crate) fn new(repository: Arc<R>, config: &Args) -> Result<Self, ConfigError> {
        let (access_ttl, renewal_ttl) = config.token_lifetimes()?;
        let issuer = TokenIssuer::new(&config.secret, access_ttl, renewal_ttl);

        Ok(AppState {
            auth: AuthService::new(
                repository,
                Arc::new(issuer),
                config.refresh_requires_active,
                config.password_hash_cost,
            )?,
        })
    }
}
