use chrono::{Duration, Utc};
use config::Config;
use serde::Deserialize;

use crate::core::error::ConfigError;

#[derive(Debug, Deserialize, Clone)]
pub(crate) struct Args {
    pub(crate) database_host: String,
    pub(crate) database_port: u16,
    pub(crate) database_name: String,
    pub(crate) database_user: String,
    pub(crate) database_password: String,
    pub(crate) log_level: String,
    pub(crate) port: u16,
    pub(crate) secret: String,
    pub(crate) access_token_minutes: i64,
    pub(crate) renewal_token_hours: i64,
    pub(crate) refresh_requires_active: bool,
    pub(crate) password_hash_cost: u32,
}

impl Args {
    pub(crate) fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("log_level", "info")?
            .set_default("port", 3000)?
            .set_default("access_token_minutes", 15)?
            .set_default("renewal_token_hours", 168)?
            .set_default("refresh_requires_active", false)?
            .set_default("password_hash_cost", i64::from(bcrypt::DEFAULT_COST))?
            .add_source(config::Environment::with_prefix("SESSIONGATE"))
            .build()?
            .try_deserialize::<Args>()
            .map_err(ConfigError::Config)
    }

    pub(crate) fn database_url(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.database_user,
            self.database_password,
            self.database_host,
            self.database_port,
            self.database_name
        )
    }

    /// Access and renewal horizons, in that order.
    pub(crate) fn token_lifetimes(&self) -> Result<(Duration, Duration), ConfigError> {
        let invalid = || ConfigError::InvalidTokenLifetime {
            access_minutes: self.access_token_minutes,
            renewal_hours: self.renewal_token_hours,
        };

        let access = Duration::try_minutes(self.access_token_minutes).ok_or_else(invalid)?;
        let renewal = Duration::try_hours(self.renewal_token_hours).ok_or_else(invalid)?;

        if access <= Duration::zero() || renewal <= access {
            return Err(invalid());
        }

        // expiry must stay representable for every token issued from now on
        if Utc::now().checked_add_signed(renewal).is_none() {
            return Err(invalid());
        }

        Ok((access, renewal))
    }
}
