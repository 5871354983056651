use sqlx::Row;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};

use crate::core::error::{ConfigError, Error};
use crate::store::UserRepository;
use crate::types::Account;

#[derive(Clone, Debug)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn connect(database_url: &str) -> Result<Self, ConfigError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        Ok(Self::new(pool))
    }

    pub(crate) fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl UserRepository for PgUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, Error> {
        match sqlx::query(
            "SELECT
                id,
                email,
                name,
                password_hash,
                active
            FROM users
            WHERE email = $1;",
        )
        .bind(email)
        .map(map_account)
        .fetch_one(&self.pool)
        .await
        {
            Ok(account) => Ok(Some(account)),
            Err(sqlx::Error::RowNotFound) => Ok(None),
            Err(e) => Err(Error::Sql(e)),
        }
    }
}

fn map_account(row: PgRow) -> Account {
    Account {
        id: row.get("id"),
        email: row.get("email"),
        name: row.get("name"),
        password_hash: row.get("password_hash"),
        active: row.get("active"),
    }
}
