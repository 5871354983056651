use std::future::Future;

use crate::core::error::Error;
use crate::types::Account;

pub mod postgres;
#[cfg(test)]
pub(crate) mod testing;

pub use postgres::PgUserRepository;

/// Read access to the user store.
///
/// Implementations report storage failures as errors and a missing account
/// as `Ok(None)`; callers decide how each maps to their own outcome.
pub trait UserRepository: Send + Sync {
    fn find_by_email(&self, email: &str)
    -> impl Future<Output = Result<Option<Account>, Error>> + Send;
}
