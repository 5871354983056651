pub(crate) mod request;
pub mod response;
pub mod token;
pub mod user;

pub use token::{Claims, DecodedRenewalToken, TokenKind, TokenPair};
pub use user::{Account, AccountId, SanitizedAccount};
