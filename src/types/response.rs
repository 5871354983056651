use serde::{Deserialize, Serialize};

use crate::types::token::TokenPair;
use crate::types::user::SanitizedAccount;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Login {
    pub account: SanitizedAccount,
    pub tokens: TokenPair,
}

impl Login {
    pub(crate) fn new(account: SanitizedAccount, tokens: TokenPair) -> Self {
        Self { account, tokens }
    }
}
