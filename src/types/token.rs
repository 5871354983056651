use serde::{Deserialize, Serialize};

use crate::types::user::AccountId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Access,
    Renewal,
}

/// Payload signed into both halves of a [`TokenPair`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: AccountId,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
    pub kind: TokenKind,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub renewal_token: String,
}

/// Claims of a renewal token whose signature and expiry were already checked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedRenewalToken {
    pub sub: AccountId,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

impl From<Claims> for DecodedRenewalToken {
    fn from(claims: Claims) -> Self {
        Self {
            sub: claims.sub,
            email: claims.email,
            iat: claims.iat,
            exp: claims.exp,
        }
    }
}
