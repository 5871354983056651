use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{self, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::core::error::Error;
use crate::types::{Claims, DecodedRenewalToken, TokenKind, TokenPair};

/// Signs and verifies access/renewal token pairs with one shared HS256 secret.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_ttl: Duration,
    renewal_ttl: Duration,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("access_ttl", &self.access_ttl)
            .field("renewal_ttl", &self.renewal_ttl)
            .finish()
    }
}

impl TokenIssuer {
    pub fn new(secret: &str, access_ttl: Duration, renewal_ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            access_ttl,
            renewal_ttl,
        }
    }

    /// Mints a fresh pair for the account identified by `id` and `email`.
    pub fn issue(&self, id: &str, email: &str) -> Result<TokenPair, Error> {
        let now = Utc::now();

        Ok(TokenPair {
            access_token: self.sign(id, email, now, self.access_ttl, TokenKind::Access)?,
            renewal_token: self.sign(id, email, now, self.renewal_ttl, TokenKind::Renewal)?,
        })
    }

    pub fn decode_access_token(&self, token: &str) -> Result<Claims, Error> {
        self.decode(token, TokenKind::Access)
    }

    pub fn decode_renewal_token(&self, token: &str) -> Result<DecodedRenewalToken, Error> {
        self.decode(token, TokenKind::Renewal).map(Into::into)
    }

    fn sign(
        &self,
        id: &str,
        email: &str,
        now: DateTime<Utc>,
        ttl: Duration,
        kind: TokenKind,
    ) -> Result<String, Error> {
        let claims = Claims {
            sub: id.to_owned(),
            email: email.to_owned(),
            iat: now.timestamp(),
            exp: now
                .checked_add_signed(ttl)
                .ok_or(Error::TokenExpiryOutOfRange)?
                .timestamp(),
            kind,
        };

        Ok(jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding_key,
        )?)
    }

    fn decode(&self, token: &str, kind: TokenKind) -> Result<Claims, Error> {
        let claims =
            match jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation) {
                Ok(token_data) => token_data.claims,
                Err(e) => match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        return Err(Error::ExpiredJWT);
                    }
                    _ => return Err(Error::Jwt(e)),
                },
            };

        if claims.kind != kind {
            return Err(Error::InvalidTokenKind);
        }

        Ok(claims)
    }
}
