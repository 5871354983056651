use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Database migration error: {0}")]
    DatabaseMigration(#[from] sqlx::migrate::MigrateError),
    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
    #[error("SQL error: {0}")]
    Sql(#[from] sqlx::Error),
    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
    #[error(
        "Invalid token lifetime: access {access_minutes}m must be positive and shorter than renewal {renewal_hours}h"
    )]
    InvalidTokenLifetime {
        access_minutes: i64,
        renewal_hours: i64,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("SQL error: {0}")]
    Sql(#[from] sqlx::Error),
    #[error("{0}")]
    Repository(String),
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
    #[error("No credentials provided")]
    NoCredentials,
    #[error("Expired JWT")]
    ExpiredJWT,
    #[error("Invalid token kind")]
    InvalidTokenKind,
    #[error("Unauthorized")]
    Unauthorized,
    #[error("User does not exist")]
    UserDoesNotExist,
    #[error("Account is inactive")]
    AccountInactive,
    #[error("Token expiry out of range")]
    TokenExpiryOutOfRange,
    #[error("Header decode error: {0}")]
    HeaderDecode(#[from] axum::http::header::ToStrError),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!("{:?}", self);

        let (status, message) = match self {
            Error::Sql(_) => (StatusCode::INTERNAL_SERVER_ERROR, "SQL error"),
            Error::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Repository error"),
            Error::Jwt(_) => (StatusCode::UNAUTHORIZED, "Invalid JWT"),
            Error::NoCredentials => (StatusCode::UNAUTHORIZED, "No credentials provided"),
            Error::ExpiredJWT => (StatusCode::UNAUTHORIZED, "Expired JWT"),
            Error::InvalidTokenKind => (StatusCode::UNAUTHORIZED, "Invalid token kind"),
            Error::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            Error::UserDoesNotExist => (StatusCode::NOT_FOUND, "User does not exist"),
            Error::AccountInactive => (StatusCode::FORBIDDEN, "Account is inactive"),
            Error::TokenExpiryOutOfRange => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            Error::HeaderDecode(_) => (StatusCode::BAD_REQUEST, "Header decode error"),
        };

        (status, message).into_response()
    }
}
