pub mod issuer;
pub mod service;
pub mod validator;

pub use issuer::TokenIssuer;
pub use service::AuthService;
pub use validator::CredentialValidator;
