use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct LoginData {
    pub(crate) email: String,
    pub(crate) password: String,
}
