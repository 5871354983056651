use axum::Json;
use axum::extract::{Extension, State};

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::store::UserRepository;
use crate::types::request::LoginData;
use crate::types::{Claims, DecodedRenewalToken, SanitizedAccount, TokenPair, response};

pub(crate) async fn login<R: UserRepository + 'static>(
    State(state): State<AppState<R>>,
    Json(user_data): Json<LoginData>,
) -> Result<Json<response::Login>, Error> {
    let account = state
        .auth
        .validate_credentials(&user_data.email, &user_data.password)
        .await
        .ok_or(Error::Unauthorized)?;

    Ok(Json(state.auth.login(account)?))
}

pub(crate) async fn refresh<R: UserRepository + 'static>(
    State(state): State<AppState<R>>,
    Extension(decoded): Extension<DecodedRenewalToken>,
) -> Result<Json<TokenPair>, Error> {
    Ok(Json(state.auth.refresh(&decoded).await?))
}

pub(crate) async fn me<R: UserRepository + 'static>(
    State(state): State<AppState<R>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<SanitizedAccount>, Error> {
    let account = state
        .auth
        .repository()
        .find_by_email(&claims.email)
        .await?
        .ok_or(Error::Unauthorized)?;

    Ok(Json(SanitizedAccount::from(&account)))
}
