use axum::extract::{Request, State};
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::Response;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::store::UserRepository;

fn bearer_token(headers: &HeaderMap) -> Result<&str, Error> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .ok_or(Error::NoCredentials)?;

    let mut header = auth_header.to_str()?.split_whitespace();

    match (header.next(), header.next()) {
        (Some(scheme), Some(token)) if scheme.eq_ignore_ascii_case("bearer") => Ok(token),
        _ => Err(Error::NoCredentials),
    }
}

/// Verifies an access token and exposes its claims to the handler.
pub(crate) async fn authorize<R: UserRepository + 'static>(
    State(state): State<AppState<R>>,
    mut request: Request,
    next: Next,
) -> Result<Response, Error> {
    let claims = state
        .auth
        .issuer()
        .decode_access_token(bearer_token(request.headers())?)?;

    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

/// Verifies a renewal token and exposes its decoded form to the handler.
pub(crate) async fn authorize_renewal<R: UserRepository + 'static>(
    State(state): State<AppState<R>>,
    mut request: Request,
    next: Next,
) -> Result<Response, Error> {
    let decoded = state
        .auth
        .issuer()
        .decode_renewal_token(bearer_token(request.headers())?)?;

    request.extensions_mut().insert(decoded);

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_bearer_token() {
        assert_eq!(bearer_token(&headers("Bearer abc")).unwrap(), "abc");
        assert_eq!(bearer_token(&headers("bearer abc")).unwrap(), "abc");
    }

    #[test]
    fn test_bearer_token_missing() {
        assert!(matches!(
            bearer_token(&HeaderMap::new()),
            Err(Error::NoCredentials)
        ));
        assert!(matches!(
            bearer_token(&headers("Bearer")),
            Err(Error::NoCredentials)
        ));
        assert!(matches!(
            bearer_token(&headers("Basic abc")),
            Err(Error::NoCredentials)
        ));
    }
}
