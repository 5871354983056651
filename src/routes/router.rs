use crate::core::state::AppState;
use crate::routes::auth;
use crate::store::UserRepository;
use crate::utils;
use axum::{
    Router,
    extract::{MatchedPath, Request},
    http::Method,
    middleware,
    routing::{get, post},
};
use tower_http::{
    cors::{self, CorsLayer},
    trace::TraceLayer,
};
use tracing::info_span;

pub(crate) fn routes<R: UserRepository + 'static>(state: AppState<R>) -> Router {
    // /refresh expects a renewal token, /me an access token
    let refresh_router = Router::new()
        .route("/refresh", post(auth::refresh::<R>))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            utils::auth::authorize_renewal::<R>,
        ));

    let account_router = Router::new()
        .route("/me", get(auth::me::<R>))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            utils::auth::authorize::<R>,
        ));

    Router::new()
        .route("/login", post(auth::login::<R>))
        .merge(refresh_router)
        .merge(account_router)
        .with_state(state)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                let matched_path = request
                    .extensions()
                    .get::<MatchedPath>()
                    .map(MatchedPath::as_str);

                info_span!(
                    "request",
                    method = ?request.method(),
                    matched_path,
                )
            }),
        )
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_origin(cors::Any),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AuthService, TokenIssuer};
    use crate::store::testing::{FakeRepository, account};
    use crate::types::{SanitizedAccount, TokenPair, response};
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use chrono::Duration;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(repository: FakeRepository) -> (Router, TokenIssuer) {
        let issuer = TokenIssuer::new("secret", Duration::minutes(15), Duration::hours(168));
        let state = AppState {
            auth: AuthService::new(Arc::new(repository), Arc::new(issuer.clone()), false, 4)
                .unwrap(),
        };

        (routes(state), issuer)
    }

    fn accounts() -> FakeRepository {
        FakeRepository::with_accounts([
            account("u1", "a@b.com", "p", true),
            account("u2", "off@b.com", "p", false),
        ])
    }

    fn login_request(email: &str, password: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                serde_json::json!({ "email": email, "password": password }).to_string(),
            ))
            .unwrap()
    }

    fn bearer_request(method: Method, uri: &str, token: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap()
    }

    async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn test_login() {
        let (app, issuer) = app(accounts());

        let response = app.oneshot(login_request("a@b.com", "p")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let login: response::Login = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(login.account.id, "u1");
        assert!(issuer.decode_access_token(&login.tokens.access_token).is_ok());

        let body = serde_json::to_value(&login).unwrap();
        assert!(body["account"].get("password_hash").is_none());
    }

    #[tokio::test]
    async fn test_login_rejections_are_indistinguishable() {
        let (app, _) = app(accounts());

        let mut bodies = Vec::new();
        for (email, password) in [("a@b.com", "x"), ("nobody@b.com", "p"), ("off@b.com", "p")] {
            let response = app
                .clone()
                .oneshot(login_request(email, password))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
            bodies.push(body_bytes(response).await);
        }

        assert!(bodies.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (app, _) = app(accounts());

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_refresh() {
        let (app, issuer) = app(accounts());
        let pair = issuer.issue("u1", "a@b.com").unwrap();

        let response = app
            .oneshot(bearer_request(Method::POST, "/refresh", &pair.renewal_token))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let tokens: TokenPair = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(issuer.decode_renewal_token(&tokens.renewal_token).is_ok());
    }

    #[tokio::test]
    async fn test_refresh_rejects_access_token() {
        let (app, issuer) = app(accounts());
        let pair = issuer.issue("u1", "a@b.com").unwrap();

        let response = app
            .oneshot(bearer_request(Method::POST, "/refresh", &pair.access_token))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_refresh_for_deleted_account() {
        let (app, issuer) = app(accounts());
        let pair = issuer.issue("u9", "gone@b.com").unwrap();

        let response = app
            .oneshot(bearer_request(Method::POST, "/refresh", &pair.renewal_token))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_refresh_without_credentials() {
        let (app, _) = app(accounts());

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/refresh")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_me() {
        let (app, issuer) = app(accounts());
        let pair = issuer.issue("u1", "a@b.com").unwrap();

        let response = app
            .oneshot(bearer_request(Method::GET, "/me", &pair.access_token))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let account: SanitizedAccount =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(account.email, "a@b.com");
    }

    #[tokio::test]
    async fn test_repository_failure_on_refresh() {
        let (app, issuer) = app(FakeRepository::failing("User retrieval error"));
        let pair = issuer.issue("u1", "a@b.com").unwrap();

        let response = app
            .oneshot(bearer_request(Method::POST, "/refresh", &pair.renewal_token))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
