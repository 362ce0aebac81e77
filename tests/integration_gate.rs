mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::{TEST_SECRET, signed_token, unsigned_token};
use http_body_util::BodyExt;
use reservapp_gate::reservapp_config::{CorsConfig, GateConfig};
use reservapp_gate::router::init_router;
use reservapp_gate::state::AppState;
use serde_json::json;
use tower::ServiceExt;

fn setup_test_app() -> axum::Router {
    setup_test_app_with(GateConfig::default())
}

fn setup_test_app_with(gate_config: GateConfig) -> axum::Router {
    let state = AppState::new(gate_config, CorsConfig::default()).unwrap();
    init_router(state)
}

fn get(uri: &str) -> axum::http::request::Builder {
    Request::builder().method("GET").uri(uri)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

fn location(response: &axum::response::Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
}

#[tokio::test]
async fn test_anonymous_dashboard_redirects_to_login() {
    let app = setup_test_app();

    let response = app
        .oneshot(get("/dashboard/admin").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/login?reason=unauthorized");
}

#[tokio::test]
async fn test_wrong_role_redirects_to_unauthorized() {
    let app = setup_test_app();
    let token = unsigned_token("CUSTOMER", 3600);

    let response = app
        .oneshot(
            get("/dashboard/admin/users")
                .header(header::COOKIE, format!("authToken={}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/unauthorized?reason=invalid_role");
}

#[tokio::test]
async fn test_allowed_request_reaches_page() {
    let app = setup_test_app();
    let token = unsigned_token("ADMIN", 3600);

    let response = app
        .oneshot(
            get("/dashboard/admin")
                .header(header::COOKIE, format!("authToken={}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "page": "/dashboard/admin" }));
}

#[tokio::test]
async fn test_dashboard_root_redirects_to_role_landing() {
    let app = setup_test_app();
    let token = unsigned_token("PROVIDER", 3600);

    let response = app
        .oneshot(
            get("/dashboard")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/dashboard/provider?reason=unauthorized");
}

#[tokio::test]
async fn test_signed_in_user_bounced_from_login() {
    let app = setup_test_app();
    let token = unsigned_token("CUSTOMER", 3600);

    let response = app
        .oneshot(
            get("/login")
                .header(header::COOKIE, format!("token={}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/dashboard/customer?reason=unauthorized");
}

#[tokio::test]
async fn test_expired_token_keeps_query_and_replaces_reason() {
    let app = setup_test_app();
    let token = unsigned_token("ADMIN", -60);

    let response = app
        .oneshot(
            get("/settings?tab=billing&reason=stale")
                .header(header::COOKIE, format!("authToken={}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/login?tab=billing&reason=token_expired");
}

#[tokio::test]
async fn test_api_path_rejected_with_json() {
    let app = setup_test_app();

    let response = app
        .oneshot(get("/api/protected/reservations").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().get(header::LOCATION).is_none());
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Unauthorized", "reason": "unauthorized" })
    );
}

#[tokio::test]
async fn test_api_path_allowed_with_session() {
    let app = setup_test_app();
    let token = unsigned_token("CUSTOMER", 3600);

    let response = app
        .oneshot(
            get("/api/protected/reservations")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_public_and_unmatched_paths_pass_through() {
    for path in ["/", "/about", "/contact", "/unauthorized"] {
        let response = setup_test_app()
            .oneshot(get(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{path}");
    }

    let response = setup_test_app()
        .oneshot(get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let response = setup_test_app()
        .oneshot(get("/no/such/page").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("/no/such/page"));
}

#[tokio::test]
async fn test_header_beats_cookie() {
    let app = setup_test_app();
    let admin = unsigned_token("ADMIN", 3600);
    let customer = unsigned_token("CUSTOMER", 3600);

    let response = app
        .oneshot(
            get("/dashboard/admin")
                .header(header::AUTHORIZATION, format!("Bearer {}", admin))
                .header(header::COOKIE, format!("authToken={}", customer))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_primary_cookie_beats_legacy_cookie() {
    let app = setup_test_app();
    let admin = unsigned_token("ADMIN", 3600);
    let customer = unsigned_token("CUSTOMER", 3600);

    let response = app
        .oneshot(
            get("/dashboard/admin")
                .header(
                    header::COOKIE,
                    format!("token={}; authToken={}", admin, customer),
                )
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/unauthorized?reason=invalid_role");
}

#[tokio::test]
async fn test_custom_cookie_name() {
    let app = setup_test_app_with(GateConfig {
        auth_cookie: "session".to_string(),
        legacy_cookie: None,
        ..GateConfig::default()
    });
    let token = unsigned_token("ADMIN", 3600);

    let response = app
        .oneshot(
            get("/profile")
                .header(header::COOKIE, format!("session={}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_signature_verification_when_secret_configured() {
    let config = GateConfig {
        jwt_secret: Some(TEST_SECRET.to_string()),
        ..GateConfig::default()
    };

    let signed = signed_token("ADMIN", 3600, TEST_SECRET);
    let response = setup_test_app_with(config.clone())
        .oneshot(
            get("/dashboard/admin")
                .header(header::COOKIE, format!("authToken={}", signed))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let forged = signed_token("ADMIN", 3600, "not_the_secret");
    let response = setup_test_app_with(config)
        .oneshot(
            get("/dashboard/admin")
                .header(header::COOKIE, format!("authToken={}", forged))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/login?reason=token_expired");
}

#[tokio::test]
async fn test_trailing_slash_dashboard_redirects_to_landing() {
    let app = setup_test_app();
    let token = unsigned_token("CUSTOMER", 3600);

    let response = app
        .oneshot(
            get("/dashboard/")
                .header(header::COOKIE, format!("authToken={}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/dashboard/customer?reason=unauthorized");
}
