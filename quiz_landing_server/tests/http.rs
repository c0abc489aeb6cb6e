// HTTP integration tests: full router, no socket.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use quiz_landing_server::{AppState, ServerConfig, SessionConfig, create_router};
use serde_json::Value;
use tower::ServiceExt; // for oneshot

fn app(config: ServerConfig) -> Router {
    create_router(AppState::new(config))
}

async fn get(app: Router, uri: &str, cookie: Option<&str>) -> (StatusCode, header::HeaderMap, String) {
    let mut request = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        let value = header::HeaderValue::from_bytes(cookie.as_bytes()).unwrap();
        request = request.header(header::COOKIE, value);
    }
    let response = app
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    (status, headers, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn health_check() {
    let (status, _, body) = get(app(ServerConfig::default()), "/health", None).await;
    assert_eq!(status, StatusCode::OK);

    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn anonymous_request_gets_signup_links() {
    let (status, headers, html) = get(app(ServerConfig::default()), "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(
        headers[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html")
    );
    assert_eq!(headers[header::VARY], "cookie");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert_eq!(html.matches(r#"href="/signup""#).count(), 2);
    assert!(!html.contains(r#"href="/create""#));
    assert_eq!(html.matches(r#"href="/join""#).count(), 2);
}

#[tokio::test]
async fn session_cookie_switches_links_to_create() {
    let (_, _, html) = get(
        app(ServerConfig::default()),
        "/",
        Some("theme=dark; session=abc123"),
    )
    .await;

    assert_eq!(html.matches(r#"href="/create""#).count(), 2);
    assert!(!html.contains(r#"href="/signup""#));
    assert_eq!(html.matches(r#"href="/join""#).count(), 2);
}

#[tokio::test]
async fn non_ascii_sibling_cookie_keeps_session() {
    let (_, _, html) = get(
        app(ServerConfig::default()),
        "/",
        Some("name=café; session=t"),
    )
    .await;

    assert_eq!(html.matches(r#"href="/create""#).count(), 2);
    assert!(!html.contains(r#"href="/signup""#));
}

#[tokio::test]
async fn disabled_session_detection_renders_anonymous() {
    let config = ServerConfig {
        session: SessionConfig {
            enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };
    let (_, _, html) = get(app(config), "/", Some("session=abc123")).await;

    assert!(html.contains(r#"href="/signup""#));
    assert!(!html.contains(r#"href="/create""#));
}

#[tokio::test]
async fn configured_logo_alt_is_rendered() {
    let mut config = ServerConfig::default();
    config.logo.alt = "ACOEM Logo".into();
    let (_, _, html) = get(app(config), "/", None).await;

    assert!(html.contains(r#"alt="ACOEM Logo""#));
}

#[tokio::test]
async fn model_endpoint_matches_session() {
    let (status, _, body) = get(app(ServerConfig::default()), "/api/landing", Some("session=t")).await;
    assert_eq!(status, StatusCode::OK);

    let model: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(model["session"], "authenticated");
    assert_eq!(model["cta"]["primary"], "/create");
    assert_eq!(model["cta"]["join"], "/join");
    assert_eq!(model["features"].as_array().unwrap().len(), 4);
    assert_eq!(model["steps"].as_array().unwrap().len(), 3);
    assert_eq!(model["quiz_types"].as_array().unwrap().len(), 3);

    let (_, _, body) = get(app(ServerConfig::default()), "/api/landing", None).await;
    let model: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(model["session"], "anonymous");
    assert_eq!(model["cta"]["primary"], "/signup");
}

#[tokio::test]
async fn unknown_route_is_404() {
    let (status, _, _) = get(app(ServerConfig::default()), "/create", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
