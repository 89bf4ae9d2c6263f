//! Router tests that need no live database.

mod common;

use axum::http::StatusCode;
use common::{router, send, unreachable_pool};
use serde_json::json;

#[tokio::test]
async fn welcome_links_to_docs() {
    let app = router(unreachable_pool());
    let (status, body) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["docs"], "/docs");
    assert_eq!(body["openapi"], "/openapi.json");
    assert!(body["message"].as_str().unwrap().contains("Kart Club"));

    let (status, _) = send(&app, "GET", "/docs", None).await;
    assert!(status.is_success() || status.is_redirection(), "GET /docs -> {status}");

    let (status, page) = send(&app, "GET", "/docs/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.as_str().unwrap().contains("swagger-ui"));
}

#[tokio::test]
async fn health_and_version_do_not_touch_the_store() {
    let app = router(unreachable_pool());
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));

    let (status, body) = send(&app, "GET", "/version", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "kart-club");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = router(unreachable_pool());
    let (status, body) = send(&app, "GET", "/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/karts/{id}"].is_object());
    assert!(body["paths"]["/race-results"]["post"].is_object());
}

#[tokio::test]
async fn readiness_reports_unavailable_store() {
    let app = router(unreachable_pool());
    let (status, body) = send(&app, "GET", "/ready", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["database"], "unavailable");
}

#[tokio::test]
async fn store_failure_becomes_server_error() {
    let app = router(unreachable_pool());
    let (status, body) = send(&app, "GET", "/karts", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "database_error");
}

#[tokio::test]
async fn unknown_route_is_404() {
    let app = router(unreachable_pool());
    let (status, _) = send(&app, "GET", "/pit-lane", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
