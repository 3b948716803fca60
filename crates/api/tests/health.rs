//! Integration tests for the health check endpoint and router plumbing.

mod common;

use axum::http::StatusCode;

use common::{body_json, build_test_app, get};

#[sqlx::test(migrations = "../../migrations")]
async fn health_check_reports_ok(pool: sqlx::PgPool) {
    let app = build_test_app(pool);

    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[sqlx::test(migrations = "../../migrations")]
async fn health_check_is_not_versioned(pool: sqlx::PgPool) {
    let app = build_test_app(pool);

    // The health endpoint lives at the root, not under /api/v1.
    let response = get(app, "/api/v1/health").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../migrations")]
async fn unknown_route_returns_404(pool: sqlx::PgPool) {
    let app = build_test_app(pool);

    let response = get(app, "/api/v1/does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../migrations")]
async fn responses_carry_a_request_id(pool: sqlx::PgPool) {
    let app = build_test_app(pool);

    let response = get(app, "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("x-request-id header should be set");
    assert!(!request_id.is_empty());
}
