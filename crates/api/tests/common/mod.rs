//! Shared harness for HTTP-level integration tests.
//!
//! Mirrors the router construction in `main.rs` via
//! [`eventstay_api::router::build_app_router`] so tests exercise the same
//! middleware stack (CORS, request ID, timeout, tracing, panic recovery)
//! that production uses, plus request helpers and data factories.

#![allow(dead_code)] // not every test binary uses every helper

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use sqlx::PgPool;
use tower::ServiceExt;

use eventstay_api::auth::jwt::{generate_access_token, JwtConfig};
use eventstay_api::config::ServerConfig;
use eventstay_api::router::build_app_router;
use eventstay_api::state::AppState;
use eventstay_db::models::enrollment::CreateEnrollment;
use eventstay_db::models::hotel::CreateHotel;
use eventstay_db::models::room::CreateRoom;
use eventstay_db::models::session::CreateSession;
use eventstay_db::models::ticket::{CreateTicket, CreateTicketType, TicketStatus};
use eventstay_db::models::user::CreateUser;
use eventstay_db::repositories::{
    EnrollmentRepo, HotelRepo, RoomRepo, SessionRepo, TicketRepo, UserRepo,
};

/// JWT secret shared by the test config and token factory.
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, path: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(path)
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("request should complete")
}

pub async fn get_auth(app: Router, path: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(path)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("request should complete")
}

pub async fn post_json_auth(
    app: Router,
    path: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header("authorization", format!("Bearer {token}"))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.oneshot(request).await.expect("request should complete")
}

pub async fn put_json_auth(
    app: Router,
    path: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("PUT")
        .uri(path)
        .header("authorization", format!("Bearer {token}"))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.oneshot(request).await.expect("request should complete")
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    use http_body_util::BodyExt;
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Assert the standard `{ "error": ..., "code": ... }` envelope.
pub async fn assert_error_code(response: Response<Body>, status: StatusCode, code: &str) {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["code"], code);
}

// ---------------------------------------------------------------------------
// Data factories
// ---------------------------------------------------------------------------

/// A signed-in test user: database id plus a bearer token backed by a
/// session row.
pub struct TestUser {
    pub user_id: i64,
    pub token: String,
}

/// Create a user plus a session-backed bearer token.
pub async fn signed_in_user(pool: &PgPool, email: &str) -> TestUser {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            password_hash: "hashed-password".to_string(),
        },
    )
    .await
    .expect("user creation should succeed");

    let token = generate_access_token(user.id, &test_config().jwt)
        .expect("token generation should succeed");

    SessionRepo::create(
        pool,
        &CreateSession {
            user_id: user.id,
            token: token.clone(),
        },
    )
    .await
    .expect("session creation should succeed");

    TestUser {
        user_id: user.id,
        token,
    }
}

/// Give a user a ticket with the requested status and type flags.
pub async fn give_ticket(
    pool: &PgPool,
    user_id: i64,
    status: TicketStatus,
    includes_hotel: bool,
    is_remote: bool,
) {
    let enrollment = EnrollmentRepo::create(
        pool,
        &CreateEnrollment {
            user_id,
            name: "Test Attendee".to_string(),
        },
    )
    .await
    .expect("enrollment creation should succeed");

    let ticket_type = TicketRepo::create_type(
        pool,
        &CreateTicketType {
            name: "Test Type".to_string(),
            price_cents: 25_000,
            is_remote,
            includes_hotel,
        },
    )
    .await
    .expect("ticket type creation should succeed");

    TicketRepo::create(
        pool,
        &CreateTicket {
            enrollment_id: enrollment.id,
            ticket_type_id: ticket_type.id,
            status,
        },
    )
    .await
    .expect("ticket creation should succeed");
}

/// Create a signed-in user holding a PAID, hotel-inclusive, in-person ticket.
pub async fn entitled_user(pool: &PgPool, email: &str) -> TestUser {
    let user = signed_in_user(pool, email).await;
    give_ticket(pool, user.user_id, TicketStatus::Paid, true, false).await;
    user
}

/// Create a hotel with one room of the given capacity; returns the room id.
pub async fn room_with_capacity(pool: &PgPool, capacity: i32) -> i64 {
    let hotel = HotelRepo::create(
        pool,
        &CreateHotel {
            name: "Driven Resort".to_string(),
            image: "https://example.com/resort.jpg".to_string(),
        },
    )
    .await
    .expect("hotel creation should succeed");

    RoomRepo::create(
        pool,
        &CreateRoom {
            hotel_id: hotel.id,
            name: "101".to_string(),
            capacity,
        },
    )
    .await
    .expect("room creation should succeed")
    .id
}
