//! Route definitions for the booking workflow.
//!
//! Mounted at `/booking`.
//!
//! ```text
//! GET  /                    show
//! POST /                    create
//! PUT  /{booking_id}        update_room
//! ```

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::booking;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(booking::show).post(booking::create))
        .route("/{booking_id}", put(booking::update_room))
}
