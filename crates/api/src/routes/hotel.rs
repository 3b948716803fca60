//! Route definitions for hotel listing.
//!
//! Mounted at `/hotels`.
//!
//! ```text
//! GET /                     list
//! GET /{hotel_id}           get_by_id
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::hotel;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(hotel::list))
        .route("/{hotel_id}", get(hotel::get_by_id))
}
