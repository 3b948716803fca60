pub mod booking;
pub mod health;
pub mod hotel;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /booking                  show (GET), create (POST)
/// /booking/{booking_id}     reassign room (PUT)
///
/// /hotels                   list hotels (GET)
/// /hotels/{hotel_id}        hotel with rooms (GET)
/// ```
///
/// Every route requires authentication via the `AuthUser` extractor.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/booking", booking::router())
        .nest("/hotels", hotel::router())
}
