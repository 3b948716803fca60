//! Room model and DTOs.

use eventstay_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A room row from the `rooms` table. `capacity` is the maximum number of
/// simultaneous bookings the room may hold.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Room {
    pub id: DbId,
    pub hotel_id: DbId,
    pub name: String,
    pub capacity: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a room.
pub struct CreateRoom {
    pub hotel_id: DbId,
    pub name: String,
    pub capacity: i32,
}
