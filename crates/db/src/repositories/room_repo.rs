//! Repository for the `rooms` table.

use sqlx::PgPool;

use eventstay_core::types::DbId;

use crate::models::room::{CreateRoom, Room};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, hotel_id, name, capacity, created_at, updated_at";

/// Provides room reads. Capacity-gated writes against rooms live in
/// [`crate::repositories::BookingRepo`].
pub struct RoomRepo;

impl RoomRepo {
    /// Find a room by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Room>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms WHERE id = $1");
        sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a room, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateRoom) -> Result<Room, sqlx::Error> {
        let query = format!(
            "INSERT INTO rooms (hotel_id, name, capacity) VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(input.hotel_id)
            .bind(&input.name)
            .bind(input.capacity)
            .fetch_one(pool)
            .await
    }
}
