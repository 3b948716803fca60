//! Repository for the `hotels` table.

use sqlx::PgPool;

use eventstay_core::types::DbId;

use crate::models::hotel::{CreateHotel, Hotel, HotelWithRooms};
use crate::models::room::Room;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, image, created_at, updated_at";

/// Provides hotel reads for the listing endpoints.
pub struct HotelRepo;

impl HotelRepo {
    /// List all hotels, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Hotel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hotels ORDER BY id");
        sqlx::query_as::<_, Hotel>(&query).fetch_all(pool).await
    }

    /// Find a hotel together with all of its rooms.
    pub async fn find_by_id_with_rooms(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<HotelWithRooms>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hotels WHERE id = $1");
        let Some(hotel) = sqlx::query_as::<_, Hotel>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };

        let rooms = sqlx::query_as::<_, Room>(
            "SELECT id, hotel_id, name, capacity, created_at, updated_at \
             FROM rooms WHERE hotel_id = $1 ORDER BY id",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        Ok(Some(HotelWithRooms::new(hotel, rooms)))
    }

    /// Insert a hotel, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateHotel) -> Result<Hotel, sqlx::Error> {
        let query = format!(
            "INSERT INTO hotels (name, image) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Hotel>(&query)
            .bind(&input.name)
            .bind(&input.image)
            .fetch_one(pool)
            .await
    }
}
