//! Hotel model and DTOs.

use eventstay_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::room::Room;

/// A hotel row from the `hotels` table. Read-only from this crate's
/// perspective beyond test seeding.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Hotel {
    pub id: DbId,
    pub name: String,
    pub image: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A hotel together with all of its rooms, as returned by the hotel detail
/// endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct HotelWithRooms {
    pub id: DbId,
    pub name: String,
    pub image: String,
    pub rooms: Vec<Room>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl HotelWithRooms {
    pub fn new(hotel: Hotel, rooms: Vec<Room>) -> Self {
        Self {
            id: hotel.id,
            name: hotel.name,
            image: hotel.image,
            rooms,
            created_at: hotel.created_at,
            updated_at: hotel.updated_at,
        }
    }
}

/// DTO for creating a hotel.
pub struct CreateHotel {
    pub name: String,
    pub image: String,
}
