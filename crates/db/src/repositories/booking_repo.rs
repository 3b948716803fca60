//! Repository for the `bookings` table, including the transactional
//! room-capacity placement paths.

use sqlx::PgPool;

use eventstay_core::types::DbId;

use crate::models::booking::{Booking, BookingWithRoom, RoomPlacement, RoomReassignment};
use crate::models::room::Room;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, room_id, created_at, updated_at";

/// Row shape for the booking + room join used by [`BookingRepo::find_by_user_with_room`].
#[derive(sqlx::FromRow)]
struct BookingRoomRow {
    booking_id: DbId,
    room_id: DbId,
    hotel_id: DbId,
    room_name: String,
    capacity: i32,
    room_created_at: eventstay_core::types::Timestamp,
    room_updated_at: eventstay_core::types::Timestamp,
}

impl From<BookingRoomRow> for BookingWithRoom {
    fn from(row: BookingRoomRow) -> Self {
        BookingWithRoom {
            id: row.booking_id,
            room: Room {
                id: row.room_id,
                hotel_id: row.hotel_id,
                name: row.room_name,
                capacity: row.capacity,
                created_at: row.room_created_at,
                updated_at: row.room_updated_at,
            },
        }
    }
}

/// Provides booking reads plus the capacity-gated write paths.
///
/// The "count reservations, then write" sequences run inside a single
/// transaction that first takes a row-level lock on the target room
/// (`SELECT ... FOR UPDATE`), so concurrent placements into the same room
/// serialize and the count can never be stale when the write commits. This
/// is the only place in the codebase allowed to insert into or update
/// `bookings`.
pub struct BookingRepo;

impl BookingRepo {
    /// Find a user's current booking together with its room.
    ///
    /// If the user holds several bookings, the oldest one is returned.
    pub async fn find_by_user_with_room(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<BookingWithRoom>, sqlx::Error> {
        let row = sqlx::query_as::<_, BookingRoomRow>(
            "SELECT b.id AS booking_id, r.id AS room_id, r.hotel_id, \
                    r.name AS room_name, r.capacity, \
                    r.created_at AS room_created_at, r.updated_at AS room_updated_at \
             FROM bookings b \
             JOIN rooms r ON r.id = b.room_id \
             WHERE b.user_id = $1 \
             ORDER BY b.id \
             LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
        Ok(row.map(BookingWithRoom::from))
    }

    /// Find a booking by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Count current bookings referencing a room.
    pub async fn count_for_room(pool: &PgPool, room_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM bookings WHERE room_id = $1")
            .bind(room_id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// Atomically place a user into a room if it has unoccupied capacity.
    ///
    /// Locks the room row, counts current reservations, and inserts -- all in
    /// one transaction. The count check uses strict equality against the
    /// declared capacity, so capacity is never exceeded as long as every
    /// booking write goes through this repository.
    pub async fn create_in_room(
        pool: &PgPool,
        user_id: DbId,
        room_id: DbId,
    ) -> Result<RoomPlacement, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let Some(capacity) = Self::lock_room(&mut tx, room_id).await? else {
            return Ok(RoomPlacement::RoomNotFound);
        };

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM bookings WHERE room_id = $1")
            .bind(room_id)
            .fetch_one(&mut *tx)
            .await?;

        if count == i64::from(capacity) {
            return Ok(RoomPlacement::RoomFull);
        }

        let query = format!(
            "INSERT INTO bookings (user_id, room_id) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        let booking = sqlx::query_as::<_, Booking>(&query)
            .bind(user_id)
            .bind(room_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(booking_id = booking.id, room_id, user_id, "booking placed");
        Ok(RoomPlacement::Placed(booking))
    }

    /// Atomically move an existing booking to another room if that room has
    /// unoccupied capacity. Same locked count-then-write discipline as
    /// [`BookingRepo::create_in_room`].
    pub async fn reassign_room(
        pool: &PgPool,
        booking_id: DbId,
        room_id: DbId,
    ) -> Result<RoomReassignment, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let booking: Option<(DbId,)> = sqlx::query_as("SELECT id FROM bookings WHERE id = $1")
            .bind(booking_id)
            .fetch_optional(&mut *tx)
            .await?;
        if booking.is_none() {
            return Ok(RoomReassignment::BookingNotFound);
        }

        let Some(capacity) = Self::lock_room(&mut tx, room_id).await? else {
            return Ok(RoomReassignment::RoomNotFound);
        };

        // The count includes the booking being moved when it already sits in
        // the target room; a booking therefore cannot be "reassigned" to its
        // own full room.
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM bookings WHERE room_id = $1")
            .bind(room_id)
            .fetch_one(&mut *tx)
            .await?;

        if count == i64::from(capacity) {
            return Ok(RoomReassignment::RoomFull);
        }

        let query = format!(
            "UPDATE bookings SET room_id = $2, updated_at = NOW() \
             WHERE id = $1 RETURNING {COLUMNS}"
        );
        let booking = sqlx::query_as::<_, Booking>(&query)
            .bind(booking_id)
            .bind(room_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(booking_id, room_id, "booking reassigned");
        Ok(RoomReassignment::Reassigned(booking))
    }

    /// Take a row-level lock on a room and return its capacity, or `None` if
    /// the room does not exist. Serializes concurrent capacity checks for
    /// the same room for the remainder of the transaction.
    async fn lock_room(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        room_id: DbId,
    ) -> Result<Option<i32>, sqlx::Error> {
        let row: Option<(i32,)> =
            sqlx::query_as("SELECT capacity FROM rooms WHERE id = $1 FOR UPDATE")
                .bind(room_id)
                .fetch_optional(&mut **tx)
                .await?;
        Ok(row.map(|(capacity,)| capacity))
    }
}
