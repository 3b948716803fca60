//! Booking model and transactional outcome types.

use eventstay_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::room::Room;

/// A booking row from the `bookings` table: the association between one user
/// and one room, mutable only via room reassignment.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: DbId,
    pub user_id: DbId,
    pub room_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A booking joined with its room, as returned by the show endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct BookingWithRoom {
    pub id: DbId,
    pub room: Room,
}

/// Outcome of the transactional "count reservations, then insert" placement
/// in [`crate::repositories::BookingRepo::create_in_room`].
///
/// Distinguishing these at the repository boundary lets the handler layer
/// apply its per-operation error policy without a second round trip.
#[derive(Debug)]
pub enum RoomPlacement {
    /// The booking was created inside the transaction.
    Placed(Booking),
    /// The target room does not exist.
    RoomNotFound,
    /// The room's reservation count already equals its capacity.
    RoomFull,
}

/// Outcome of the transactional room reassignment in
/// [`crate::repositories::BookingRepo::reassign_room`].
#[derive(Debug)]
pub enum RoomReassignment {
    /// The booking now references the target room.
    Reassigned(Booking),
    /// No booking exists with the given id.
    BookingNotFound,
    /// The target room does not exist.
    RoomNotFound,
    /// The target room's reservation count already equals its capacity.
    RoomFull,
}
