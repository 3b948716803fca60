//! Per-operation error-mapping policy.
//!
//! The API maps the same underlying condition to different error kinds
//! depending on the operation: a missing booking is `NotFound` when viewed
//! but `Forbidden` when reassigned, and an entitlement failure is
//! `Forbidden` on the create path but `PaymentRequired` on the hotel-listing
//! paths. Those distinctions are load-bearing for API compatibility, so they
//! live here as one explicit table instead of being scattered through
//! handler branches.

use crate::entitlement::EntitlementDenial;
use crate::error::CoreError;
use crate::types::DbId;

/// Generic authorization-failure message (kept identical across causes so
/// the response does not reveal whether a room is full, a ticket unpaid, or
/// a booking missing).
const FORBIDDEN_MSG: &str = "You are not authorized to perform this operation";

/// The API operations whose error mapping is policy, not mechanics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingOp {
    /// `GET /booking`
    ShowBooking,
    /// `POST /booking`
    CreateBooking,
    /// `PUT /booking/{booking_id}`
    ReassignBooking,
    /// `GET /hotels`
    ListHotels,
    /// `GET /hotels/{hotel_id}`
    ViewHotel,
}

impl BookingOp {
    /// Error for a user who has no ticket at all.
    ///
    /// The create path treats this as an authorization failure; the
    /// hotel-listing paths treat it as a missing resource.
    pub fn missing_ticket(self, user_id: DbId) -> CoreError {
        match self {
            BookingOp::CreateBooking => CoreError::Forbidden(FORBIDDEN_MSG.into()),
            _ => CoreError::NotFound {
                entity: "Ticket",
                id: user_id,
            },
        }
    }

    /// Error for a ticket that exists but fails the entitlement rule.
    ///
    /// The create path collapses every denial into `Forbidden`; the
    /// hotel-listing paths surface the denial as `PaymentRequired`.
    pub fn entitlement_denied(self, denial: EntitlementDenial) -> CoreError {
        match self {
            BookingOp::CreateBooking => CoreError::Forbidden(FORBIDDEN_MSG.into()),
            _ => CoreError::PaymentRequired(denial.to_string()),
        }
    }

    /// Error for a booking id that references no booking.
    ///
    /// Show reports the missing resource; reassignment treats the absence as
    /// an authorization failure.
    pub fn missing_booking(self, booking_id: DbId) -> CoreError {
        match self {
            BookingOp::ReassignBooking => CoreError::Forbidden(FORBIDDEN_MSG.into()),
            _ => CoreError::NotFound {
                entity: "Booking",
                id: booking_id,
            },
        }
    }

    /// Error for a room whose reservation count already equals its capacity.
    /// Signaled as an authorization failure on every path, never as a
    /// distinct capacity kind.
    pub fn room_full(self) -> CoreError {
        CoreError::Forbidden(FORBIDDEN_MSG.into())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
