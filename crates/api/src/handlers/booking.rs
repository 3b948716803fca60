//! Handlers for the `/booking` resource (show, create, reassign room).
//!
//! The booking workflow sequences the entitlement rule and the capacity
//! allocator. Error kinds differ per operation on purpose (a missing booking
//! is `NotFound` on show but `Forbidden` on reassignment); those choices
//! come from [`BookingOp`], never from ad hoc branching here.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use eventstay_core::entitlement::check_hotel_entitlement;
use eventstay_core::error::CoreError;
use eventstay_core::policy::BookingOp;
use eventstay_core::types::DbId;
use eventstay_db::models::booking::{BookingWithRoom, RoomPlacement, RoomReassignment};
use eventstay_db::repositories::{BookingRepo, TicketRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /booking` and `PUT /booking/{booking_id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct RoomSelection {
    /// Target room id; must be a positive integer.
    #[validate(range(min = 1))]
    pub room_id: DbId,
}

/// Response body for the mutating booking operations.
#[derive(Debug, Serialize)]
pub struct BookingIdResponse {
    pub booking_id: DbId,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/booking
///
/// Return the authenticated user's current booking together with its room.
/// No authorization beyond identity: a user may always view their own
/// booking.
pub async fn show(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<BookingWithRoom>> {
    let booking = BookingRepo::find_by_user_with_room(&state.pool, user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(BookingOp::ShowBooking.missing_booking(user.user_id)))?;

    Ok(Json(booking))
}

/// POST /api/v1/booking
///
/// Create a booking for the authenticated user in the requested room.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<RoomSelection>,
) -> AppResult<(StatusCode, Json<BookingIdResponse>)> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let op = BookingOp::CreateBooking;

    // 1. Entitlement: the user's ticket must be paid, hotel-inclusive, and
    //    not remote. Re-evaluated on every request; payment status can
    //    change between calls.
    let ticket = TicketRepo::find_with_type_by_user(&state.pool, user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(op.missing_ticket(user.user_id)))?;

    check_hotel_entitlement(&ticket.facts())
        .map_err(|denial| AppError::Core(op.entitlement_denied(denial)))?;

    // 2. Capacity-gated placement, atomic at the repository layer.
    let booking = match BookingRepo::create_in_room(&state.pool, user.user_id, input.room_id).await?
    {
        RoomPlacement::Placed(booking) => booking,
        RoomPlacement::RoomNotFound => {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "Room",
                id: input.room_id,
            }));
        }
        RoomPlacement::RoomFull => return Err(AppError::Core(op.room_full())),
    };

    Ok((
        StatusCode::CREATED,
        Json(BookingIdResponse {
            booking_id: booking.id,
        }),
    ))
}

/// PUT /api/v1/booking/{booking_id}
///
/// Move an existing booking to another room. The booking is addressed by id
/// alone; a missing booking is an authorization failure on this path, and no
/// ownership check is performed (both preserved API behaviors, recorded in
/// DESIGN.md).
pub async fn update_room(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(booking_id): Path<DbId>,
    Json(input): Json<RoomSelection>,
) -> AppResult<Json<BookingIdResponse>> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let op = BookingOp::ReassignBooking;

    let booking = match BookingRepo::reassign_room(&state.pool, booking_id, input.room_id).await? {
        RoomReassignment::Reassigned(booking) => booking,
        RoomReassignment::BookingNotFound => {
            return Err(AppError::Core(op.missing_booking(booking_id)));
        }
        RoomReassignment::RoomNotFound => {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "Room",
                id: input.room_id,
            }));
        }
        RoomReassignment::RoomFull => return Err(AppError::Core(op.room_full())),
    };

    Ok(Json(BookingIdResponse {
        booking_id: booking.id,
    }))
}
