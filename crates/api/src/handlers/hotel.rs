//! Handlers for the `/hotels` resource.
//!
//! Hotel listing is gated by the same entitlement rule as booking creation,
//! but denials surface as `PaymentRequired` (402) on these read-only paths;
//! the mapping comes from [`BookingOp`].

use axum::extract::{Path, State};
use axum::Json;

use eventstay_core::entitlement::check_hotel_entitlement;
use eventstay_core::error::CoreError;
use eventstay_core::policy::BookingOp;
use eventstay_core::types::DbId;
use eventstay_db::models::hotel::{Hotel, HotelWithRooms};
use eventstay_db::models::ticket::TicketWithType;
use eventstay_db::repositories::{HotelRepo, TicketRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/hotels
///
/// List all partner hotels. Requires an entitled ticket; an empty hotel
/// catalog reports as `NotFound` rather than an empty list.
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<Hotel>>> {
    let op = BookingOp::ListHotels;

    let ticket = find_ticket(&state, user.user_id, op).await?;
    check_hotel_entitlement(&ticket.facts())
        .map_err(|denial| AppError::Core(op.entitlement_denied(denial)))?;

    let hotels = HotelRepo::list(&state.pool).await?;
    if hotels.is_empty() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Hotel",
            id: 0,
        }));
    }

    Ok(Json(hotels))
}

/// GET /api/v1/hotels/{hotel_id}
///
/// Return one hotel with its rooms. The hotel is looked up before the
/// ticket, so an unknown hotel reports `NotFound` even for unentitled users.
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(hotel_id): Path<DbId>,
) -> AppResult<Json<HotelWithRooms>> {
    let op = BookingOp::ViewHotel;

    let hotel = HotelRepo::find_by_id_with_rooms(&state.pool, hotel_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Hotel",
            id: hotel_id,
        }))?;

    let ticket = find_ticket(&state, user.user_id, op).await?;
    check_hotel_entitlement(&ticket.facts())
        .map_err(|denial| AppError::Core(op.entitlement_denied(denial)))?;

    Ok(Json(hotel))
}

/// Look up the user's ticket, mapping its absence through the operation's
/// error policy.
async fn find_ticket(
    state: &AppState,
    user_id: DbId,
    op: BookingOp,
) -> Result<TicketWithType, AppError> {
    TicketRepo::find_with_type_by_user(&state.pool, user_id)
        .await?
        .ok_or_else(|| AppError::Core(op.missing_ticket(user_id)))
}
