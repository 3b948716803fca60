//! Ticket and ticket-type models.

use eventstay_core::entitlement::TicketFacts;
use eventstay_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Lifecycle status of a ticket. Transitions RESERVED -> PAID exactly once;
/// no reverse transition is modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, sqlx::Type)]
#[sqlx(type_name = "ticket_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketStatus {
    Reserved,
    Paid,
}

/// A ticket type row from the `ticket_types` catalog table. Immutable from
/// this crate's perspective.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TicketType {
    pub id: DbId,
    pub name: String,
    pub price_cents: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A ticket row joined with the flags of its ticket type, as consumed by the
/// entitlement rule. Read-only input for authorization decisions.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TicketWithType {
    pub id: DbId,
    pub enrollment_id: DbId,
    pub ticket_type_id: DbId,
    pub status: TicketStatus,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

impl TicketWithType {
    /// Project the row down to the facts the entitlement rule consumes.
    pub fn facts(&self) -> TicketFacts {
        TicketFacts {
            paid: self.status == TicketStatus::Paid,
            includes_hotel: self.includes_hotel,
            is_remote: self.is_remote,
        }
    }
}

/// DTO for creating a ticket type (used by catalog seeding and tests).
pub struct CreateTicketType {
    pub name: String,
    pub price_cents: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

/// DTO for creating a ticket against an enrollment.
pub struct CreateTicket {
    pub enrollment_id: DbId,
    pub ticket_type_id: DbId,
    pub status: TicketStatus,
}
