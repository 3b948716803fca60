//! Hotel entitlement rule.
//!
//! A user's right to perform hotel bookings derives entirely from their
//! ticket: it must be paid, its type must include hotel accommodation, and
//! the type must not be remote. The rule is pure; looking the ticket up is
//! the persistence layer's job, and callers must re-evaluate on every
//! request since payment status can change between calls.

/// The ticket facts the entitlement decision consumes.
///
/// Built from a ticket row joined with its ticket type
/// (`TicketWithType::facts()` in `eventstay-db`).
#[derive(Debug, Clone, Copy)]
pub struct TicketFacts {
    /// Ticket status is PAID (the only status besides RESERVED).
    pub paid: bool,
    /// Ticket type includes hotel accommodation.
    pub includes_hotel: bool,
    /// Ticket type is for remote attendance.
    pub is_remote: bool,
}

/// The specific condition an unentitled ticket failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EntitlementDenial {
    #[error("ticket is still pending payment")]
    NotPaid,
    #[error("ticket does not include hotel accommodation")]
    NoHotel,
    #[error("remote tickets do not include hotel accommodation")]
    RemoteTicket,
}

/// Decide whether a ticket entitles its holder to hotel booking.
///
/// Checks run in a fixed order (payment, hotel inclusion, remoteness) so the
/// reported denial is deterministic when several conditions fail at once.
pub fn check_hotel_entitlement(facts: &TicketFacts) -> Result<(), EntitlementDenial> {
    if !facts.paid {
        return Err(EntitlementDenial::NotPaid);
    }
    if !facts.includes_hotel {
        return Err(EntitlementDenial::NoHotel);
    }
    if facts.is_remote {
        return Err(EntitlementDenial::RemoteTicket);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn entitled() -> TicketFacts {
        TicketFacts {
            paid: true,
            includes_hotel: true,
            is_remote: false,
        }
    }

    #[test]
    fn paid_hotel_ticket_is_entitled() {
        assert!(check_hotel_entitlement(&entitled()).is_ok());
    }

    #[test]
    fn unpaid_ticket_is_denied() {
        let facts = TicketFacts {
            paid: false,
            ..entitled()
        };
        assert_eq!(
            check_hotel_entitlement(&facts),
            Err(EntitlementDenial::NotPaid)
        );
    }

    #[test]
    fn ticket_without_hotel_is_denied() {
        let facts = TicketFacts {
            includes_hotel: false,
            ..entitled()
        };
        assert_eq!(
            check_hotel_entitlement(&facts),
            Err(EntitlementDenial::NoHotel)
        );
    }

    #[test]
    fn remote_ticket_is_denied() {
        let facts = TicketFacts {
            is_remote: true,
            ..entitled()
        };
        assert_eq!(
            check_hotel_entitlement(&facts),
            Err(EntitlementDenial::RemoteTicket)
        );
    }

    #[test]
    fn payment_is_reported_before_other_failures() {
        // An unpaid remote ticket without hotel fails every condition; the
        // reported denial must still be the payment one.
        let facts = TicketFacts {
            paid: false,
            includes_hotel: false,
            is_remote: true,
        };
        assert_eq!(
            check_hotel_entitlement(&facts),
            Err(EntitlementDenial::NotPaid)
        );
    }
}
