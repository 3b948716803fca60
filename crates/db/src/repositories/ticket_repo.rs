//! Repository for the `tickets` and `ticket_types` tables.

use sqlx::PgPool;

use eventstay_core::types::DbId;

use crate::models::ticket::{
    CreateTicket, CreateTicketType, TicketType, TicketWithType,
};

/// Provides ticket lookups for entitlement checks plus catalog seeding.
pub struct TicketRepo;

impl TicketRepo {
    /// Find a user's ticket joined with its ticket-type flags, walking the
    /// user -> enrollment -> ticket relation. Returns the oldest ticket if
    /// the user somehow holds several.
    pub async fn find_with_type_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<TicketWithType>, sqlx::Error> {
        sqlx::query_as::<_, TicketWithType>(
            "SELECT t.id, t.enrollment_id, t.ticket_type_id, t.status, \
                    tt.is_remote, tt.includes_hotel \
             FROM tickets t \
             JOIN ticket_types tt ON tt.id = t.ticket_type_id \
             JOIN enrollments e ON e.id = t.enrollment_id \
             WHERE e.user_id = $1 \
             ORDER BY t.id \
             LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }

    /// Insert a ticket type, returning the created row.
    pub async fn create_type(
        pool: &PgPool,
        input: &CreateTicketType,
    ) -> Result<TicketType, sqlx::Error> {
        sqlx::query_as::<_, TicketType>(
            "INSERT INTO ticket_types (name, price_cents, is_remote, includes_hotel) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, name, price_cents, is_remote, includes_hotel, \
                       created_at, updated_at",
        )
        .bind(&input.name)
        .bind(input.price_cents)
        .bind(input.is_remote)
        .bind(input.includes_hotel)
        .fetch_one(pool)
        .await
    }

    /// Insert a ticket, returning its id.
    pub async fn create(pool: &PgPool, input: &CreateTicket) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO tickets (enrollment_id, ticket_type_id, status) \
             VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(input.enrollment_id)
        .bind(input.ticket_type_id)
        .bind(input.status)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }
}
