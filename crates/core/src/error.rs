use crate::types::DbId;

/// Domain error taxonomy shared by all crates.
///
/// These are error *kinds*, not status codes; the HTTP mapping lives in
/// `eventstay-api::error`. Kind stability per operation is part of the API
/// contract, so handlers must not remap kinds ad hoc -- the per-operation
/// choices are centralized in [`crate::policy`].
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Entitlement failure surfaced by read-only hotel-listing operations.
    /// The booking workflow itself collapses entitlement failures into
    /// [`CoreError::Forbidden`]; see [`crate::policy`].
    #[error("Payment required: {0}")]
    PaymentRequired(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
