//! Enrollment model and DTOs.
//!
//! An enrollment is a user's event registration; tickets reference the
//! enrollment rather than the user directly.

use eventstay_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// An enrollment row from the `enrollments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Enrollment {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an enrollment.
pub struct CreateEnrollment {
    pub user_id: DbId,
    pub name: String,
}
