//! Repository for the `enrollments` table.

use sqlx::PgPool;

use eventstay_core::types::DbId;

use crate::models::enrollment::{CreateEnrollment, Enrollment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, name, created_at, updated_at";

/// Provides enrollment lookups and inserts.
pub struct EnrollmentRepo;

impl EnrollmentRepo {
    /// Insert a new enrollment, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEnrollment) -> Result<Enrollment, sqlx::Error> {
        let query = format!(
            "INSERT INTO enrollments (user_id, name) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(input.user_id)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a user's enrollment.
    pub async fn find_by_user(pool: &PgPool, user_id: DbId) -> Result<Option<Enrollment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM enrollments WHERE user_id = $1 LIMIT 1");
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }
}
