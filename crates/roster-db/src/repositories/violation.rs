//! PostgreSQL implementation of ViolationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use roster_core::entities::{NewViolation, Violation};
use roster_core::traits::{RepoResult, ViolationRepository};

use crate::models::ViolationModel;

use super::error::{collect_rows, map_db_error};

const VIOLATION_COLUMNS: &str = "id, member_id, violation_type, violation_name, \
     custom_violation_name, description, severity, violation_date, created_at";

/// PostgreSQL implementation of ViolationRepository
#[derive(Clone)]
pub struct PgViolationRepository {
    pool: PgPool,
}

impl PgViolationRepository {
    /// Create a new PgViolationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ViolationRepository for PgViolationRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Violation>> {
        let rows = sqlx::query_as::<_, ViolationModel>(&format!(
            "SELECT {VIOLATION_COLUMNS} FROM violations ORDER BY violation_date DESC, created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        collect_rows(rows)
    }

    #[instrument(skip(self))]
    async fn create(&self, violation: &NewViolation) -> RepoResult<Violation> {
        let row = sqlx::query_as::<_, ViolationModel>(&format!(
            r"
            INSERT INTO violations
                (member_id, violation_type, violation_name, custom_violation_name,
                 description, severity, violation_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {VIOLATION_COLUMNS}
            "
        ))
        .bind(violation.member_id)
        .bind(violation.violation_type.as_str())
        .bind(&violation.violation_name)
        .bind(violation.custom_violation_name.as_deref())
        .bind(violation.description.as_deref())
        .bind(violation.severity.as_str())
        .bind(violation.violation_date)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Violation::try_from(row)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM violations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgViolationRepository>();
    }
}
