//! PostgreSQL implementation of EnrollmentReader.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::enrollment::{Enrollment, EnrollmentStatus};
use crate::domain::foundation::{CitizenId, DomainError, ErrorCode, Protocol};
use crate::ports::EnrollmentReader;

use super::enrollment_repository::row_to_enrollment;

const ENROLLMENT_COLUMNS: &str = "id, protocol, citizen_id, school_id, student_name, birth_date, \
     education_level, grade, status, seat_debited, notes, created_at, updated_at, version";

/// PostgreSQL implementation of EnrollmentReader.
#[derive(Clone)]
pub struct PostgresEnrollmentReader {
    pool: PgPool,
}

impl PostgresEnrollmentReader {
    /// Creates a new PostgresEnrollmentReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EnrollmentReader for PostgresEnrollmentReader {
    async fn find_by_protocol(
        &self,
        protocol: &Protocol,
    ) -> Result<Option<Enrollment>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM enrollments WHERE protocol = $1",
            ENROLLMENT_COLUMNS
        ))
        .bind(protocol.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch enrollment by protocol: {}", e),
            )
        })?;

        row.map(row_to_enrollment).transpose()
    }

    async fn list_by_citizen(
        &self,
        citizen_id: &CitizenId,
    ) -> Result<Vec<Enrollment>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM enrollments WHERE citizen_id = $1 ORDER BY created_at DESC",
            ENROLLMENT_COLUMNS
        ))
        .bind(citizen_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list enrollments by citizen: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_enrollment).collect()
    }

    async fn list_by_status(
        &self,
        status: EnrollmentStatus,
    ) -> Result<Vec<Enrollment>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM enrollments WHERE status = $1 ORDER BY created_at",
            ENROLLMENT_COLUMNS
        ))
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list enrollments by status: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_enrollment).collect()
    }
}
