//! PostgreSQL implementation of EnrollmentRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::enrollment::{Enrollment, EnrollmentStatus};
use crate::domain::foundation::{
    CitizenId, DomainError, EducationLevel, EnrollmentId, ErrorCode, Protocol, SchoolId, Timestamp,
};
use crate::ports::EnrollmentRepository;

/// PostgreSQL implementation of EnrollmentRepository.
#[derive(Clone)]
pub struct PostgresEnrollmentRepository {
    pool: PgPool,
}

impl PostgresEnrollmentRepository {
    /// Creates a new PostgresEnrollmentRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EnrollmentRepository for PostgresEnrollmentRepository {
    async fn save(&self, enrollment: &Enrollment) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO enrollments (
                id, protocol, citizen_id, school_id, student_name, birth_date,
                education_level, grade, status, seat_debited, notes,
                created_at, updated_at, version
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(enrollment.id().as_uuid())
        .bind(enrollment.protocol().as_str())
        .bind(enrollment.citizen_id().as_uuid())
        .bind(enrollment.school_id().as_uuid())
        .bind(enrollment.student_name())
        .bind(enrollment.birth_date())
        .bind(enrollment.education_level().as_str())
        .bind(enrollment.grade())
        .bind(enrollment.status().as_str())
        .bind(enrollment.seat_debited())
        .bind(enrollment.notes())
        .bind(enrollment.created_at().as_datetime())
        .bind(enrollment.updated_at().as_datetime())
        .bind(enrollment.version() as i32)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert enrollment: {}", e),
            )
        })?;

        Ok(())
    }

    async fn update(&self, enrollment: &Enrollment) -> Result<(), DomainError> {
        // optimistic lock: match the version the aggregate was loaded at
        let result = sqlx::query(
            r#"
            UPDATE enrollments SET
                status = $2,
                seat_debited = $3,
                grade = $4,
                notes = $5,
                updated_at = $6,
                version = $7
            WHERE id = $1 AND version = $8
            "#,
        )
        .bind(enrollment.id().as_uuid())
        .bind(enrollment.status().as_str())
        .bind(enrollment.seat_debited())
        .bind(enrollment.grade())
        .bind(enrollment.notes())
        .bind(enrollment.updated_at().as_datetime())
        .bind(enrollment.version() as i32)
        .bind(enrollment.version() as i32 - 1)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update enrollment: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            return match self.find_by_id(enrollment.id()).await? {
                Some(_) => Err(DomainError::new(
                    ErrorCode::ConcurrencyConflict,
                    format!("Enrollment was modified concurrently: {}", enrollment.id()),
                )),
                None => Err(DomainError::new(
                    ErrorCode::EnrollmentNotFound,
                    format!("Enrollment not found: {}", enrollment.id()),
                )),
            };
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &EnrollmentId) -> Result<Option<Enrollment>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, protocol, citizen_id, school_id, student_name, birth_date,
                   education_level, grade, status, seat_debited, notes,
                   created_at, updated_at, version
            FROM enrollments
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch enrollment: {}", e),
            )
        })?;

        row.map(row_to_enrollment).transpose()
    }
}

/// Maps an enrollments row onto the Enrollment aggregate.
pub(super) fn row_to_enrollment(row: PgRow) -> Result<Enrollment, DomainError> {
    let db_err = |e: sqlx::Error| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to read enrollment row: {}", e),
        )
    };
    let bad_token = |column: &str, token: &str| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Unknown {} in storage: {}", column, token),
        )
    };

    let protocol: String = row.try_get("protocol").map_err(db_err)?;
    let protocol = Protocol::new(protocol).map_err(DomainError::from)?;

    let level_token: String = row.try_get("education_level").map_err(db_err)?;
    let education_level = EducationLevel::parse(&level_token)
        .ok_or_else(|| bad_token("education level", &level_token))?;

    let status_token: String = row.try_get("status").map_err(db_err)?;
    let status =
        EnrollmentStatus::parse(&status_token).ok_or_else(|| bad_token("status", &status_token))?;

    Ok(Enrollment::reconstitute(
        EnrollmentId::from_uuid(row.try_get("id").map_err(db_err)?),
        protocol,
        CitizenId::from_uuid(row.try_get("citizen_id").map_err(db_err)?),
        SchoolId::from_uuid(row.try_get("school_id").map_err(db_err)?),
        row.try_get("student_name").map_err(db_err)?,
        row.try_get("birth_date").map_err(db_err)?,
        education_level,
        row.try_get("grade").map_err(db_err)?,
        status,
        row.try_get("seat_debited").map_err(db_err)?,
        row.try_get("notes").map_err(db_err)?,
        Timestamp::from_datetime(row.try_get("created_at").map_err(db_err)?),
        Timestamp::from_datetime(row.try_get("updated_at").map_err(db_err)?),
        row.try_get::<i32, _>("version").map_err(db_err)? as u32,
    ))
}
