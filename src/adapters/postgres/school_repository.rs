//! PostgreSQL implementation of SchoolRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{
    DomainError, EducationLevel, ErrorCode, SchoolId, Timestamp, ValidationError,
};
use crate::domain::school::School;
use crate::ports::SchoolRepository;

/// PostgreSQL implementation of SchoolRepository.
#[derive(Clone)]
pub struct PostgresSchoolRepository {
    pool: PgPool,
}

impl PostgresSchoolRepository {
    /// Creates a new PostgresSchoolRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SchoolRepository for PostgresSchoolRepository {
    async fn save(&self, school: &School) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO schools (
                id, name, education_level, total_seats, occupied_seats,
                active, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(school.id().as_uuid())
        .bind(school.name())
        .bind(school.education_level().as_str())
        .bind(school.total_seats() as i32)
        .bind(school.occupied_seats() as i32)
        .bind(school.is_active())
        .bind(school.created_at().as_datetime())
        .bind(school.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert school: {}", e),
            )
        })?;

        Ok(())
    }

    async fn find_by_id(&self, id: &SchoolId) -> Result<Option<School>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, education_level, total_seats, occupied_seats,
                   active, created_at, updated_at
            FROM schools
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch school: {}", e),
            )
        })?;

        row.map(row_to_school).transpose()
    }

    async fn try_debit_seat(&self, id: &SchoolId) -> Result<School, DomainError> {
        // conditional update: the availability check and the increment are
        // one statement, so concurrent debits serialize inside the database
        let row = sqlx::query(
            r#"
            UPDATE schools
            SET occupied_seats = occupied_seats + 1, updated_at = $2
            WHERE id = $1 AND active AND occupied_seats < total_seats
            RETURNING id, name, education_level, total_seats, occupied_seats,
                      active, created_at, updated_at
            "#,
        )
        .bind(id.as_uuid())
        .bind(Timestamp::now().as_datetime())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to debit seat: {}", e),
            )
        })?;

        match row {
            Some(row) => row_to_school(row),
            None => match self.find_by_id(id).await? {
                Some(school) if school.is_active() => Err(DomainError::new(
                    ErrorCode::SeatsExhausted,
                    format!("School has no available seats: {}", school.name()),
                )
                .with_detail("school_id", id.to_string())),
                _ => Err(DomainError::new(
                    ErrorCode::SchoolNotFound,
                    format!("School not found: {}", id),
                )),
            },
        }
    }

    async fn set_total_seats(
        &self,
        id: &SchoolId,
        total_seats: u32,
    ) -> Result<School, DomainError> {
        let row = sqlx::query(
            r#"
            UPDATE schools
            SET total_seats = $2, updated_at = $3
            WHERE id = $1 AND occupied_seats <= $2
            RETURNING id, name, education_level, total_seats, occupied_seats,
                      active, created_at, updated_at
            "#,
        )
        .bind(id.as_uuid())
        .bind(total_seats as i32)
        .bind(Timestamp::now().as_datetime())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update total seats: {}", e),
            )
        })?;

        match row {
            Some(row) => row_to_school(row),
            None => match self.find_by_id(id).await? {
                Some(school) => Err(ValidationError::out_of_range(
                    "total_seats",
                    i64::from(school.occupied_seats()),
                    i64::from(u32::MAX),
                    i64::from(total_seats),
                )
                .into()),
                None => Err(DomainError::new(
                    ErrorCode::SchoolNotFound,
                    format!("School not found: {}", id),
                )),
            },
        }
    }
}

/// Maps a schools row onto the School aggregate.
pub(super) fn row_to_school(row: PgRow) -> Result<School, DomainError> {
    let db_err = |e: sqlx::Error| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to read school row: {}", e),
        )
    };

    let level_token: String = row.try_get("education_level").map_err(db_err)?;
    let education_level = EducationLevel::parse(&level_token).ok_or_else(|| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Unknown education level in storage: {}", level_token),
        )
    })?;

    Ok(School::reconstitute(
        SchoolId::from_uuid(row.try_get("id").map_err(db_err)?),
        row.try_get("name").map_err(db_err)?,
        education_level,
        row.try_get::<i32, _>("total_seats").map_err(db_err)? as u32,
        row.try_get::<i32, _>("occupied_seats").map_err(db_err)? as u32,
        row.try_get("active").map_err(db_err)?,
        Timestamp::from_datetime(row.try_get("created_at").map_err(db_err)?),
        Timestamp::from_datetime(row.try_get("updated_at").map_err(db_err)?),
    ))
}
