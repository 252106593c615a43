//! PostgreSQL implementation of SchoolReader.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, EducationLevel, ErrorCode};
use crate::domain::school::School;
use crate::ports::SchoolReader;

use super::school_repository::row_to_school;

/// PostgreSQL implementation of SchoolReader.
#[derive(Clone)]
pub struct PostgresSchoolReader {
    pool: PgPool,
}

impl PostgresSchoolReader {
    /// Creates a new PostgresSchoolReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SchoolReader for PostgresSchoolReader {
    async fn list_active(&self) -> Result<Vec<School>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, education_level, total_seats, occupied_seats,
                   active, created_at, updated_at
            FROM schools
            WHERE active
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list schools: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_school).collect()
    }

    async fn list_with_available_seats(
        &self,
        level: Option<EducationLevel>,
    ) -> Result<Vec<School>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, education_level, total_seats, occupied_seats,
                   active, created_at, updated_at
            FROM schools
            WHERE active
              AND occupied_seats < total_seats
              AND ($1::text IS NULL OR education_level = $1)
            ORDER BY name
            "#,
        )
        .bind(level.map(|l| l.as_str()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list schools with seats: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_school).collect()
    }
}
