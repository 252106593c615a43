//! GetSeatAvailabilityHandler - Query handler for a school's seat ledger.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, SchoolId};
use crate::domain::school::{School, SeatStatus};
use crate::ports::SchoolRepository;

/// Snapshot of a school's seat ledger with its derived values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatAvailability {
    pub school_id: SchoolId,
    pub school_name: String,
    pub total_seats: u32,
    pub occupied_seats: u32,
    pub available_seats: u32,
    pub occupancy_ratio: f64,
    pub status: SeatStatus,
}

impl SeatAvailability {
    /// Builds the snapshot from a school aggregate.
    pub fn from_school(school: &School) -> Self {
        Self {
            school_id: *school.id(),
            school_name: school.name().to_string(),
            total_seats: school.total_seats(),
            occupied_seats: school.occupied_seats(),
            available_seats: school.available_seats(),
            occupancy_ratio: school.occupancy_ratio(),
            status: school.seat_status(),
        }
    }
}

/// Handler for per-school availability queries.
pub struct GetSeatAvailabilityHandler {
    schools: Arc<dyn SchoolRepository>,
}

impl GetSeatAvailabilityHandler {
    pub fn new(schools: Arc<dyn SchoolRepository>) -> Self {
        Self { schools }
    }

    /// Fetch the ledger snapshot for an active school.
    ///
    /// # Errors
    ///
    /// - `SchoolNotFound` if the school is missing or inactive
    pub async fn handle(&self, school_id: &SchoolId) -> Result<SeatAvailability, DomainError> {
        let school = self
            .schools
            .find_by_id(school_id)
            .await?
            .filter(|s| s.is_active())
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::SchoolNotFound,
                    format!("School not found: {}", school_id),
                )
            })?;

        Ok(SeatAvailability::from_school(&school))
    }
}
