//! School aggregate entity.
//!
//! A school owns the seat ledger for its enrollments: a total seat count
//! and an occupied seat count. Availability and occupancy classification
//! are derived, never stored.
//!
//! # Invariants
//!
//! - `occupied_seats <= total_seats` at all times
//! - `occupied_seats` only moves through `debit_seat`; it is never
//!   decremented (capacity reclamation on cancellation is not implemented)

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    DomainError, EducationLevel, ErrorCode, SchoolId, Timestamp, ValidationError,
};

use super::SeatStatus;

/// Maximum length for a school name.
pub const MAX_SCHOOL_NAME_LENGTH: usize = 200;

/// School aggregate - seat ledger plus identifying attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct School {
    /// Unique identifier for this school.
    id: SchoolId,

    /// School name.
    name: String,

    /// Education level this school offers.
    education_level: EducationLevel,

    /// Total seat capacity.
    total_seats: u32,

    /// Seats consumed by approved enrollments.
    occupied_seats: u32,

    /// Inactive schools are invisible to the enrollment workflow.
    active: bool,

    /// When the school was registered.
    created_at: Timestamp,

    /// When the school was last updated.
    updated_at: Timestamp,
}

impl School {
    /// Creates a new active school with an empty ledger.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank
    /// - `OutOfRange` if the name exceeds the maximum length
    pub fn new(
        id: SchoolId,
        name: String,
        education_level: EducationLevel,
        total_seats: u32,
    ) -> Result<Self, DomainError> {
        Self::validate_name(&name)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            name,
            education_level,
            total_seats,
            occupied_seats: 0,
            active: true,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitutes a school from persistence (no validation, no events).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: SchoolId,
        name: String,
        education_level: EducationLevel,
        total_seats: u32,
        occupied_seats: u32,
        active: bool,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            education_level,
            total_seats,
            occupied_seats,
            active,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the school ID.
    pub fn id(&self) -> &SchoolId {
        &self.id
    }

    /// Returns the school name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the education level offered.
    pub fn education_level(&self) -> EducationLevel {
        self.education_level
    }

    /// Returns the total seat capacity.
    pub fn total_seats(&self) -> u32 {
        self.total_seats
    }

    /// Returns the occupied seat count.
    pub fn occupied_seats(&self) -> u32 {
        self.occupied_seats
    }

    /// Returns whether the school is active.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns when the school was registered.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the school was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Seat ledger
    // ─────────────────────────────────────────────────────────────────────────

    /// Seats still available: `total - occupied`.
    pub fn available_seats(&self) -> u32 {
        self.total_seats.saturating_sub(self.occupied_seats)
    }

    /// Occupancy ratio in `[0, 1]`; 0 when the school has no seats at all.
    pub fn occupancy_ratio(&self) -> f64 {
        if self.total_seats == 0 {
            return 0.0;
        }
        f64::from(self.occupied_seats) / f64::from(self.total_seats)
    }

    /// Current occupancy classification.
    pub fn seat_status(&self) -> SeatStatus {
        SeatStatus::classify(self.total_seats, self.occupied_seats)
    }

    /// Consumes one seat: checks `occupied < total` and increments in one step.
    ///
    /// Callers holding exclusive access to the aggregate (a storage lock or
    /// row-level conditional update) make this atomic with respect to other
    /// debits on the same school.
    ///
    /// # Errors
    ///
    /// - `SeatsExhausted` if no seat is available
    pub fn debit_seat(&mut self) -> Result<(), DomainError> {
        if self.occupied_seats >= self.total_seats {
            return Err(DomainError::new(
                ErrorCode::SeatsExhausted,
                format!("School has no available seats: {}", self.name),
            )
            .with_detail("school_id", self.id.to_string()));
        }
        self.occupied_seats += 1;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Administrative edit of the total seat capacity.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if the new total is below the occupied count
    pub fn set_total_seats(&mut self, total_seats: u32) -> Result<(), DomainError> {
        if total_seats < self.occupied_seats {
            return Err(ValidationError::out_of_range(
                "total_seats",
                i64::from(self.occupied_seats),
                i64::from(u32::MAX),
                i64::from(total_seats),
            )
            .into());
        }
        self.total_seats = total_seats;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Deactivates the school, hiding it from the enrollment workflow.
    pub fn deactivate(&mut self) {
        self.active = false;
        self.updated_at = Timestamp::now();
    }

    fn validate_name(name: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name").into());
        }
        if name.len() > MAX_SCHOOL_NAME_LENGTH {
            return Err(ValidationError::out_of_range(
                "name",
                1,
                MAX_SCHOOL_NAME_LENGTH as i64,
                name.len() as i64,
            )
            .into());
        }
        Ok(())
    }
}
