//! Enrollment aggregate entity.
//!
//! An enrollment is a citizen's request for a school seat. It references
//! its citizen and school by ID (non-owning) and carries the lifecycle
//! status plus the one-way `seat_debited` latch.
//!
//! # Invariants
//!
//! - `protocol` is unique and immutable once assigned
//! - `seat_debited` is set at most once and never cleared; downgrading
//!   from Approved does not return the seat
//! - status only changes through `plan_transition` / `apply_transition`

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    CitizenId, DomainError, EducationLevel, EnrollmentId, ErrorCode, Protocol, SchoolId,
    StateMachine, Timestamp, ValidationError,
};

use super::{EnrollmentStatus, SeatEffect, StatusTransition};

/// Maximum length for the student name.
pub const MAX_STUDENT_NAME_LENGTH: usize = 200;

/// Enrollment aggregate - a seat request moving through its lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    /// Unique identifier for this enrollment.
    id: EnrollmentId,

    /// Human-readable tracking identifier, immutable once assigned.
    protocol: Protocol,

    /// Citizen who filed the request (not owned).
    citizen_id: CitizenId,

    /// School the seat is requested at (not owned).
    school_id: SchoolId,

    /// Name of the student being enrolled.
    student_name: String,

    /// Student birth date, when informed.
    birth_date: Option<NaiveDate>,

    /// Education level requested.
    education_level: EducationLevel,

    /// Track/grade label (e.g. "3º ano"), when informed.
    grade: Option<String>,

    /// Current lifecycle status.
    status: EnrollmentStatus,

    /// One-way latch: set when a seat was consumed for this enrollment.
    seat_debited: bool,

    /// Free-text notes from the citizen.
    notes: Option<String>,

    /// When the request was filed.
    created_at: Timestamp,

    /// When the record was last updated.
    updated_at: Timestamp,

    /// Persistence version for optimistic locking.
    version: u32,
}

impl Enrollment {
    /// Creates a new pending enrollment.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the student name is blank
    /// - `OutOfRange` if the student name exceeds the maximum length
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: EnrollmentId,
        protocol: Protocol,
        citizen_id: CitizenId,
        school_id: SchoolId,
        student_name: String,
        birth_date: Option<NaiveDate>,
        education_level: EducationLevel,
        grade: Option<String>,
        notes: Option<String>,
    ) -> Result<Self, DomainError> {
        Self::validate_student_name(&student_name)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            protocol,
            citizen_id,
            school_id,
            student_name,
            birth_date,
            education_level,
            grade,
            status: EnrollmentStatus::Pending,
            seat_debited: false,
            notes,
            created_at: now,
            updated_at: now,
            version: 1,
        })
    }

    /// Reconstitutes an enrollment from persistence (no validation, no events).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: EnrollmentId,
        protocol: Protocol,
        citizen_id: CitizenId,
        school_id: SchoolId,
        student_name: String,
        birth_date: Option<NaiveDate>,
        education_level: EducationLevel,
        grade: Option<String>,
        status: EnrollmentStatus,
        seat_debited: bool,
        notes: Option<String>,
        created_at: Timestamp,
        updated_at: Timestamp,
        version: u32,
    ) -> Self {
        Self {
            id,
            protocol,
            citizen_id,
            school_id,
            student_name,
            birth_date,
            education_level,
            grade,
            status,
            seat_debited,
            notes,
            created_at,
            updated_at,
            version,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the enrollment ID.
    pub fn id(&self) -> &EnrollmentId {
        &self.id
    }

    /// Returns the tracking protocol.
    pub fn protocol(&self) -> &Protocol {
        &self.protocol
    }

    /// Returns the citizen who filed the request.
    pub fn citizen_id(&self) -> &CitizenId {
        &self.citizen_id
    }

    /// Returns the school the seat is requested at.
    pub fn school_id(&self) -> &SchoolId {
        &self.school_id
    }

    /// Returns the student name.
    pub fn student_name(&self) -> &str {
        &self.student_name
    }

    /// Returns the student birth date, when informed.
    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }

    /// Returns the requested education level.
    pub fn education_level(&self) -> EducationLevel {
        self.education_level
    }

    /// Returns the grade label, when informed.
    pub fn grade(&self) -> Option<&str> {
        self.grade.as_deref()
    }

    /// Returns the current status.
    pub fn status(&self) -> EnrollmentStatus {
        self.status
    }

    /// Returns whether a seat was already consumed for this enrollment.
    pub fn seat_debited(&self) -> bool {
        self.seat_debited
    }

    /// Returns the citizen's notes, when present.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Returns when the request was filed.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the record was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Returns the persistence version.
    pub fn version(&self) -> u32 {
        self.version
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Plans a transition to `requested`, validating reachability and
    /// computing the ledger effect.
    ///
    /// `DebitSeat` is produced exactly once per enrollment: the first time
    /// `Approved` is requested while the `seat_debited` latch is unset.
    /// Re-requesting `Approved` afterwards is accepted as an idempotent
    /// no-op with no ledger effect.
    ///
    /// # Errors
    ///
    /// - `InvalidStatusTransition` if `requested` is not reachable
    pub fn plan_transition(
        &self,
        requested: EnrollmentStatus,
    ) -> Result<StatusTransition, DomainError> {
        if !self.status.can_transition_to(&requested) {
            return Err(DomainError::new(
                ErrorCode::InvalidStatusTransition,
                format!("Cannot transition from {} to {}", self.status, requested),
            )
            .with_detail("enrollment_id", self.id.to_string())
            .with_detail("from", self.status.as_str())
            .with_detail("to", requested.as_str()));
        }

        let seat_effect = if requested == EnrollmentStatus::Approved && !self.seat_debited {
            SeatEffect::DebitSeat
        } else {
            SeatEffect::None
        };

        Ok(StatusTransition {
            from: self.status,
            to: requested,
            seat_effect,
        })
    }

    /// Applies a previously planned transition.
    ///
    /// The caller must have performed the seat debit when the plan demanded
    /// one; applying sets the latch, the new status, and bumps the version.
    pub fn apply_transition(&mut self, transition: StatusTransition) {
        self.status = transition.to;
        if transition.seat_effect == SeatEffect::DebitSeat {
            self.seat_debited = true;
        }
        self.updated_at = Timestamp::now();
        self.version += 1;
    }

    fn validate_student_name(name: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("student_name").into());
        }
        if name.len() > MAX_STUDENT_NAME_LENGTH {
            return Err(ValidationError::out_of_range(
                "student_name",
                1,
                MAX_STUDENT_NAME_LENGTH as i64,
                name.len() as i64,
            )
            .into());
        }
        Ok(())
    }
}
