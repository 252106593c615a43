//! Enrollment repository port (write side).
//!
//! Defines the contract for persisting and retrieving Enrollment
//! aggregates.
//!
//! # Design
//!
//! - **Optimistic locking**: `update` matches on the previous persistence
//!   version; a lost update on the status column would allow a double
//!   seat debit, so conflicting writers must fail, not overwrite.

use async_trait::async_trait;

use crate::domain::enrollment::Enrollment;
use crate::domain::foundation::{DomainError, EnrollmentId};

/// Repository port for Enrollment aggregate persistence.
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Save a new enrollment.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, enrollment: &Enrollment) -> Result<(), DomainError>;

    /// Update an existing enrollment, guarded by its persistence version.
    ///
    /// The aggregate's version was already bumped by `apply_transition`;
    /// the store matches on `version - 1` and fails if another writer got
    /// there first.
    ///
    /// # Errors
    ///
    /// - `EnrollmentNotFound` if the enrollment doesn't exist
    /// - `ConcurrencyConflict` if the stored version no longer matches
    /// - `DatabaseError` on persistence failure
    async fn update(&self, enrollment: &Enrollment) -> Result<(), DomainError>;

    /// Find an enrollment by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &EnrollmentId) -> Result<Option<Enrollment>, DomainError>;
}
