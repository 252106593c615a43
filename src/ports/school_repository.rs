//! School repository port (write side).
//!
//! Defines the contract for school persistence, including the one operation
//! that must be race-free: `try_debit_seat`.
//!
//! # Design
//!
//! - **Atomic debit**: check `occupied < total` and increment in one
//!   indivisible step at the storage layer (conditional update or a lock
//!   held across check-and-increment). A read-then-write composition is a
//!   correctness defect, not a style choice.
//! - **No reclamation**: nothing decrements `occupied`; only
//!   administrative total-seat edits change capacity.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, SchoolId};
use crate::domain::school::School;

/// Repository port for School aggregate persistence.
#[async_trait]
pub trait SchoolRepository: Send + Sync {
    /// Save a new school.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, school: &School) -> Result<(), DomainError>;

    /// Find a school by its ID.
    ///
    /// Returns `None` if not found. Inactive schools ARE returned; callers
    /// that only want enrollable schools must check `is_active`.
    async fn find_by_id(&self, id: &SchoolId) -> Result<Option<School>, DomainError>;

    /// Atomically consume one seat from the school's ledger.
    ///
    /// The check `occupied < total` and the increment happen as one
    /// indivisible step relative to all other debits on the same school.
    /// Returns the school as persisted after the debit.
    ///
    /// # Errors
    ///
    /// - `SchoolNotFound` if the school is missing or inactive
    /// - `SeatsExhausted` if no seat was available at the moment of debit
    /// - `DatabaseError` on persistence failure
    async fn try_debit_seat(&self, id: &SchoolId) -> Result<School, DomainError>;

    /// Administrative edit of a school's total seat capacity.
    ///
    /// Returns the school as persisted after the edit.
    ///
    /// # Errors
    ///
    /// - `SchoolNotFound` if the school is missing
    /// - `OutOfRange` if the new total is below the occupied count
    /// - `DatabaseError` on persistence failure
    async fn set_total_seats(&self, id: &SchoolId, total_seats: u32)
        -> Result<School, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn school_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn SchoolRepository) {}
    }
}
