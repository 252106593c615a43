//! Citizen directory port.
//!
//! Citizen profile management is an external collaborator; the enrollment
//! core only needs existence checks and a display name for messages.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CitizenId, DomainError};

/// Minimal citizen view the enrollment core reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitizenSummary {
    pub id: CitizenId,
    pub name: String,
}

/// Port for looking up citizens in the external citizen registry.
#[async_trait]
pub trait CitizenDirectory: Send + Sync {
    /// Find a citizen by ID.
    ///
    /// Returns `None` if no such citizen exists.
    ///
    /// # Errors
    ///
    /// - `InternalError` / `DatabaseError` on collaborator failure
    async fn find_by_id(&self, id: &CitizenId) -> Result<Option<CitizenSummary>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn citizen_directory_is_object_safe() {
        fn _accepts_dyn(_directory: &dyn CitizenDirectory) {}
    }
}
