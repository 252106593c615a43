//! School reader port (query side).
//!
//! Read-only school listings for the availability queries. Only active
//! schools are visible through this port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EducationLevel};
use crate::domain::school::School;

/// Reader port for school listings.
#[async_trait]
pub trait SchoolReader: Send + Sync {
    /// List all active schools.
    async fn list_active(&self) -> Result<Vec<School>, DomainError>;

    /// List active schools that still have available seats, optionally
    /// filtered by education level.
    async fn list_with_available_seats(
        &self,
        level: Option<EducationLevel>,
    ) -> Result<Vec<School>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn school_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn SchoolReader) {}
    }
}
