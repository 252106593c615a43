//! ListSchoolsHandler - Query handler for school listings.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, EducationLevel};
use crate::ports::SchoolReader;

use super::SeatAvailability;

/// Handler for school listings with their seat ledgers.
pub struct ListSchoolsHandler {
    reader: Arc<dyn SchoolReader>,
}

impl ListSchoolsHandler {
    pub fn new(reader: Arc<dyn SchoolReader>) -> Self {
        Self { reader }
    }

    /// List all active schools with their ledger snapshots.
    pub async fn list_active(&self) -> Result<Vec<SeatAvailability>, DomainError> {
        let schools = self.reader.list_active().await?;
        Ok(schools.iter().map(SeatAvailability::from_school).collect())
    }

    /// List active schools with seats available, optionally by level.
    pub async fn list_with_available_seats(
        &self,
        level: Option<EducationLevel>,
    ) -> Result<Vec<SeatAvailability>, DomainError> {
        let schools = self.reader.list_with_available_seats(level).await?;
        Ok(schools.iter().map(SeatAvailability::from_school).collect())
    }
}
