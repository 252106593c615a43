//! ListEnrollmentsHandler - Query handler for enrollment listings.

use std::sync::Arc;

use crate::domain::enrollment::{Enrollment, EnrollmentError, EnrollmentStatus};
use crate::domain::foundation::CitizenId;
use crate::ports::EnrollmentReader;

/// Handler for enrollment listings.
pub struct ListEnrollmentsHandler {
    reader: Arc<dyn EnrollmentReader>,
}

impl ListEnrollmentsHandler {
    pub fn new(reader: Arc<dyn EnrollmentReader>) -> Self {
        Self { reader }
    }

    /// List a citizen's enrollments, newest first.
    pub async fn by_citizen(
        &self,
        citizen_id: &CitizenId,
    ) -> Result<Vec<Enrollment>, EnrollmentError> {
        Ok(self.reader.list_by_citizen(citizen_id).await?)
    }

    /// List enrollments currently in the given status.
    pub async fn by_status(
        &self,
        status: EnrollmentStatus,
    ) -> Result<Vec<Enrollment>, EnrollmentError> {
        Ok(self.reader.list_by_status(status).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryEnrollmentStore;
    use crate::domain::foundation::{EducationLevel, EnrollmentId, Protocol, SchoolId};
    use crate::ports::EnrollmentRepository;

    fn enrollment(citizen_id: CitizenId, protocol: &str) -> Enrollment {
        Enrollment::new(
            EnrollmentId::new(),
            Protocol::new(protocol).unwrap(),
            citizen_id,
            SchoolId::new(),
            "Ana Souza".to_string(),
            None,
            EducationLevel::FundamentalI,
            None,
            None,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn by_citizen_returns_only_their_enrollments() {
        let store = Arc::new(InMemoryEnrollmentStore::new());
        let citizen_id = CitizenId::new();
        store
            .save(&enrollment(citizen_id, "MAT17229600000000001"))
            .await
            .unwrap();
        store
            .save(&enrollment(CitizenId::new(), "MAT17229600000000002"))
            .await
            .unwrap();

        let handler = ListEnrollmentsHandler::new(store);
        let listed = handler.by_citizen(&citizen_id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].citizen_id(), &citizen_id);
    }

    #[tokio::test]
    async fn by_status_filters_enrollments() {
        let store = Arc::new(InMemoryEnrollmentStore::new());
        store
            .save(&enrollment(CitizenId::new(), "MAT17229600000000003"))
            .await
            .unwrap();

        let handler = ListEnrollmentsHandler::new(store);
        assert_eq!(
            handler
                .by_status(EnrollmentStatus::Pending)
                .await
                .unwrap()
                .len(),
            1
        );
        assert!(handler
            .by_status(EnrollmentStatus::Approved)
            .await
            .unwrap()
            .is_empty());
    }
}
