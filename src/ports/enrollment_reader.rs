//! Enrollment reader port (query side).

use async_trait::async_trait;

use crate::domain::enrollment::{Enrollment, EnrollmentStatus};
use crate::domain::foundation::{CitizenId, DomainError, Protocol};

/// Reader port for enrollment queries.
#[async_trait]
pub trait EnrollmentReader: Send + Sync {
    /// Find an enrollment by its tracking protocol.
    ///
    /// Returns `None` if not found.
    async fn find_by_protocol(
        &self,
        protocol: &Protocol,
    ) -> Result<Option<Enrollment>, DomainError>;

    /// List a citizen's enrollments, newest first.
    async fn list_by_citizen(&self, citizen_id: &CitizenId)
        -> Result<Vec<Enrollment>, DomainError>;

    /// List all enrollments currently in the given status.
    async fn list_by_status(
        &self,
        status: EnrollmentStatus,
    ) -> Result<Vec<Enrollment>, DomainError>;
}
