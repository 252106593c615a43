//! GetEnrollmentHandler - Query handler for single-enrollment lookups.

use std::sync::Arc;

use crate::domain::enrollment::{Enrollment, EnrollmentError};
use crate::domain::foundation::{EnrollmentId, Protocol};
use crate::ports::{EnrollmentReader, EnrollmentRepository};

/// Handler for enrollment lookups by ID or protocol.
pub struct GetEnrollmentHandler {
    enrollments: Arc<dyn EnrollmentRepository>,
    reader: Arc<dyn EnrollmentReader>,
}

impl GetEnrollmentHandler {
    pub fn new(
        enrollments: Arc<dyn EnrollmentRepository>,
        reader: Arc<dyn EnrollmentReader>,
    ) -> Self {
        Self {
            enrollments,
            reader,
        }
    }

    /// Fetch an enrollment by its ID.
    pub async fn by_id(&self, id: &EnrollmentId) -> Result<Enrollment, EnrollmentError> {
        self.enrollments
            .find_by_id(id)
            .await?
            .ok_or(EnrollmentError::NotFound(*id))
    }

    /// Fetch an enrollment by its tracking protocol.
    pub async fn by_protocol(&self, protocol: &Protocol) -> Result<Enrollment, EnrollmentError> {
        self.reader
            .find_by_protocol(protocol)
            .await?
            .ok_or_else(|| EnrollmentError::ProtocolNotFound(protocol.clone()))
    }
}
