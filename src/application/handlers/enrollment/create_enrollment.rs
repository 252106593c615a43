//! CreateEnrollmentHandler - Command handler for registering enrollment requests.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::domain::enrollment::{Enrollment, EnrollmentCreated, EnrollmentError};
use crate::domain::foundation::{
    CitizenId, EducationLevel, EnrollmentId, EventId, ProtocolKind, SchoolId,
    SerializableDomainEvent, Timestamp,
};
use crate::ports::{
    CitizenDirectory, EnrollmentRepository, EventPublisher, ProtocolIssuer, SchoolRepository,
};

/// Command to register a new enrollment request.
#[derive(Debug, Clone)]
pub struct CreateEnrollmentCommand {
    pub citizen_id: CitizenId,
    pub school_id: SchoolId,
    pub student_name: String,
    pub birth_date: Option<NaiveDate>,
    pub education_level: EducationLevel,
    pub grade: Option<String>,
    pub notes: Option<String>,
}

/// Handler for registering enrollment requests.
///
/// The seat check here is advisory only: seats are consumed on approval,
/// not on request, so final correctness rests on the atomic debit in the
/// transition handler.
pub struct CreateEnrollmentHandler {
    citizens: Arc<dyn CitizenDirectory>,
    schools: Arc<dyn SchoolRepository>,
    enrollments: Arc<dyn EnrollmentRepository>,
    issuer: Arc<dyn ProtocolIssuer>,
    events: Arc<dyn EventPublisher>,
}

impl CreateEnrollmentHandler {
    pub fn new(
        citizens: Arc<dyn CitizenDirectory>,
        schools: Arc<dyn SchoolRepository>,
        enrollments: Arc<dyn EnrollmentRepository>,
        issuer: Arc<dyn ProtocolIssuer>,
        events: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            citizens,
            schools,
            enrollments,
            issuer,
            events,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateEnrollmentCommand,
    ) -> Result<Enrollment, EnrollmentError> {
        // 1. Both referenced records must exist; the school must be enrollable
        let citizen = self
            .citizens
            .find_by_id(&cmd.citizen_id)
            .await?
            .ok_or(EnrollmentError::CitizenNotFound(cmd.citizen_id))?;

        let school = self
            .schools
            .find_by_id(&cmd.school_id)
            .await?
            .filter(|s| s.is_active())
            .ok_or(EnrollmentError::SchoolNotFound(cmd.school_id))?;

        // 2. Advisory availability gate
        if school.available_seats() == 0 {
            return Err(EnrollmentError::seats_exhausted(cmd.school_id));
        }

        // 3. Issue the tracking protocol
        let protocol = self.issuer.issue(ProtocolKind::Enrollment).await?;

        // 4. Create the pending enrollment aggregate
        let enrollment = Enrollment::new(
            EnrollmentId::new(),
            protocol.clone(),
            citizen.id,
            *school.id(),
            cmd.student_name,
            cmd.birth_date,
            cmd.education_level,
            cmd.grade,
            cmd.notes,
        )?;

        // 5. Persist
        self.enrollments.save(&enrollment).await?;

        // 6. Publish the event; delivery failure never fails the create
        let event = EnrollmentCreated {
            event_id: EventId::new(),
            enrollment_id: *enrollment.id(),
            citizen_id: citizen.id,
            school_id: *school.id(),
            protocol,
            occurred_at: Timestamp::now(),
        };
        if let Err(e) = self.events.publish(event.to_envelope()).await {
            tracing::warn!(
                enrollment_id = %enrollment.id(),
                "Failed to publish enrollment.created: {}",
                e
            );
        }

        Ok(enrollment)
    }
}
