//! TransitionEnrollmentHandler - Command handler for status transitions.

use std::sync::Arc;

use crate::domain::enrollment::{
    Enrollment, EnrollmentError, EnrollmentStatus, EnrollmentStatusChanged, SeatEffect,
};
use crate::domain::foundation::{EnrollmentId, ErrorCode, EventId, SerializableDomainEvent, Timestamp};
use crate::ports::{EnrollmentRepository, EventPublisher, SchoolRepository};

/// Command to move an enrollment to a new status.
#[derive(Debug, Clone)]
pub struct TransitionEnrollmentCommand {
    pub enrollment_id: EnrollmentId,
    pub requested_status: EnrollmentStatus,
}

/// Handler for enrollment status transitions.
///
/// The first approval consumes a seat through the atomic debit on the
/// school store; if the debit fails the transition fails and the status
/// is not updated. Later downgrades never return the seat.
pub struct TransitionEnrollmentHandler {
    enrollments: Arc<dyn EnrollmentRepository>,
    schools: Arc<dyn SchoolRepository>,
    events: Arc<dyn EventPublisher>,
}

impl TransitionEnrollmentHandler {
    pub fn new(
        enrollments: Arc<dyn EnrollmentRepository>,
        schools: Arc<dyn SchoolRepository>,
        events: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            enrollments,
            schools,
            events,
        }
    }

    pub async fn handle(
        &self,
        cmd: TransitionEnrollmentCommand,
    ) -> Result<Enrollment, EnrollmentError> {
        // 1. Load the enrollment
        let mut enrollment = self
            .enrollments
            .find_by_id(&cmd.enrollment_id)
            .await?
            .ok_or(EnrollmentError::NotFound(cmd.enrollment_id))?;

        // 2. Plan the transition; unreachable targets are rejected here
        let transition = enrollment.plan_transition(cmd.requested_status)?;

        // 3. Consume a seat when this is the first approval; a failed
        //    debit aborts the whole transition
        if transition.seat_effect == SeatEffect::DebitSeat {
            self.schools.try_debit_seat(enrollment.school_id()).await?;
        }

        // 4. Persist the new status under the optimistic lock
        let previous_status = enrollment.status();
        enrollment.apply_transition(transition);
        self.enrollments.update(&enrollment).await.map_err(|e| {
            if e.code == ErrorCode::ConcurrencyConflict {
                EnrollmentError::ConcurrencyConflict(cmd.enrollment_id)
            } else {
                EnrollmentError::from(e)
            }
        })?;

        // 5. Publish the event; delivery failure never fails the transition
        let event = EnrollmentStatusChanged {
            event_id: EventId::new(),
            enrollment_id: *enrollment.id(),
            citizen_id: *enrollment.citizen_id(),
            school_id: *enrollment.school_id(),
            protocol: enrollment.protocol().clone(),
            previous_status,
            new_status: enrollment.status(),
            seat_debited: transition.seat_effect == SeatEffect::DebitSeat,
            occurred_at: Timestamp::now(),
        };
        if let Err(e) = self.events.publish(event.to_envelope()).await {
            tracing::warn!(
                enrollment_id = %enrollment.id(),
                "Failed to publish enrollment.status_changed: {}",
                e
            );
        }

        Ok(enrollment)
    }
}
