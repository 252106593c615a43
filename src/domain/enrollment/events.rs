//! Enrollment domain events.
//!
//! Published by the workflow handlers after persistence succeeds. The
//! notification relay consumes them; nothing in the workflow blocks on
//! their delivery.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    CitizenId, DomainEvent, EnrollmentId, EventId, Protocol, SchoolId, Timestamp,
};

use super::EnrollmentStatus;

/// Published when a new enrollment request is registered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentCreated {
    pub event_id: EventId,
    pub enrollment_id: EnrollmentId,
    pub citizen_id: CitizenId,
    pub school_id: SchoolId,
    pub protocol: Protocol,
    pub occurred_at: Timestamp,
}

impl DomainEvent for EnrollmentCreated {
    fn event_type(&self) -> &'static str {
        "enrollment.created.v1"
    }

    fn aggregate_id(&self) -> String {
        self.enrollment_id.to_string()
    }

    fn occurred_at(&self) -> Timestamp {
        self.occurred_at
    }

    fn event_id(&self) -> EventId {
        self.event_id
    }
}

/// Published when an enrollment's status changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentStatusChanged {
    pub event_id: EventId,
    pub enrollment_id: EnrollmentId,
    pub citizen_id: CitizenId,
    pub school_id: SchoolId,
    pub protocol: Protocol,
    pub previous_status: EnrollmentStatus,
    pub new_status: EnrollmentStatus,
    /// Whether this transition consumed a seat.
    pub seat_debited: bool,
    pub occurred_at: Timestamp,
}

impl DomainEvent for EnrollmentStatusChanged {
    fn event_type(&self) -> &'static str {
        "enrollment.status_changed.v1"
    }

    fn aggregate_id(&self) -> String {
        self.enrollment_id.to_string()
    }

    fn occurred_at(&self) -> Timestamp {
        self.occurred_at
    }

    fn event_id(&self) -> EventId {
        self.event_id
    }
}
