//! Notification relay - turns enrollment events into citizen notifications.
//!
//! The workflow handlers publish domain events and move on; this consumer
//! owns the coupling to the notification collaborator. Emitter failures
//! are logged and swallowed so a broken inbox never surfaces in the
//! enrollment operations.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::enrollment::{EnrollmentCreated, EnrollmentStatusChanged};
use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::{
    EventHandler, EventSubscriber, NotificationEmitter, NotificationKind, NotificationRequest,
};

/// Event types the relay consumes.
pub const RELAYED_EVENT_TYPES: [&str; 2] =
    ["enrollment.created.v1", "enrollment.status_changed.v1"];

/// Event handler that emits a notification per enrollment event.
pub struct NotificationRelay {
    emitter: Arc<dyn NotificationEmitter>,
}

impl NotificationRelay {
    /// Creates a relay over the given emitter.
    pub fn new(emitter: Arc<dyn NotificationEmitter>) -> Self {
        Self { emitter }
    }

    /// Subscribes a relay to its event types on the given bus.
    pub fn attach(emitter: Arc<dyn NotificationEmitter>, bus: &dyn EventSubscriber) {
        let relay = Arc::new(Self::new(emitter));
        bus.subscribe_all(&RELAYED_EVENT_TYPES, relay);
    }

    fn request_for(&self, event: &EventEnvelope) -> Result<NotificationRequest, DomainError> {
        match event.event_type.as_str() {
            "enrollment.created.v1" => {
                let created: EnrollmentCreated = event.payload_as()?;
                Ok(NotificationRequest::new(
                    created.citizen_id,
                    "Enrollment registered",
                    format!(
                        "Your enrollment request was registered under protocol {}.",
                        created.protocol
                    ),
                    NotificationKind::Success,
                ))
            }
            "enrollment.status_changed.v1" => {
                let changed: EnrollmentStatusChanged = event.payload_as()?;
                Ok(NotificationRequest::new(
                    changed.citizen_id,
                    "Enrollment status updated",
                    format!(
                        "Your enrollment {} is now: {}.",
                        changed.protocol, changed.new_status
                    ),
                    NotificationKind::Info,
                ))
            }
            other => Err(DomainError::new(
                crate::domain::foundation::ErrorCode::InternalError,
                format!("NotificationRelay received unexpected event type: {}", other),
            )),
        }
    }
}

#[async_trait]
impl EventHandler for NotificationRelay {
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
        let request = self.request_for(&event)?;

        // never propagate emitter failures into the workflow
        if let Err(e) = self.emitter.notify(request).await {
            tracing::warn!(
                event_type = %event.event_type,
                "Notification emission failed: {}",
                e
            );
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "NotificationRelay"
    }
}
