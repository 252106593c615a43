//! Notification emitter adapters.
//!
//! The real inbox service lives outside this crate; these adapters cover
//! the in-process cases: a logging emitter for deployments without the
//! collaborator wired, and a recording emitter for tests.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{NotificationEmitter, NotificationRequest};

/// Emitter that logs each notification instead of delivering it.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingNotifier;

impl LoggingNotifier {
    /// Creates a logging emitter.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotificationEmitter for LoggingNotifier {
    async fn notify(&self, request: NotificationRequest) -> Result<(), DomainError> {
        tracing::info!(
            citizen_id = %request.citizen_id,
            kind = %request.kind,
            title = %request.title,
            "Notification emitted"
        );
        Ok(())
    }
}

/// Emitter that records requests for test assertions.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned. Acceptable for the
/// test code this adapter targets.
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<NotificationRequest>>,
    fail: bool,
}

impl RecordingNotifier {
    /// Creates a recording emitter that accepts every request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recording emitter that fails every request.
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Returns all recorded requests.
    pub fn sent(&self) -> Vec<NotificationRequest> {
        self.sent
            .lock()
            .expect("RecordingNotifier: lock poisoned")
            .clone()
    }
}

#[async_trait]
impl NotificationEmitter for RecordingNotifier {
    async fn notify(&self, request: NotificationRequest) -> Result<(), DomainError> {
        if self.fail {
            return Err(DomainError::new(
                ErrorCode::NotificationError,
                "Simulated notification failure",
            ));
        }
        self.sent
            .lock()
            .expect("RecordingNotifier: lock poisoned")
            .push(request);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::CitizenId;
    use crate::ports::NotificationKind;

    fn request() -> NotificationRequest {
        NotificationRequest::new(
            CitizenId::new(),
            "Enrollment registered",
            "Your enrollment request was registered.",
            NotificationKind::Success,
        )
    }

    #[tokio::test]
    async fn logging_notifier_always_succeeds() {
        assert!(LoggingNotifier::new().notify(request()).await.is_ok());
    }

    #[tokio::test]
    async fn recording_notifier_captures_requests() {
        let notifier = RecordingNotifier::new();
        notifier.notify(request()).await.unwrap();
        assert_eq!(notifier.sent().len(), 1);
    }

    #[tokio::test]
    async fn failing_notifier_returns_notification_error() {
        let notifier = RecordingNotifier::failing();
        let err = notifier.notify(request()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotificationError);
        assert!(notifier.sent().is_empty());
    }
}
