//! Notification emitter port.
//!
//! The notification inbox is an external collaborator; the enrollment core
//! only emits. Emission is fire-and-forget: the workflow never blocks on
//! it and never fails because of it (the relay logs and proceeds).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{CitizenId, DomainError};

/// Kind of notification shown in the citizen's inbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Info,
    Alert,
    Success,
    Error,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NotificationKind::Info => "Info",
            NotificationKind::Alert => "Alert",
            NotificationKind::Success => "Success",
            NotificationKind::Error => "Error",
        };
        write!(f, "{}", s)
    }
}

/// A notification to be delivered to a citizen's inbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRequest {
    pub citizen_id: CitizenId,
    pub title: String,
    pub body: String,
    pub kind: NotificationKind,
}

impl NotificationRequest {
    /// Creates a notification request.
    pub fn new(
        citizen_id: CitizenId,
        title: impl Into<String>,
        body: impl Into<String>,
        kind: NotificationKind,
    ) -> Self {
        Self {
            citizen_id,
            title: title.into(),
            body: body.into(),
            kind,
        }
    }
}

/// Port for emitting notifications to the external inbox collaborator.
#[async_trait]
pub trait NotificationEmitter: Send + Sync {
    /// Emit a notification.
    ///
    /// Callers in the enrollment workflow must treat failures as
    /// non-fatal; the relay logs them and proceeds.
    ///
    /// # Errors
    ///
    /// - `NotificationError` on collaborator failure
    async fn notify(&self, request: NotificationRequest) -> Result<(), DomainError>;
}
