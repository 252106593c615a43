//! Ports layer - trait boundaries between the core and its collaborators.
//!
//! Repositories and readers abstract storage; the citizen directory and
//! notification emitter abstract the excluded collaborator services; the
//! protocol issuer and event bus abstract in-process infrastructure.

mod citizen_directory;
mod enrollment_reader;
mod enrollment_repository;
mod event_publisher;
mod event_subscriber;
mod notification_emitter;
mod protocol_issuer;
mod school_reader;
mod school_repository;

pub use citizen_directory::{CitizenDirectory, CitizenSummary};
pub use enrollment_reader::EnrollmentReader;
pub use enrollment_repository::EnrollmentRepository;
pub use event_publisher::EventPublisher;
pub use event_subscriber::{EventHandler, EventSubscriber};
pub use notification_emitter::{NotificationEmitter, NotificationKind, NotificationRequest};
pub use protocol_issuer::ProtocolIssuer;
pub use school_reader::SchoolReader;
pub use school_repository::SchoolRepository;
