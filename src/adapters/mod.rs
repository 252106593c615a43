//! Adapters layer - concrete implementations of the ports.
//!
//! - `postgres` - sqlx-backed persistence upholding the atomic seat debit
//! - `memory` - in-process implementations for tests and embedded use
//! - `events` - in-memory event bus and the notification relay
//! - `protocol` - sequence-based protocol issuance
//! - `notification` - default (logging) notification emitter

pub mod events;
pub mod memory;
pub mod notification;
pub mod postgres;
pub mod protocol;

pub use events::{InMemoryEventBus, NotificationRelay};
pub use memory::{InMemoryCitizenDirectory, InMemoryEnrollmentStore, InMemorySchoolStore};
pub use notification::{LoggingNotifier, RecordingNotifier};
pub use postgres::{
    PostgresEnrollmentReader, PostgresEnrollmentRepository, PostgresSchoolReader,
    PostgresSchoolRepository,
};
pub use protocol::SequenceProtocolIssuer;
