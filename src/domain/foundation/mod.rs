//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the citizen-services domain.

mod education_level;
mod errors;
mod events;
mod ids;
mod protocol;
mod state_machine;
mod timestamp;

pub use education_level::EducationLevel;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{DomainEvent, EventEnvelope, EventId, SerializableDomainEvent};
pub use ids::{CitizenId, EnrollmentId, SchoolId};
pub use protocol::{Protocol, ProtocolKind, PROTOCOL_PREFIX_LENGTH};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
