//! Enrollment-specific error types.

use crate::domain::foundation::{
    CitizenId, DomainError, EnrollmentId, ErrorCode, Protocol, SchoolId,
};

use super::EnrollmentStatus;

/// Errors surfaced by the enrollment workflow.
#[derive(Debug, Clone)]
pub enum EnrollmentError {
    /// Citizen was not found.
    CitizenNotFound(CitizenId),
    /// School was not found or is inactive.
    SchoolNotFound(SchoolId),
    /// Enrollment was not found.
    NotFound(EnrollmentId),
    /// Enrollment was not found by protocol.
    ProtocolNotFound(Protocol),
    /// No seat available at check or debit time.
    SeatsExhausted { school_id: SchoolId },
    /// Requested status is not reachable from the current one.
    InvalidTransition {
        from: EnrollmentStatus,
        to: EnrollmentStatus,
    },
    /// A concurrent writer updated the enrollment first.
    ConcurrencyConflict(EnrollmentId),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl EnrollmentError {
    pub fn citizen_not_found(id: CitizenId) -> Self {
        EnrollmentError::CitizenNotFound(id)
    }

    pub fn school_not_found(id: SchoolId) -> Self {
        EnrollmentError::SchoolNotFound(id)
    }

    pub fn not_found(id: EnrollmentId) -> Self {
        EnrollmentError::NotFound(id)
    }

    pub fn seats_exhausted(school_id: SchoolId) -> Self {
        EnrollmentError::SeatsExhausted { school_id }
    }

    pub fn invalid_transition(from: EnrollmentStatus, to: EnrollmentStatus) -> Self {
        EnrollmentError::InvalidTransition { from, to }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        EnrollmentError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        EnrollmentError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            EnrollmentError::CitizenNotFound(_) => ErrorCode::CitizenNotFound,
            EnrollmentError::SchoolNotFound(_) => ErrorCode::SchoolNotFound,
            EnrollmentError::NotFound(_) => ErrorCode::EnrollmentNotFound,
            EnrollmentError::ProtocolNotFound(_) => ErrorCode::EnrollmentNotFound,
            EnrollmentError::SeatsExhausted { .. } => ErrorCode::SeatsExhausted,
            EnrollmentError::InvalidTransition { .. } => ErrorCode::InvalidStatusTransition,
            EnrollmentError::ConcurrencyConflict(_) => ErrorCode::ConcurrencyConflict,
            EnrollmentError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            EnrollmentError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            EnrollmentError::CitizenNotFound(id) => format!("Citizen not found: {}", id),
            EnrollmentError::SchoolNotFound(id) => format!("School not found: {}", id),
            EnrollmentError::NotFound(id) => format!("Enrollment not found: {}", id),
            EnrollmentError::ProtocolNotFound(protocol) => {
                format!("Enrollment not found with protocol: {}", protocol)
            }
            EnrollmentError::SeatsExhausted { school_id } => {
                format!("School has no available seats: {}", school_id)
            }
            EnrollmentError::InvalidTransition { from, to } => {
                format!("Cannot transition from {} to {}", from, to)
            }
            EnrollmentError::ConcurrencyConflict(id) => {
                format!("Enrollment was modified concurrently: {}", id)
            }
            EnrollmentError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            EnrollmentError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for EnrollmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for EnrollmentError {}

impl From<DomainError> for EnrollmentError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::SeatsExhausted => {
                let school_id = err
                    .details
                    .get("school_id")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_default();
                EnrollmentError::SeatsExhausted { school_id }
            }
            ErrorCode::InvalidStatusTransition => {
                let parse = |key: &str| {
                    err.details
                        .get(key)
                        .and_then(|s| EnrollmentStatus::parse(s))
                };
                match (parse("from"), parse("to")) {
                    (Some(from), Some(to)) => EnrollmentError::InvalidTransition { from, to },
                    _ => EnrollmentError::ValidationFailed {
                        field: "status".to_string(),
                        message: err.message,
                    },
                }
            }
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => EnrollmentError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => EnrollmentError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_variants() {
        assert_eq!(
            EnrollmentError::seats_exhausted(SchoolId::new()).code(),
            ErrorCode::SeatsExhausted
        );
        assert_eq!(
            EnrollmentError::not_found(EnrollmentId::new()).code(),
            ErrorCode::EnrollmentNotFound
        );
        assert_eq!(
            EnrollmentError::invalid_transition(
                EnrollmentStatus::Cancelled,
                EnrollmentStatus::Approved
            )
            .code(),
            ErrorCode::InvalidStatusTransition
        );
    }

    #[test]
    fn seats_exhausted_domain_error_converts_with_school_detail() {
        let school_id = SchoolId::new();
        let err = DomainError::new(ErrorCode::SeatsExhausted, "no seats")
            .with_detail("school_id", school_id.to_string());

        match EnrollmentError::from(err) {
            EnrollmentError::SeatsExhausted { school_id: got } => assert_eq!(got, school_id),
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn validation_domain_error_keeps_field_detail() {
        let err = DomainError::validation("student_name", "cannot be empty");
        match EnrollmentError::from(err) {
            EnrollmentError::ValidationFailed { field, .. } => {
                assert_eq!(field, "student_name");
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn invalid_transition_domain_error_reconstructs_statuses() {
        let err = DomainError::new(ErrorCode::InvalidStatusTransition, "bad transition")
            .with_detail("from", "cancelled")
            .with_detail("to", "approved");

        match EnrollmentError::from(err) {
            EnrollmentError::InvalidTransition { from, to } => {
                assert_eq!(from, EnrollmentStatus::Cancelled);
                assert_eq!(to, EnrollmentStatus::Approved);
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn infrastructure_errors_fall_through() {
        let err = DomainError::new(ErrorCode::DatabaseError, "connection refused");
        assert!(matches!(
            EnrollmentError::from(err),
            EnrollmentError::Infrastructure(_)
        ));
    }
}
