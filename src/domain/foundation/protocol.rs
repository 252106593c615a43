//! Protocol value objects.
//!
//! A protocol is the human-readable tracking identifier handed to citizens
//! when an enrollment or service request is registered. It starts with a
//! fixed 3-letter kind prefix followed by digits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Length of the kind prefix at the start of every protocol.
pub const PROTOCOL_PREFIX_LENGTH: usize = 3;

/// The kind of record a protocol tracks.
///
/// Enrollments are handled by this crate; service-request kinds belong to
/// the ticketing collaborator, which shares the same issuer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProtocolKind {
    Enrollment,
    TreePruning,
    StreetLighting,
    PublicWorks,
    UrbanCleaning,
}

impl ProtocolKind {
    /// Returns the 3-letter prefix carried by protocols of this kind.
    pub fn prefix(&self) -> &'static str {
        match self {
            ProtocolKind::Enrollment => "MAT",
            ProtocolKind::TreePruning => "POD",
            ProtocolKind::StreetLighting => "ILU",
            ProtocolKind::PublicWorks => "OBR",
            ProtocolKind::UrbanCleaning => "LIM",
        }
    }
}

impl fmt::Display for ProtocolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

/// A unique, human-readable tracking identifier.
///
/// # Invariants
///
/// - Starts with a 3-letter uppercase ASCII prefix
/// - The remainder is ASCII digits
/// - Immutable once assigned to a record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Protocol(String);

impl Protocol {
    /// Creates a protocol from a raw string, validating its shape.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if the prefix or digit suffix is malformed
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if !value.is_ascii() || value.len() <= PROTOCOL_PREFIX_LENGTH {
            return Err(ValidationError::invalid_format(
                "protocol",
                "expected an ASCII prefix followed by digits",
            ));
        }
        let (prefix, rest) = value.split_at(PROTOCOL_PREFIX_LENGTH);

        if !prefix.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ValidationError::invalid_format(
                "protocol",
                "prefix must be 3 uppercase ASCII letters",
            ));
        }
        if !rest.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::invalid_format(
                "protocol",
                "suffix must be ASCII digits",
            ));
        }

        Ok(Self(value))
    }

    /// Returns the protocol as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the 3-letter kind prefix.
    pub fn prefix(&self) -> &str {
        &self.0[..PROTOCOL_PREFIX_LENGTH]
    }

    /// Checks whether this protocol carries the given kind's prefix.
    pub fn is_kind(&self, kind: ProtocolKind) -> bool {
        self.prefix() == kind.prefix()
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Protocol {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Protocol::new(s)
    }
}
