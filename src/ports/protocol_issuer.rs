//! Protocol issuer port.
//!
//! Issues the human-readable tracking identifiers handed to citizens.
//! Enrollments and the (external) service-request ticketing share one
//! issuer so prefixes stay consistent across the system.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Protocol, ProtocolKind};

/// Port for issuing tracking protocols.
///
/// Implementations must guarantee that every issued protocol is unique
/// among all protocols ever issued for the same kind. A bare
/// prefix+millisecond scheme collides within a millisecond and is not an
/// acceptable implementation.
#[async_trait]
pub trait ProtocolIssuer: Send + Sync {
    /// Issue a new protocol of the given kind.
    ///
    /// # Errors
    ///
    /// - `ProtocolSpaceExhausted` if the implementation's bounded counter
    ///   overflows (not expected in practice)
    async fn issue(&self, kind: ProtocolKind) -> Result<Protocol, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_issuer_is_object_safe() {
        fn _accepts_dyn(_issuer: &dyn ProtocolIssuer) {}
    }
}
