//! Sequence-based protocol issuer.
//!
//! Issues `prefix + millisecond timestamp + zero-padded sequence`. The
//! per-process monotonic sequence removes the same-millisecond collision
//! of a bare prefix+timestamp scheme: two protocols collide only if
//! the sequence wraps its six digits within a single millisecond, which
//! would take a million issuances in that millisecond.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::foundation::{DomainError, ErrorCode, Protocol, ProtocolKind, Timestamp};

/// Digits reserved for the per-process sequence suffix.
const SEQUENCE_DIGITS: u32 = 6;

/// Protocol issuer backed by a per-process atomic sequence.
#[derive(Debug, Default)]
pub struct SequenceProtocolIssuer {
    sequence: AtomicU64,
}

impl SequenceProtocolIssuer {
    /// Creates an issuer with the sequence at zero.
    pub fn new() -> Self {
        Self::default()
    }

    fn next_sequence(&self) -> Result<u64, DomainError> {
        self.sequence
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_add(1))
            .map_err(|_| {
                DomainError::new(
                    ErrorCode::ProtocolSpaceExhausted,
                    "Protocol sequence counter overflowed",
                )
            })
    }
}

#[async_trait]
impl crate::ports::ProtocolIssuer for SequenceProtocolIssuer {
    async fn issue(&self, kind: ProtocolKind) -> Result<Protocol, DomainError> {
        let sequence = self.next_sequence()?;
        let millis = Timestamp::now().as_millis();
        let suffix = sequence % 10u64.pow(SEQUENCE_DIGITS);

        let value = format!(
            "{}{}{:0width$}",
            kind.prefix(),
            millis,
            suffix,
            width = SEQUENCE_DIGITS as usize
        );
        Ok(Protocol::new(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ProtocolIssuer;
    use std::collections::HashSet;

    #[tokio::test]
    async fn issued_protocol_carries_kind_prefix() {
        let issuer = SequenceProtocolIssuer::new();
        let protocol = issuer.issue(ProtocolKind::Enrollment).await.unwrap();
        assert!(protocol.as_str().starts_with("MAT"));
        assert!(protocol.is_kind(ProtocolKind::Enrollment));

        let protocol = issuer.issue(ProtocolKind::StreetLighting).await.unwrap();
        assert!(protocol.as_str().starts_with("ILU"));
    }

    #[tokio::test]
    async fn ten_thousand_rapid_issuances_are_distinct() {
        let issuer = SequenceProtocolIssuer::new();
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            let protocol = issuer.issue(ProtocolKind::Enrollment).await.unwrap();
            assert!(seen.insert(protocol), "duplicate protocol issued");
        }
        assert_eq!(seen.len(), 10_000);
    }

    #[tokio::test]
    async fn concurrent_issuances_are_distinct() {
        use std::sync::Arc;

        let issuer = Arc::new(SequenceProtocolIssuer::new());
        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let issuer = issuer.clone();
                tokio::spawn(async move {
                    let mut issued = Vec::new();
                    for _ in 0..250 {
                        issued.push(issuer.issue(ProtocolKind::Enrollment).await.unwrap());
                    }
                    issued
                })
            })
            .collect();

        let mut seen = HashSet::new();
        for task in tasks {
            for protocol in task.await.unwrap() {
                assert!(seen.insert(protocol), "duplicate protocol issued");
            }
        }
        assert_eq!(seen.len(), 2_000);
    }

    #[tokio::test]
    async fn exhausted_counter_reports_protocol_space_exhausted() {
        let issuer = SequenceProtocolIssuer {
            sequence: AtomicU64::new(u64::MAX),
        };
        let err = issuer.issue(ProtocolKind::Enrollment).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ProtocolSpaceExhausted);
    }
}
