//! Enrollment lifecycle status and transition planning.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Lifecycle status of an enrollment request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentStatus {
    #[default]
    Pending,
    UnderReview,
    Approved,
    Rejected,
    Cancelled,
}

impl EnrollmentStatus {
    /// Stable storage token for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            EnrollmentStatus::Pending => "pending",
            EnrollmentStatus::UnderReview => "under_review",
            EnrollmentStatus::Approved => "approved",
            EnrollmentStatus::Rejected => "rejected",
            EnrollmentStatus::Cancelled => "cancelled",
        }
    }

    /// Parses a storage token back into a status.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(EnrollmentStatus::Pending),
            "under_review" => Some(EnrollmentStatus::UnderReview),
            "approved" => Some(EnrollmentStatus::Approved),
            "rejected" => Some(EnrollmentStatus::Rejected),
            "cancelled" => Some(EnrollmentStatus::Cancelled),
            _ => None,
        }
    }
}

impl StateMachine for EnrollmentStatus {
    /// Valid transitions:
    /// - Pending -> UnderReview | Approved | Rejected | Cancelled
    /// - UnderReview -> Approved | Rejected | Cancelled
    /// - Approved -> Approved (idempotent retry) | Cancelled
    /// - Rejected, Cancelled are terminal
    fn can_transition_to(&self, target: &Self) -> bool {
        use EnrollmentStatus::*;
        matches!(
            (self, target),
            (Pending, UnderReview)
                | (Pending, Approved)
                | (Pending, Rejected)
                | (Pending, Cancelled)
                | (UnderReview, Approved)
                | (UnderReview, Rejected)
                | (UnderReview, Cancelled)
                | (Approved, Approved)
                | (Approved, Cancelled)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use EnrollmentStatus::*;
        match self {
            Pending => vec![UnderReview, Approved, Rejected, Cancelled],
            UnderReview => vec![Approved, Rejected, Cancelled],
            Approved => vec![Approved, Cancelled],
            Rejected => vec![],
            Cancelled => vec![],
        }
    }
}

impl fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EnrollmentStatus::Pending => "Pending",
            EnrollmentStatus::UnderReview => "Under Review",
            EnrollmentStatus::Approved => "Approved",
            EnrollmentStatus::Rejected => "Rejected",
            EnrollmentStatus::Cancelled => "Cancelled",
        };
        write!(f, "{}", s)
    }
}

/// Ledger effect of a planned status transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatEffect {
    /// Transition touches no seat counters.
    None,
    /// Transition consumes one seat from the school's ledger.
    DebitSeat,
}

/// A validated transition, ready to be applied to an enrollment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTransition {
    /// Status before the transition.
    pub from: EnrollmentStatus,
    /// Status after the transition.
    pub to: EnrollmentStatus,
    /// Whether applying this transition must debit a seat first.
    pub seat_effect: SeatEffect,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_pending() {
        assert_eq!(EnrollmentStatus::default(), EnrollmentStatus::Pending);
    }

    #[test]
    fn pending_can_reach_every_other_status() {
        use EnrollmentStatus::*;
        for target in [UnderReview, Approved, Rejected, Cancelled] {
            assert!(Pending.can_transition_to(&target));
        }
    }

    #[test]
    fn approved_only_allows_retry_and_cancellation() {
        use EnrollmentStatus::*;
        assert!(Approved.can_transition_to(&Approved));
        assert!(Approved.can_transition_to(&Cancelled));
        assert!(!Approved.can_transition_to(&Pending));
        assert!(!Approved.can_transition_to(&UnderReview));
        assert!(!Approved.can_transition_to(&Rejected));
    }

    #[test]
    fn rejected_and_cancelled_are_terminal() {
        assert!(EnrollmentStatus::Rejected.is_terminal());
        assert!(EnrollmentStatus::Cancelled.is_terminal());
        assert!(!EnrollmentStatus::Approved.is_terminal());
    }

    #[test]
    fn under_review_cannot_return_to_pending() {
        assert!(!EnrollmentStatus::UnderReview.can_transition_to(&EnrollmentStatus::Pending));
    }

    #[test]
    fn transition_to_enforces_the_table() {
        let result = EnrollmentStatus::Cancelled.transition_to(EnrollmentStatus::Approved);
        assert!(result.is_err());
        let result = EnrollmentStatus::Pending.transition_to(EnrollmentStatus::UnderReview);
        assert_eq!(result, Ok(EnrollmentStatus::UnderReview));
    }

    #[test]
    fn storage_token_round_trips() {
        use EnrollmentStatus::*;
        for status in [Pending, UnderReview, Approved, Rejected, Cancelled] {
            assert_eq!(EnrollmentStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn display_uses_human_labels() {
        assert_eq!(format!("{}", EnrollmentStatus::UnderReview), "Under Review");
    }
}
