//! Occupancy classification for school seat capacity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Occupancy ratio at which a school is considered nearly full.
pub const LIMITED_OCCUPANCY_THRESHOLD: f64 = 0.8;

/// Occupancy classification derived from a school's seat counters.
///
/// Never stored; recomputed from `total`/`occupied` on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatStatus {
    /// Seats available, occupancy below the limited threshold.
    Open,
    /// Seats still available but occupancy is at or above 80%.
    Limited,
    /// No seats available.
    Full,
}

impl SeatStatus {
    /// Classifies the given counters.
    ///
    /// A school with zero total seats has ratio 0 but no availability,
    /// so it classifies as `Full`.
    pub fn classify(total: u32, occupied: u32) -> Self {
        let available = total.saturating_sub(occupied);
        if available == 0 {
            return SeatStatus::Full;
        }
        let ratio = f64::from(occupied) / f64::from(total);
        if ratio >= LIMITED_OCCUPANCY_THRESHOLD {
            SeatStatus::Limited
        } else {
            SeatStatus::Open
        }
    }
}

impl fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SeatStatus::Open => "Open",
            SeatStatus::Limited => "Limited",
            SeatStatus::Full => "Full",
        };
        write!(f, "{}", s)
    }
}
