//! School domain module.
//!
//! Owns the seat ledger: total and occupied counters on the School
//! aggregate, derived availability, and occupancy classification.

mod aggregate;
mod seat_status;

pub use aggregate::{School, MAX_SCHOOL_NAME_LENGTH};
pub use seat_status::{SeatStatus, LIMITED_OCCUPANCY_THRESHOLD};
