//! School availability query handlers.

mod get_seat_availability;
mod list_schools;

pub use get_seat_availability::{GetSeatAvailabilityHandler, SeatAvailability};
pub use list_schools::ListSchoolsHandler;
