//! Enrollment workflow handlers.

mod create_enrollment;
mod get_enrollment;
mod list_enrollments;
mod transition_enrollment;

pub use create_enrollment::{CreateEnrollmentCommand, CreateEnrollmentHandler};
pub use get_enrollment::GetEnrollmentHandler;
pub use list_enrollments::ListEnrollmentsHandler;
pub use transition_enrollment::{TransitionEnrollmentCommand, TransitionEnrollmentHandler};
