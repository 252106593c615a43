//! PostgreSQL adapters.
//!
//! sqlx-backed implementations of the persistence ports. The seat debit
//! is a conditional UPDATE so the check-and-increment happens atomically
//! inside the database, which keeps the `occupied <= total` invariant
//! across processes without distributed locking.

mod enrollment_reader;
mod enrollment_repository;
mod school_reader;
mod school_repository;

pub use enrollment_reader::PostgresEnrollmentReader;
pub use enrollment_repository::PostgresEnrollmentRepository;
pub use school_reader::PostgresSchoolReader;
pub use school_repository::PostgresSchoolRepository;
