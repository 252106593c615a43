//! In-memory enrollment store.
//!
//! # Panics
//!
//! Methods panic if the internal lock is poisoned. Acceptable for the
//! in-process use cases this adapter targets.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::enrollment::{Enrollment, EnrollmentStatus};
use crate::domain::foundation::{CitizenId, DomainError, EnrollmentId, ErrorCode, Protocol};
use crate::ports::{EnrollmentReader, EnrollmentRepository};

/// In-memory implementation of EnrollmentRepository and EnrollmentReader.
#[derive(Default)]
pub struct InMemoryEnrollmentStore {
    enrollments: RwLock<HashMap<EnrollmentId, Enrollment>>,
}

impl InMemoryEnrollmentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an enrollment snapshot, if present.
    pub fn get(&self, id: &EnrollmentId) -> Option<Enrollment> {
        self.enrollments
            .read()
            .expect("InMemoryEnrollmentStore: lock poisoned")
            .get(id)
            .cloned()
    }

    /// Returns all stored enrollments (test assertions).
    pub fn all(&self) -> Vec<Enrollment> {
        self.enrollments
            .read()
            .expect("InMemoryEnrollmentStore: lock poisoned")
            .values()
            .cloned()
            .collect()
    }

    /// Number of stored enrollments.
    pub fn count(&self) -> usize {
        self.enrollments
            .read()
            .expect("InMemoryEnrollmentStore: lock poisoned")
            .len()
    }
}

#[async_trait]
impl EnrollmentRepository for InMemoryEnrollmentStore {
    async fn save(&self, enrollment: &Enrollment) -> Result<(), DomainError> {
        self.enrollments
            .write()
            .expect("InMemoryEnrollmentStore: lock poisoned")
            .insert(*enrollment.id(), enrollment.clone());
        Ok(())
    }

    async fn update(&self, enrollment: &Enrollment) -> Result<(), DomainError> {
        let mut enrollments = self
            .enrollments
            .write()
            .expect("InMemoryEnrollmentStore: lock poisoned");

        let stored = enrollments.get_mut(enrollment.id()).ok_or_else(|| {
            DomainError::new(
                ErrorCode::EnrollmentNotFound,
                format!("Enrollment not found: {}", enrollment.id()),
            )
        })?;

        // optimistic lock: the incoming aggregate was bumped exactly once
        if stored.version() + 1 != enrollment.version() {
            return Err(DomainError::new(
                ErrorCode::ConcurrencyConflict,
                format!("Enrollment was modified concurrently: {}", enrollment.id()),
            ));
        }

        *stored = enrollment.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &EnrollmentId) -> Result<Option<Enrollment>, DomainError> {
        Ok(self.get(id))
    }
}

#[async_trait]
impl EnrollmentReader for InMemoryEnrollmentStore {
    async fn find_by_protocol(
        &self,
        protocol: &Protocol,
    ) -> Result<Option<Enrollment>, DomainError> {
        Ok(self
            .all()
            .into_iter()
            .find(|e| e.protocol() == protocol))
    }

    async fn list_by_citizen(
        &self,
        citizen_id: &CitizenId,
    ) -> Result<Vec<Enrollment>, DomainError> {
        let mut matches: Vec<Enrollment> = self
            .all()
            .into_iter()
            .filter(|e| e.citizen_id() == citizen_id)
            .collect();
        matches.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        Ok(matches)
    }

    async fn list_by_status(
        &self,
        status: EnrollmentStatus,
    ) -> Result<Vec<Enrollment>, DomainError> {
        Ok(self
            .all()
            .into_iter()
            .filter(|e| e.status() == status)
            .collect())
    }
}
