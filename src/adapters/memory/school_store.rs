//! In-memory school store.
//!
//! Holds schools in a map behind a single lock. Because `try_debit_seat`
//! performs its check-and-increment while holding the write lock, debits
//! on the same school are serialized and the `occupied <= total`
//! invariant holds under concurrent callers.
//!
//! # Panics
//!
//! Methods panic if the internal lock is poisoned. Acceptable for the
//! in-process use cases this adapter targets.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, EducationLevel, ErrorCode, SchoolId};
use crate::domain::school::School;
use crate::ports::{SchoolReader, SchoolRepository};

/// In-memory implementation of SchoolRepository and SchoolReader.
#[derive(Default)]
pub struct InMemorySchoolStore {
    schools: RwLock<HashMap<SchoolId, School>>,
}

impl InMemorySchoolStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a school directly (test seeding).
    pub fn insert(&self, school: School) {
        self.schools
            .write()
            .expect("InMemorySchoolStore: lock poisoned")
            .insert(*school.id(), school);
    }

    /// Returns a school snapshot, if present.
    pub fn get(&self, id: &SchoolId) -> Option<School> {
        self.schools
            .read()
            .expect("InMemorySchoolStore: lock poisoned")
            .get(id)
            .cloned()
    }
}

#[async_trait]
impl SchoolRepository for InMemorySchoolStore {
    async fn save(&self, school: &School) -> Result<(), DomainError> {
        self.insert(school.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &SchoolId) -> Result<Option<School>, DomainError> {
        Ok(self.get(id))
    }

    async fn try_debit_seat(&self, id: &SchoolId) -> Result<School, DomainError> {
        let mut schools = self
            .schools
            .write()
            .expect("InMemorySchoolStore: lock poisoned");

        let school = schools
            .get_mut(id)
            .filter(|s| s.is_active())
            .ok_or_else(|| {
                DomainError::new(ErrorCode::SchoolNotFound, format!("School not found: {}", id))
            })?;

        school.debit_seat()?;
        Ok(school.clone())
    }

    async fn set_total_seats(
        &self,
        id: &SchoolId,
        total_seats: u32,
    ) -> Result<School, DomainError> {
        let mut schools = self
            .schools
            .write()
            .expect("InMemorySchoolStore: lock poisoned");

        let school = schools.get_mut(id).ok_or_else(|| {
            DomainError::new(ErrorCode::SchoolNotFound, format!("School not found: {}", id))
        })?;

        school.set_total_seats(total_seats)?;
        Ok(school.clone())
    }
}

#[async_trait]
impl SchoolReader for InMemorySchoolStore {
    async fn list_active(&self) -> Result<Vec<School>, DomainError> {
        let schools = self
            .schools
            .read()
            .expect("InMemorySchoolStore: lock poisoned");
        let mut active: Vec<School> = schools.values().filter(|s| s.is_active()).cloned().collect();
        active.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(active)
    }

    async fn list_with_available_seats(
        &self,
        level: Option<EducationLevel>,
    ) -> Result<Vec<School>, DomainError> {
        let mut schools = self.list_active().await?;
        schools.retain(|s| s.available_seats() > 0);
        if let Some(level) = level {
            schools.retain(|s| s.education_level() == level);
        }
        Ok(schools)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::school::SeatStatus;

    fn school(name: &str, level: EducationLevel, total: u32) -> School {
        School::new(SchoolId::new(), name.to_string(), level, total).unwrap()
    }

    #[tokio::test]
    async fn try_debit_seat_decrements_availability() {
        let store = InMemorySchoolStore::new();
        let s = school("EMEF A", EducationLevel::Medio, 2);
        let id = *s.id();
        store.insert(s);

        let after = store.try_debit_seat(&id).await.unwrap();
        assert_eq!(after.occupied_seats(), 1);
        assert_eq!(store.get(&id).unwrap().occupied_seats(), 1);
    }

    #[tokio::test]
    async fn try_debit_seat_fails_when_exhausted() {
        let store = InMemorySchoolStore::new();
        let s = school("EMEF A", EducationLevel::Medio, 1);
        let id = *s.id();
        store.insert(s);

        store.try_debit_seat(&id).await.unwrap();
        let err = store.try_debit_seat(&id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SeatsExhausted);
        assert_eq!(store.get(&id).unwrap().occupied_seats(), 1);
    }

    #[tokio::test]
    async fn try_debit_seat_fails_for_inactive_school() {
        let store = InMemorySchoolStore::new();
        let mut s = school("EMEF A", EducationLevel::Medio, 5);
        s.deactivate();
        let id = *s.id();
        store.insert(s);

        let err = store.try_debit_seat(&id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SchoolNotFound);
    }

    #[tokio::test]
    async fn concurrent_debits_never_oversell() {
        use std::sync::Arc;

        let store = Arc::new(InMemorySchoolStore::new());
        let s = school("EMEF A", EducationLevel::Medio, 3);
        let id = *s.id();
        store.insert(s);

        let tasks: Vec<_> = (0..10)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.try_debit_seat(&id).await })
            })
            .collect();

        let results = futures::future::join_all(tasks).await;
        let successes = results
            .into_iter()
            .filter(|r| r.as_ref().unwrap().is_ok())
            .count();

        assert_eq!(successes, 3);
        let final_school = store.get(&id).unwrap();
        assert_eq!(final_school.occupied_seats(), 3);
        assert_eq!(final_school.seat_status(), SeatStatus::Full);
    }

    #[tokio::test]
    async fn list_with_available_seats_filters_level_and_fullness() {
        let store = InMemorySchoolStore::new();
        let full = {
            let mut s = school("EMEF Full", EducationLevel::Medio, 1);
            s.debit_seat().unwrap();
            s
        };
        store.insert(full);
        store.insert(school("EMEF Medio", EducationLevel::Medio, 5));
        store.insert(school("EMEI Infantil", EducationLevel::Infantil, 5));

        let medio = store
            .list_with_available_seats(Some(EducationLevel::Medio))
            .await
            .unwrap();
        assert_eq!(medio.len(), 1);
        assert_eq!(medio[0].name(), "EMEF Medio");

        let all = store.list_with_available_seats(None).await.unwrap();
        assert_eq!(all.len(), 2);
    }
}
