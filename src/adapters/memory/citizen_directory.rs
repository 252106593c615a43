//! In-memory citizen directory.
//!
//! Stand-in for the external citizen registry, seeded by tests or by an
//! embedding process.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::foundation::{CitizenId, DomainError};
use crate::ports::{CitizenDirectory, CitizenSummary};

/// In-memory implementation of CitizenDirectory.
#[derive(Default)]
pub struct InMemoryCitizenDirectory {
    citizens: RwLock<HashMap<CitizenId, CitizenSummary>>,
}

impl InMemoryCitizenDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a citizen and returns their ID.
    pub fn register(&self, name: impl Into<String>) -> CitizenId {
        let citizen = CitizenSummary {
            id: CitizenId::new(),
            name: name.into(),
        };
        let id = citizen.id;
        self.citizens
            .write()
            .expect("InMemoryCitizenDirectory: lock poisoned")
            .insert(id, citizen);
        id
    }
}

#[async_trait]
impl CitizenDirectory for InMemoryCitizenDirectory {
    async fn find_by_id(&self, id: &CitizenId) -> Result<Option<CitizenSummary>, DomainError> {
        Ok(self
            .citizens
            .read()
            .expect("InMemoryCitizenDirectory: lock poisoned")
            .get(id)
            .cloned())
    }
}
