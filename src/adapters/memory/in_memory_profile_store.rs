//! In-Memory Profile Store Adapter
//!
//! Keeps profiles in insertion order inside a `Vec`, mirroring heap storage
//! order so that name ties list in the order rows were written.
//! Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ProfileId};
use crate::domain::profile::{MedicalProfile, ProfileFields};
use crate::ports::{ProfileReader, ProfileRepository};

/// In-memory storage for medical profiles
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileStore {
    profiles: Arc<RwLock<Vec<MedicalProfile>>>,
}

impl InMemoryProfileStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored profiles (useful for tests)
    pub async fn clear(&self) {
        self.profiles.write().await.clear();
    }

    /// Get the number of stored profiles
    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.profiles.read().await.is_empty()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileStore {
    async fn insert(&self, profile: &MedicalProfile) -> Result<(), DomainError> {
        let mut profiles = self.profiles.write().await;
        if profiles.iter().any(|p| p.id == profile.id) {
            return Err(DomainError::database(
                "Failed to insert profile",
                format!("duplicate key value violates primary key (id)=({})", profile.id),
            ));
        }
        profiles.push(profile.clone());
        Ok(())
    }

    async fn update(
        &self,
        id: &ProfileId,
        fields: &ProfileFields,
        url: Option<&str>,
    ) -> Result<u64, DomainError> {
        let mut profiles = self.profiles.write().await;
        match profiles.iter_mut().find(|p| &p.id == id) {
            Some(profile) => {
                profile.replace(fields.clone(), url.map(String::from));
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: &ProfileId) -> Result<u64, DomainError> {
        let mut profiles = self.profiles.write().await;
        let before = profiles.len();
        profiles.retain(|p| &p.id != id);
        Ok((before - profiles.len()) as u64)
    }
}

#[async_trait]
impl ProfileReader for InMemoryProfileStore {
    async fn find_by_id(&self, id: &ProfileId) -> Result<Option<MedicalProfile>, DomainError> {
        Ok(self
            .profiles
            .read()
            .await
            .iter()
            .find(|p| &p.id == id)
            .cloned())
    }

    async fn list_by_name(&self) -> Result<Vec<MedicalProfile>, DomainError> {
        let mut profiles = self.profiles.read().await.clone();
        // stable: ties keep insertion order
        profiles.sort_by(MedicalProfile::name_order);
        Ok(profiles)
    }
}
