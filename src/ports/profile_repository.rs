//! ProfileRepository port for profile persistence operations

use async_trait::async_trait;

use crate::domain::{
    foundation::{DomainError, ProfileId},
    profile::{MedicalProfile, ProfileFields},
};

/// Write side of the profile store.
///
/// Each method issues exactly one statement. Update and delete report how
/// many rows they touched rather than failing when the id is unknown.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Insert a new profile. A duplicate id is a database error.
    async fn insert(&self, profile: &MedicalProfile) -> Result<(), DomainError>;

    /// Overwrite every column except the id.
    async fn update(
        &self,
        id: &ProfileId,
        fields: &ProfileFields,
        url: Option<&str>,
    ) -> Result<u64, DomainError>;

    /// Delete the profile permanently.
    async fn delete(&self, id: &ProfileId) -> Result<u64, DomainError>;
}
