//! ProfileReader port for profile query operations

use async_trait::async_trait;

use crate::domain::{
    foundation::{DomainError, ProfileId},
    profile::MedicalProfile,
};

/// Query operations for medical profiles
#[async_trait]
pub trait ProfileReader: Send + Sync {
    /// Find a single profile by id
    async fn find_by_id(&self, id: &ProfileId) -> Result<Option<MedicalProfile>, DomainError>;

    /// All profiles ordered by name ascending
    async fn list_by_name(&self) -> Result<Vec<MedicalProfile>, DomainError>;
}
