//! GetProfile - Query handler for retrieving a single profile.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ProfileId};
use crate::domain::profile::MedicalProfile;
use crate::ports::ProfileReader;

/// Query to fetch one profile by id.
#[derive(Debug, Clone)]
pub struct GetProfileQuery {
    pub profile_id: ProfileId,
}

/// Handler for getting a profile.
pub struct GetProfileHandler {
    reader: Arc<dyn ProfileReader>,
}

impl GetProfileHandler {
    pub fn new(reader: Arc<dyn ProfileReader>) -> Self {
        Self { reader }
    }

    /// Returns the profile, or a `ProfileNotFound` error when no row has the id.
    pub async fn handle(&self, query: GetProfileQuery) -> Result<MedicalProfile, DomainError> {
        self.reader
            .find_by_id(&query.profile_id)
            .await?
            .ok_or_else(|| DomainError::profile_not_found(&query.profile_id))
    }
}
