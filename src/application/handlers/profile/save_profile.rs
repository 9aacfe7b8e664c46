//! SaveProfile - Command handler for creating medical profiles.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ProfileId};
use crate::domain::profile::{DisplayUrl, MedicalProfile, ProfileFields};
use crate::ports::ProfileRepository;

/// Command to store a new profile.
#[derive(Debug, Clone)]
pub struct SaveProfileCommand {
    pub fields: ProfileFields,
}

/// Result of profile creation.
#[derive(Debug, Clone)]
pub struct SaveProfileResult {
    pub profile_id: ProfileId,
    pub url: String,
}

/// Handler for creating profiles.
///
/// Issues a fresh id and display link, then inserts once. Id collisions are
/// left to the primary key and surface as a database error.
pub struct SaveProfileHandler {
    repository: Arc<dyn ProfileRepository>,
    display_url: DisplayUrl,
}

impl SaveProfileHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>, display_url: DisplayUrl) -> Self {
        Self {
            repository,
            display_url,
        }
    }

    pub async fn handle(&self, cmd: SaveProfileCommand) -> Result<SaveProfileResult, DomainError> {
        let profile_id = ProfileId::generate();
        let url = self.display_url.for_profile(&profile_id);

        let profile = MedicalProfile::new(profile_id.clone(), cmd.fields, Some(url.clone()));
        self.repository.insert(&profile).await?;

        tracing::debug!(profile_id = %profile_id, "Profile saved");

        Ok(SaveProfileResult { profile_id, url })
    }
}
