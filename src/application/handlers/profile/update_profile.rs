//! UpdateProfile - Command handler for overwriting a profile.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ProfileId};
use crate::domain::profile::ProfileFields;
use crate::ports::ProfileRepository;

/// Command to replace every column of a profile except its id.
#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    pub profile_id: ProfileId,
    pub fields: ProfileFields,
    pub url: Option<String>,
}

/// Result of a profile update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateProfileResult {
    pub rows_affected: u64,
}

impl UpdateProfileResult {
    pub fn matched(&self) -> bool {
        self.rows_affected > 0
    }
}

/// Handler for updating profiles.
///
/// An unknown id is not an error: the statement touches zero rows and the
/// caller decides what to report.
pub struct UpdateProfileHandler {
    repository: Arc<dyn ProfileRepository>,
}

impl UpdateProfileHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateProfileCommand) -> Result<UpdateProfileResult, DomainError> {
        let rows_affected = self
            .repository
            .update(&cmd.profile_id, &cmd.fields, cmd.url.as_deref())
            .await?;

        Ok(UpdateProfileResult { rows_affected })
    }
}
