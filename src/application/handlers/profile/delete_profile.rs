//! DeleteProfile - Command handler for removing profiles.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ProfileId};
use crate::ports::ProfileRepository;

/// Command to delete a profile permanently.
#[derive(Debug, Clone)]
pub struct DeleteProfileCommand {
    pub profile_id: ProfileId,
}

/// Result of profile deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteProfileResult {
    pub rows_affected: u64,
}

impl DeleteProfileResult {
    pub fn matched(&self) -> bool {
        self.rows_affected > 0
    }
}

/// Handler for deleting profiles.
pub struct DeleteProfileHandler {
    repository: Arc<dyn ProfileRepository>,
}

impl DeleteProfileHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteProfileCommand) -> Result<DeleteProfileResult, DomainError> {
        let rows_affected = self.repository.delete(&cmd.profile_id).await?;
        Ok(DeleteProfileResult { rows_affected })
    }
}
