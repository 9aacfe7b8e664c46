//! ListProfiles - Query handler for listing every profile.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::profile::MedicalProfile;
use crate::ports::ProfileReader;

/// Handler for listing profiles ordered by name.
pub struct ListProfilesHandler {
    reader: Arc<dyn ProfileReader>,
}

impl ListProfilesHandler {
    pub fn new(reader: Arc<dyn ProfileReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self) -> Result<Vec<MedicalProfile>, DomainError> {
        self.reader.list_by_name().await
    }
}
