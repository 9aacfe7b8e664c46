//! PostgreSQL implementation of ProfileReader.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ProfileId};
use crate::domain::profile::MedicalProfile;
use crate::ports::ProfileReader;

use super::profile_row::ProfileRow;

/// PostgreSQL implementation of ProfileReader.
///
/// Selects `*` so that tables without the `url` column still load.
#[derive(Clone)]
pub struct PostgresProfileReader {
    pool: PgPool,
}

impl PostgresProfileReader {
    /// Creates a new PostgresProfileReader with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileReader for PostgresProfileReader {
    async fn find_by_id(&self, id: &ProfileId) -> Result<Option<MedicalProfile>, DomainError> {
        let row: Option<ProfileRow> =
            sqlx::query_as("SELECT * FROM medical_profiles WHERE id = $1")
                .bind(id.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to fetch profile", e))?;

        row.map(MedicalProfile::try_from).transpose()
    }

    async fn list_by_name(&self) -> Result<Vec<MedicalProfile>, DomainError> {
        let rows: Vec<ProfileRow> =
            sqlx::query_as("SELECT * FROM medical_profiles ORDER BY name ASC")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to list profiles", e))?;

        rows.into_iter().map(MedicalProfile::try_from).collect()
    }
}
