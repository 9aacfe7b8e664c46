//! PostgreSQL implementation of ProfileRepository.
//!
//! Each operation is a single parameterized statement executed on a
//! connection checked out from the pool for the duration of the call.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ProfileId};
use crate::domain::profile::{MedicalProfile, ProfileFields};
use crate::ports::ProfileRepository;

/// PostgreSQL implementation of ProfileRepository.
#[derive(Clone)]
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    /// Creates a new PostgresProfileRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn insert(&self, profile: &MedicalProfile) -> Result<(), DomainError> {
        let fields = &profile.fields;

        sqlx::query(
            r#"
            INSERT INTO medical_profiles (
                id, name, dob, bloodtype, allergies, conditions,
                socialsecuritynumber, insurancepolicy,
                emergencycontactname, emergencycontactphone, url
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(profile.id.as_str())
        .bind(fields.name.as_deref())
        .bind(fields.dob.as_deref())
        .bind(fields.bloodtype.as_deref())
        .bind(fields.allergies.as_deref())
        .bind(fields.conditions.as_deref())
        .bind(fields.socialsecuritynumber.as_deref())
        .bind(fields.insurancepolicy.as_deref())
        .bind(fields.emergencycontactname.as_deref())
        .bind(fields.emergencycontactphone.as_deref())
        .bind(profile.url.as_deref())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert profile", e))?;

        Ok(())
    }

    async fn update(
        &self,
        id: &ProfileId,
        fields: &ProfileFields,
        url: Option<&str>,
    ) -> Result<u64, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE medical_profiles SET
                name = $1,
                dob = $2,
                bloodtype = $3,
                allergies = $4,
                conditions = $5,
                socialsecuritynumber = $6,
                insurancepolicy = $7,
                emergencycontactname = $8,
                emergencycontactphone = $9,
                url = $10
            WHERE id = $11
            "#,
        )
        .bind(fields.name.as_deref())
        .bind(fields.dob.as_deref())
        .bind(fields.bloodtype.as_deref())
        .bind(fields.allergies.as_deref())
        .bind(fields.conditions.as_deref())
        .bind(fields.socialsecuritynumber.as_deref())
        .bind(fields.insurancepolicy.as_deref())
        .bind(fields.emergencycontactname.as_deref())
        .bind(fields.emergencycontactphone.as_deref())
        .bind(url)
        .bind(id.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update profile", e))?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: &ProfileId) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM medical_profiles WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete profile", e))?;

        Ok(result.rows_affected())
    }
}
