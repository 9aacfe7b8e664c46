//! Table definition for `medical_profiles`.

use sqlx::PgPool;

use crate::domain::foundation::DomainError;

/// Every column is free text. Only the primary key is enforced.
pub const CREATE_PROFILES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS medical_profiles (
        id TEXT PRIMARY KEY,
        name TEXT,
        dob TEXT,
        bloodtype TEXT,
        allergies TEXT,
        conditions TEXT,
        socialsecuritynumber TEXT,
        insurancepolicy TEXT,
        emergencycontactname TEXT,
        emergencycontactphone TEXT,
        url TEXT
    )
"#;

/// Creates the profile table if it does not exist yet.
///
/// Tables created by the earlier layout without `url` are left as they are.
/// Reads tolerate the missing column.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), DomainError> {
    sqlx::query(CREATE_PROFILES_TABLE)
        .execute(pool)
        .await
        .map_err(|e| DomainError::database("Failed to create medical_profiles table", e))?;

    Ok(())
}
