//! Row mapping shared by the profile repository and reader.

use crate::domain::foundation::{DomainError, ErrorCode, ProfileId};
use crate::domain::profile::{MedicalProfile, ProfileFields};

/// Database row representation of a profile.
#[derive(Debug, sqlx::FromRow)]
pub(super) struct ProfileRow {
    id: String,
    name: Option<String>,
    dob: Option<String>,
    bloodtype: Option<String>,
    allergies: Option<String>,
    conditions: Option<String>,
    socialsecuritynumber: Option<String>,
    insurancepolicy: Option<String>,
    emergencycontactname: Option<String>,
    emergencycontactphone: Option<String>,
    /// Missing entirely on tables created before the column existed.
    #[sqlx(default)]
    url: Option<String>,
}

impl TryFrom<ProfileRow> for MedicalProfile {
    type Error = DomainError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        let id = ProfileId::new(row.id).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid profile id: {}", e))
        })?;

        Ok(MedicalProfile {
            id,
            fields: ProfileFields {
                name: row.name,
                dob: row.dob,
                bloodtype: row.bloodtype,
                allergies: row.allergies,
                conditions: row.conditions,
                socialsecuritynumber: row.socialsecuritynumber,
                insurancepolicy: row.insurancepolicy,
                emergencycontactname: row.emergencycontactname,
                emergencycontactphone: row.emergencycontactphone,
            },
            url: row.url,
        })
    }
}
