//! HTTP DTOs for profile endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::profile::{deserialize_column_text, MedicalProfile, ProfileFields};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /save`.
///
/// `id` and `url` are assigned by the server, so any such keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaveProfileRequest {
    #[serde(flatten)]
    pub fields: ProfileFields,
}

/// Body of `PUT /records/:id`: a full replacement including `url`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(flatten)]
    pub fields: ProfileFields,
    #[serde(default, deserialize_with = "deserialize_column_text")]
    pub url: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response for a newly created profile.
#[derive(Debug, Clone, Serialize)]
pub struct SaveProfileResponse {
    pub message: String,
    #[serde(rename = "profileId")]
    pub profile_id: String,
    pub url: String,
}

/// Response carrying only a confirmation message.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A stored profile, keyed by column name.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub name: Option<String>,
    pub dob: Option<String>,
    pub bloodtype: Option<String>,
    pub allergies: Option<String>,
    pub conditions: Option<String>,
    pub socialsecuritynumber: Option<String>,
    pub insurancepolicy: Option<String>,
    pub emergencycontactname: Option<String>,
    pub emergencycontactphone: Option<String>,
    pub url: Option<String>,
}

impl From<MedicalProfile> for ProfileResponse {
    fn from(profile: MedicalProfile) -> Self {
        let fields = profile.fields;
        Self {
            id: profile.id.into_inner(),
            name: fields.name,
            dob: fields.dob,
            bloodtype: fields.bloodtype,
            allergies: fields.allergies,
            conditions: fields.conditions,
            socialsecuritynumber: fields.socialsecuritynumber,
            insurancepolicy: fields.insurancepolicy,
            emergencycontactname: fields.emergencycontactname,
            emergencycontactphone: fields.emergencycontactphone,
            url: profile.url,
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
