//! Profile module - the medical profile record and its display link.

mod display_url;
mod medical_profile;

pub use display_url::{DisplayUrl, DEFAULT_DISPLAY_URL_BASE};
pub use medical_profile::{deserialize_column_text, MedicalProfile, ProfileFields};
