//! Profile application handlers.
//!
//! Command and query handlers for the medical profile store.

mod delete_profile;
mod get_profile;
mod list_profiles;
mod save_profile;
mod update_profile;

pub use delete_profile::{DeleteProfileCommand, DeleteProfileHandler, DeleteProfileResult};
pub use get_profile::{GetProfileHandler, GetProfileQuery};
pub use list_profiles::ListProfilesHandler;
pub use save_profile::{SaveProfileCommand, SaveProfileHandler, SaveProfileResult};
pub use update_profile::{UpdateProfileCommand, UpdateProfileHandler, UpdateProfileResult};
