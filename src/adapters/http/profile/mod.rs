//! HTTP adapter for profile endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ErrorResponse, MessageResponse, ProfileResponse, SaveProfileRequest, SaveProfileResponse,
    UpdateProfileRequest,
};
pub use handlers::{
    BodyRejection, Operation, ProfileAppState, ProfileBody, INVALID_BODY, PROFILE_NOT_FOUND,
    PROFILE_SAVED, RECORD_DELETED, RECORD_UPDATED,
};
pub use routes::profile_router;
