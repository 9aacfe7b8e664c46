//! HTTP handlers for profile endpoints.
//!
//! Every failure is logged in full and answered with a fixed message that
//! carries no internal detail.

use std::sync::Arc;

use axum::{
    async_trait,
    body::Bytes,
    extract::{rejection::BytesRejection, FromRequest, Path, Request, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::application::handlers::profile::{
    DeleteProfileCommand, DeleteProfileHandler, GetProfileHandler, GetProfileQuery,
    ListProfilesHandler, SaveProfileCommand, SaveProfileHandler, UpdateProfileCommand,
    UpdateProfileHandler,
};
use crate::domain::foundation::{DomainError, ErrorCode, ProfileId};
use crate::domain::profile::DisplayUrl;
use crate::ports::{ProfileReader, ProfileRepository};

use super::dto::{
    ErrorResponse, MessageResponse, ProfileResponse, SaveProfileRequest, SaveProfileResponse,
    UpdateProfileRequest,
};

pub const PROFILE_SAVED: &str = "Profile data saved successfully!";
pub const RECORD_UPDATED: &str = "Record updated successfully.";
pub const RECORD_DELETED: &str = "Record deleted successfully.";
pub const PROFILE_NOT_FOUND: &str = "Profile not found.";
pub const INVALID_BODY: &str = "Invalid request body.";

// ════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════

/// Shared state for the profile endpoints.
///
/// Cloned for each request. Handlers are built on demand from the ports.
#[derive(Clone)]
pub struct ProfileAppState {
    pub repository: Arc<dyn ProfileRepository>,
    pub reader: Arc<dyn ProfileReader>,
    pub display_url: DisplayUrl,
}

impl ProfileAppState {
    pub fn new(
        repository: Arc<dyn ProfileRepository>,
        reader: Arc<dyn ProfileReader>,
        display_url: DisplayUrl,
    ) -> Self {
        Self {
            repository,
            reader,
            display_url,
        }
    }

    pub fn save_handler(&self) -> SaveProfileHandler {
        SaveProfileHandler::new(self.repository.clone(), self.display_url.clone())
    }

    pub fn get_handler(&self) -> GetProfileHandler {
        GetProfileHandler::new(self.reader.clone())
    }

    pub fn list_handler(&self) -> ListProfilesHandler {
        ListProfilesHandler::new(self.reader.clone())
    }

    pub fn update_handler(&self) -> UpdateProfileHandler {
        UpdateProfileHandler::new(self.repository.clone())
    }

    pub fn delete_handler(&self) -> DeleteProfileHandler {
        DeleteProfileHandler::new(self.repository.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Extractors
// ════════════════════════════════════════════════════════════════════════════

/// Profile request body, read as JSON only when declared as JSON.
///
/// A body without a JSON content type, an empty body and a top-level array
/// all yield `T::default()`, so the request stores an all-`NULL` record.
/// Invalid JSON and top-level scalars are rejected with 400.
pub struct ProfileBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ProfileBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default + Send,
{
    type Rejection = BodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Ok(ProfileBody(T::default()));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(BodyRejection::Unreadable)?;

        parse_body(&bytes).map(ProfileBody)
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

fn parse_body<T>(bytes: &[u8]) -> Result<T, BodyRejection>
where
    T: DeserializeOwned + Default,
{
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    match serde_json::from_slice::<Value>(bytes).map_err(BodyRejection::Malformed)? {
        Value::Array(_) => Ok(T::default()),
        object @ Value::Object(_) => {
            serde_json::from_value(object).map_err(BodyRejection::Malformed)
        }
        _ => Err(BodyRejection::NotAnObject),
    }
}

/// Rejection for request bodies that cannot be read as a profile.
#[derive(Debug)]
pub enum BodyRejection {
    /// The body could not be buffered.
    Unreadable(BytesRejection),
    /// The body is not valid JSON.
    Malformed(serde_json::Error),
    /// The body is a JSON string, number, boolean or `null`.
    NotAnObject,
}

impl IntoResponse for BodyRejection {
    fn into_response(self) -> Response {
        let status = match &self {
            BodyRejection::Unreadable(rejection) => {
                tracing::debug!("Unreadable request body: {}", rejection.body_text());
                rejection.status()
            }
            BodyRejection::Malformed(e) => {
                tracing::debug!("Malformed request body: {}", e);
                StatusCode::BAD_REQUEST
            }
            BodyRejection::NotAnObject => {
                tracing::debug!("Request body is not a JSON object");
                StatusCode::BAD_REQUEST
            }
        };

        (status, Json(ErrorResponse::new(INVALID_BODY))).into_response()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /save - Store a new profile
pub async fn save_profile(
    State(state): State<ProfileAppState>,
    ProfileBody(req): ProfileBody<SaveProfileRequest>,
) -> Response {
    let cmd = SaveProfileCommand { fields: req.fields };

    match state.save_handler().handle(cmd).await {
        Ok(result) => {
            let response = SaveProfileResponse {
                message: PROFILE_SAVED.to_string(),
                profile_id: result.profile_id.into_inner(),
                url: result.url,
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_profile_error(Operation::Save, e),
    }
}

/// GET /profile/:id - Fetch a single profile
pub async fn get_profile(
    State(state): State<ProfileAppState>,
    Path(profile_id): Path<ProfileId>,
) -> Response {
    let query = GetProfileQuery { profile_id };

    match state.get_handler().handle(query).await {
        Ok(profile) => {
            let response: ProfileResponse = profile.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_profile_error(Operation::Get, e),
    }
}

/// GET /records - List every profile ordered by name
pub async fn list_profiles(State(state): State<ProfileAppState>) -> Response {
    match state.list_handler().handle().await {
        Ok(profiles) => {
            let response: Vec<ProfileResponse> =
                profiles.into_iter().map(ProfileResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_profile_error(Operation::List, e),
    }
}

/// PUT /records/:id - Overwrite a profile
///
/// Answers 200 even when no row matched the id.
pub async fn update_profile(
    State(state): State<ProfileAppState>,
    Path(profile_id): Path<ProfileId>,
    ProfileBody(req): ProfileBody<UpdateProfileRequest>,
) -> Response {
    let cmd = UpdateProfileCommand {
        profile_id: profile_id.clone(),
        fields: req.fields,
        url: req.url,
    };

    match state.update_handler().handle(cmd).await {
        Ok(result) => {
            if !result.matched() {
                tracing::warn!(profile_id = %profile_id, "Update matched no profile");
            }
            (StatusCode::OK, Json(MessageResponse::new(RECORD_UPDATED))).into_response()
        }
        Err(e) => handle_profile_error(Operation::Update, e),
    }
}

/// DELETE /records/:id - Remove a profile
///
/// Answers 200 even when no row matched the id.
pub async fn delete_profile(
    State(state): State<ProfileAppState>,
    Path(profile_id): Path<ProfileId>,
) -> Response {
    let cmd = DeleteProfileCommand {
        profile_id: profile_id.clone(),
    };

    match state.delete_handler().handle(cmd).await {
        Ok(result) => {
            if !result.matched() {
                tracing::warn!(profile_id = %profile_id, "Delete matched no profile");
            }
            (StatusCode::OK, Json(MessageResponse::new(RECORD_DELETED))).into_response()
        }
        Err(e) => handle_profile_error(Operation::Delete, e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

/// Endpoint an error came from, selecting the message shown to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Save,
    Get,
    List,
    Update,
    Delete,
}

impl Operation {
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::Save => "Failed to save profile data.",
            Operation::Get => "Failed to retrieve profile.",
            Operation::List => "Failed to retrieve records.",
            Operation::Update => "Failed to update record.",
            Operation::Delete => "Failed to delete record.",
        }
    }
}

fn handle_profile_error(operation: Operation, error: DomainError) -> Response {
    match error.code() {
        ErrorCode::ProfileNotFound => {
            (StatusCode::NOT_FOUND, Json(ErrorResponse::new(PROFILE_NOT_FOUND))).into_response()
        }
        ErrorCode::DatabaseError => {
            tracing::error!(operation = ?operation, "{}", error);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(operation.failure_message())),
            )
                .into_response()
        }
    }
}
