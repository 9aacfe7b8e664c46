//! Route configuration for profile endpoints.

use axum::routing::{get, post, put};
use axum::Router;

use super::handlers::{
    delete_profile, get_profile, list_profiles, save_profile, update_profile, ProfileAppState,
};

/// Creates the profile router with all endpoints.
///
/// Routes:
/// - `POST /save` - Store a new profile
/// - `GET /profile/:id` - Fetch one profile
/// - `GET /records` - List all profiles by name
/// - `PUT /records/:id` - Overwrite a profile
/// - `DELETE /records/:id` - Remove a profile
pub fn profile_router() -> Router<ProfileAppState> {
    Router::new()
        .route("/save", post(save_profile))
        .route("/profile/:id", get(get_profile))
        .route("/records", get(list_profiles))
        .route("/records/:id", put(update_profile).delete(delete_profile))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryProfileStore;
    use crate::domain::profile::DisplayUrl;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let store = Arc::new(InMemoryProfileStore::new());
        let state = ProfileAppState::new(store.clone(), store, DisplayUrl::default());
        profile_router().with_state(state)
    }

    async fn status_of(method: Method, uri: &str) -> StatusCode {
        app()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn records_listing_is_mounted() {
        assert_eq!(status_of(Method::GET, "/records").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn delete_is_mounted_on_records_id() {
        assert_eq!(status_of(Method::DELETE, "/records/abc").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_profile_is_not_found() {
        assert_eq!(status_of(Method::GET, "/profile/abc").await, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn save_rejects_get() {
        assert_eq!(
            status_of(Method::GET, "/save").await,
            StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        assert_eq!(status_of(Method::GET, "/nope").await, StatusCode::NOT_FOUND);
    }
}
