pub mod career;
pub mod health;
pub mod profile;
pub mod projects;
pub mod search;
pub mod skills;

use axum::{
    http::{Method, StatusCode, Uri},
    middleware,
    routing::{get, put},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::catch_panic::CatchPanicLayer;

use crate::errors::{attach_error_detail, handle_panic};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::index_handler))
        .route("/health", get(health::health_handler))
        .route(
            "/profile",
            get(profile::handle_get_profile).post(profile::handle_create_profile),
        )
        .route("/profile/:id", put(profile::handle_update_profile))
        .route(
            "/projects",
            get(projects::handle_list_projects).post(projects::handle_create_project),
        )
        .route("/skills", get(skills::handle_list_skills))
        .route("/skills/top", get(skills::handle_top_skills))
        .route("/search", get(search::handle_search))
        .route("/work", get(career::handle_list_work))
        .route("/education", get(career::handle_list_education))
        .route("/links", get(profile::handle_get_links))
        .fallback(handle_not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            attach_error_detail,
        ))
        .with_state(state)
}

async fn handle_not_found(method: Method, uri: Uri) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Endpoint not found",
            "path": uri.path(),
            "method": method.as_str(),
        })),
    )
}

/// Treats a missing or empty string field as absent.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
