use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a liveness status with the current time and environment name.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "environment": state.config.environment,
    }))
}

/// GET /
pub async fn index_handler() -> Json<Value> {
    Json(json!({
        "message": "Profile API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "GET /health",
            "profile": {
                "get": "GET /profile",
                "create": "POST /profile",
                "update": "PUT /profile/:id"
            },
            "projects": {
                "list": "GET /projects",
                "filter": "GET /projects?skill=<skill>",
                "create": "POST /projects"
            },
            "skills": {
                "list": "GET /skills",
                "top": "GET /skills/top?limit=5"
            },
            "work": "GET /work",
            "education": "GET /education",
            "links": "GET /links",
            "search": "GET /search?q=<query>"
        }
    }))
}
