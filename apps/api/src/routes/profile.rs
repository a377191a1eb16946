use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::career::{Education, Work};
use crate::models::profile::{Links, Profile};
use crate::models::project::Project;
use crate::models::skill::Skill;
use crate::routes::non_empty;
use crate::state::AppState;
use crate::store::{career, profile, projects, skills, PROFILE_ID};

const DUPLICATE_EMAIL: &str = "Email already exists";

#[derive(Debug, Deserialize)]
pub struct ProfileInput {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl ProfileInput {
    fn validate(self) -> Result<(String, String), AppError> {
        match (non_empty(self.name), non_empty(self.email)) {
            (Some(name), Some(email)) => Ok((name, email)),
            _ => Err(AppError::BadRequest(
                "Name and email are required".to_string(),
            )),
        }
    }
}

/// The profile with every dependent collection inlined.
#[derive(Debug, Serialize)]
pub struct FullProfileResponse {
    pub profile: Profile,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub work: Vec<Work>,
    pub links: Option<Links>,
}

#[derive(Debug, Serialize)]
pub struct CreatedProfileResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct UpdatedProfileResponse {
    #[serde(flatten)]
    pub profile: Profile,
    pub message: &'static str,
}

/// GET /profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
) -> Result<Json<FullProfileResponse>, AppError> {
    let profile = profile::get_profile(&state.db, PROFILE_ID)
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;

    let education = career::list_education(&state.db, PROFILE_ID).await?;
    let skills = skills::list_skills(&state.db, PROFILE_ID).await?;
    let projects = projects::list_projects(&state.db, PROFILE_ID, None).await?;
    let work = career::list_work(&state.db, PROFILE_ID).await?;
    let links = profile::get_links(&state.db, PROFILE_ID).await?;

    Ok(Json(FullProfileResponse {
        profile,
        education,
        skills,
        projects,
        work,
        links,
    }))
}

/// POST /profile
pub async fn handle_create_profile(
    State(state): State<AppState>,
    payload: Result<Json<ProfileInput>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedProfileResponse>), AppError> {
    let Json(input) = payload?;
    let (name, email) = input.validate()?;

    let id = profile::insert_profile(&state.db, &name, &email)
        .await
        .map_err(|e| AppError::from_write(e, DUPLICATE_EMAIL))?;
    info!("Created profile {id}");

    Ok((
        StatusCode::CREATED,
        Json(CreatedProfileResponse {
            id,
            name,
            email,
            message: "Profile created successfully",
        }),
    ))
}

/// PUT /profile/:id
///
/// Existence is decided by the UPDATE's affected-row count, so an unknown id
/// is reported as 404 without a separate lookup.
pub async fn handle_update_profile(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ProfileInput>, JsonRejection>,
) -> Result<Json<UpdatedProfileResponse>, AppError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    let (name, email) = input.validate()?;

    let touched = profile::update_profile(&state.db, id, &name, &email)
        .await
        .map_err(|e| AppError::from_write(e, DUPLICATE_EMAIL))?;
    if touched == 0 {
        return Err(AppError::NotFound("Profile not found".to_string()));
    }

    let profile = profile::get_profile(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;
    info!("Updated profile {id}");

    Ok(Json(UpdatedProfileResponse {
        profile,
        message: "Profile updated successfully",
    }))
}

/// GET /links
pub async fn handle_get_links(State(state): State<AppState>) -> Result<Json<Links>, AppError> {
    let links = profile::get_links(&state.db, PROFILE_ID)
        .await?
        .ok_or_else(|| AppError::NotFound("Links not found".to_string()))?;
    Ok(Json(links))
}
