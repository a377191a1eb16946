use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::project::{NewProject, Project, ProjectLink};
use crate::routes::non_empty;
use crate::state::AppState;
use crate::store::{projects, PROFILE_ID};

#[derive(Debug, Deserialize)]
pub struct ProjectFilter {
    pub skill: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub links: Option<Vec<ProjectLink>>,
    pub skills_used: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreatedProjectResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub links: Vec<ProjectLink>,
    pub skills_used: Option<String>,
    pub message: &'static str,
}

/// GET /projects[?skill=]
pub async fn handle_list_projects(
    State(state): State<AppState>,
    filter: Result<Query<ProjectFilter>, QueryRejection>,
) -> Result<Json<Vec<Project>>, AppError> {
    let Query(filter) = filter?;
    let skill = non_empty(filter.skill);
    let projects = projects::list_projects(&state.db, PROFILE_ID, skill.as_deref()).await?;
    Ok(Json(projects))
}

/// POST /projects
pub async fn handle_create_project(
    State(state): State<AppState>,
    payload: Result<Json<CreateProjectRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedProjectResponse>), AppError> {
    let Json(req) = payload?;
    let title = non_empty(req.title)
        .ok_or_else(|| AppError::BadRequest("Title is required".to_string()))?;

    let project = NewProject {
        title,
        description: non_empty(req.description),
        links: req.links,
        skills_used: non_empty(req.skills_used),
    };
    let id = projects::insert_project(&state.db, PROFILE_ID, &project)
        .await
        .map_err(|e| AppError::from_write(e, "Project already exists"))?;
    info!("Created project {id} ({})", project.title);

    Ok((
        StatusCode::CREATED,
        Json(CreatedProjectResponse {
            id,
            title: project.title,
            description: project.description,
            links: project.links.unwrap_or_default(),
            skills_used: project.skills_used,
            message: "Project created successfully",
        }),
    ))
}
