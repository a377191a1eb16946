use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::career::WorkMatch;
use crate::models::project::ProjectMatch;
use crate::models::skill::Skill;
use crate::routes::non_empty;
use crate::state::AppState;
use crate::store::{career, projects, skills, PROFILE_ID};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: SearchResults,
}

#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub projects: usize,
    pub skills: usize,
    pub work: usize,
    pub data: SearchData,
}

#[derive(Debug, Serialize)]
pub struct SearchData {
    pub projects: Vec<ProjectMatch>,
    pub skills: Vec<Skill>,
    #[serde(rename = "workExperience")]
    pub work_experience: Vec<WorkMatch>,
}

/// GET /search?q=
///
/// Runs the project, skill and work lookups concurrently. All three use the
/// same case-sensitive substring match.
pub async fn handle_search(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<SearchResponse>, AppError> {
    let Query(query) = query?;
    let term = non_empty(query.q)
        .ok_or_else(|| AppError::BadRequest("Query parameter \"q\" is required".to_string()))?;

    let (projects, skills, work_experience) = tokio::try_join!(
        projects::search_projects(&state.db, PROFILE_ID, &term),
        skills::search_skills(&state.db, PROFILE_ID, &term),
        career::search_work(&state.db, PROFILE_ID, &term),
    )?;

    Ok(Json(SearchResponse {
        query: term,
        results: SearchResults {
            projects: projects.len(),
            skills: skills.len(),
            work: work_experience.len(),
            data: SearchData {
                projects,
                skills,
                work_experience,
            },
        },
    }))
}
