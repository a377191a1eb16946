use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::skill::{Skill, TopSkill};
use crate::routes::non_empty;
use crate::state::AppState;
use crate::store::{skills, PROFILE_ID};

#[derive(Debug, Deserialize)]
pub struct TopSkillsQuery {
    pub limit: Option<String>,
}

impl TopSkillsQuery {
    /// No upper bound is applied; only non-integer input is rejected.
    fn limit(self) -> Result<i64, AppError> {
        match non_empty(self.limit) {
            None => Ok(skills::DEFAULT_TOP_LIMIT),
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|_| AppError::BadRequest(format!("Invalid limit '{raw}'"))),
        }
    }
}

/// GET /skills
pub async fn handle_list_skills(State(state): State<AppState>) -> Result<Json<Vec<Skill>>, AppError> {
    Ok(Json(skills::list_skills(&state.db, PROFILE_ID).await?))
}

/// GET /skills/top[?limit=]
pub async fn handle_top_skills(
    State(state): State<AppState>,
    query: Result<Query<TopSkillsQuery>, QueryRejection>,
) -> Result<Json<Vec<TopSkill>>, AppError> {
    let Query(query) = query?;
    let limit = query.limit()?;
    Ok(Json(skills::top_skills(&state.db, PROFILE_ID, limit).await?))
}
