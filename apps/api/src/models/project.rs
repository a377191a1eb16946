use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// One titled URL attached to a project. Order within a project is preserved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectLink {
    pub title: String,
    pub url: String,
}

/// Raw `projects` row. `links` is persisted as JSON text and may be NULL.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectRow {
    pub id: i64,
    pub profile_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub links: Option<Json<Vec<ProjectLink>>>,
    pub skills_used: Option<String>,
    pub created_at: NaiveDateTime,
}

/// API shape of a project: links are always a list, never null.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Project {
    pub id: i64,
    pub profile_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub links: Vec<ProjectLink>,
    pub skills_used: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: row.id,
            profile_id: row.profile_id,
            title: row.title,
            description: row.description,
            links: row.links.map(|Json(links)| links).unwrap_or_default(),
            skills_used: row.skills_used,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewProject {
    pub title: String,
    pub description: Option<String>,
    pub links: Option<Vec<ProjectLink>>,
    pub skills_used: Option<String>,
}

/// Project fields returned by cross-entity search.
#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
pub struct ProjectMatch {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub skills_used: Option<String>,
}
