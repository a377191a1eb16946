use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
pub struct Education {
    pub id: i64,
    pub profile_id: i64,
    pub school: String,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub start_year: Option<i64>,
    pub end_year: Option<i64>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewEducation {
    pub school: String,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub start_year: Option<i64>,
    pub end_year: Option<i64>,
}

/// A work history entry. `start_date` / `end_date` are stored as free-form
/// text (`YYYY-MM` by convention) and compared lexically.
#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
pub struct Work {
    pub id: i64,
    pub profile_id: i64,
    pub company: String,
    pub position: String,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_current: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewWork {
    pub company: String,
    pub position: String,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_current: bool,
}

/// Work fields returned by cross-entity search.
#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
pub struct WorkMatch {
    pub id: i64,
    pub company: String,
    pub position: String,
    pub description: Option<String>,
}
