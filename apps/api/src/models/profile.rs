use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
pub struct Profile {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Social and portfolio URLs. At most one row exists per profile.
#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
pub struct Links {
    pub id: i64,
    pub profile_id: i64,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub portfolio: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewLinks {
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub portfolio: Option<String>,
}
