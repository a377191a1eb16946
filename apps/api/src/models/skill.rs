use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Proficiency {
    /// Stored representation. Listing endpoints sort on this text, not on skill level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Proficiency::Beginner => "beginner",
            Proficiency::Intermediate => "intermediate",
            Proficiency::Advanced => "advanced",
            Proficiency::Expert => "expert",
        }
    }
}

#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
pub struct Skill {
    pub id: i64,
    pub profile_id: i64,
    pub skill: String,
    pub proficiency: Option<String>,
    pub years_of_experience: i64,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
pub struct TopSkill {
    pub skill: String,
    pub proficiency: Option<String>,
    pub years_of_experience: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewSkill {
    pub skill: String,
    pub proficiency: Proficiency,
    pub years_of_experience: i64,
}
