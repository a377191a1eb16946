use sqlx::{SqliteExecutor, SqlitePool};

use crate::models::skill::{NewSkill, Skill, TopSkill};

/// Default number of rows returned by the top-skills ranking.
pub const DEFAULT_TOP_LIMIT: i64 = 5;

const SKILL_COLUMNS: &str = "id, profile_id, skill, proficiency, years_of_experience, created_at";

/// All skills, ordered by the stored proficiency text descending.
pub async fn list_skills(pool: &SqlitePool, profile_id: i64) -> sqlx::Result<Vec<Skill>> {
    sqlx::query_as::<_, Skill>(&format!(
        "SELECT {SKILL_COLUMNS} FROM skills WHERE profile_id = ? ORDER BY proficiency DESC"
    ))
    .bind(profile_id)
    .fetch_all(pool)
    .await
}

/// Skills ranked by years of experience, then proficiency. A negative limit
/// is passed through to SQLite, which treats it as unbounded.
pub async fn top_skills(
    pool: &SqlitePool,
    profile_id: i64,
    limit: i64,
) -> sqlx::Result<Vec<TopSkill>> {
    sqlx::query_as::<_, TopSkill>(
        r#"
        SELECT skill, proficiency, years_of_experience
        FROM skills
        WHERE profile_id = ?
        ORDER BY years_of_experience DESC, proficiency DESC
        LIMIT ?
        "#,
    )
    .bind(profile_id)
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn insert_skill<'e, E>(executor: E, profile_id: i64, skill: &NewSkill) -> sqlx::Result<i64>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query(
        "INSERT INTO skills (profile_id, skill, proficiency, years_of_experience) VALUES (?, ?, ?, ?)",
    )
    .bind(profile_id)
    .bind(&skill.skill)
    .bind(skill.proficiency.as_str())
    .bind(skill.years_of_experience)
    .execute(executor)
    .await?;
    Ok(result.last_insert_rowid())
}

/// Case-sensitive substring match on the skill name.
pub async fn search_skills(pool: &SqlitePool, profile_id: i64, term: &str) -> sqlx::Result<Vec<Skill>> {
    sqlx::query_as::<_, Skill>(&format!(
        "SELECT {SKILL_COLUMNS} FROM skills WHERE profile_id = ? AND instr(skill, ?) > 0"
    ))
    .bind(profile_id)
    .bind(term)
    .fetch_all(pool)
    .await
}
