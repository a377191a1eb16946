use sqlx::{SqliteExecutor, SqlitePool};

use crate::models::career::{Education, NewEducation, NewWork, Work, WorkMatch};

/// Work history, newest first. `start_date` is compared as text.
pub async fn list_work(pool: &SqlitePool, profile_id: i64) -> sqlx::Result<Vec<Work>> {
    sqlx::query_as::<_, Work>(
        r#"
        SELECT id, profile_id, company, position, description, start_date, end_date, is_current, created_at
        FROM work
        WHERE profile_id = ?
        ORDER BY start_date DESC
        "#,
    )
    .bind(profile_id)
    .fetch_all(pool)
    .await
}

pub async fn insert_work<'e, E>(executor: E, profile_id: i64, work: &NewWork) -> sqlx::Result<i64>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query(
        r#"
        INSERT INTO work (profile_id, company, position, description, start_date, end_date, is_current)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(profile_id)
    .bind(&work.company)
    .bind(&work.position)
    .bind(&work.description)
    .bind(&work.start_date)
    .bind(&work.end_date)
    .bind(work.is_current)
    .execute(executor)
    .await?;
    Ok(result.last_insert_rowid())
}

/// Case-sensitive substring match on company, position or description.
pub async fn search_work(pool: &SqlitePool, profile_id: i64, term: &str) -> sqlx::Result<Vec<WorkMatch>> {
    sqlx::query_as::<_, WorkMatch>(
        r#"
        SELECT id, company, position, description
        FROM work
        WHERE profile_id = ?1
          AND (instr(company, ?2) > 0 OR instr(position, ?2) > 0 OR instr(description, ?2) > 0)
        "#,
    )
    .bind(profile_id)
    .bind(term)
    .fetch_all(pool)
    .await
}

pub async fn list_education(pool: &SqlitePool, profile_id: i64) -> sqlx::Result<Vec<Education>> {
    sqlx::query_as::<_, Education>(
        r#"
        SELECT id, profile_id, school, degree, field, start_year, end_year, created_at
        FROM education
        WHERE profile_id = ?
        "#,
    )
    .bind(profile_id)
    .fetch_all(pool)
    .await
}

pub async fn insert_education<'e, E>(
    executor: E,
    profile_id: i64,
    education: &NewEducation,
) -> sqlx::Result<i64>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query(
        r#"
        INSERT INTO education (profile_id, school, degree, field, start_year, end_year)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(profile_id)
    .bind(&education.school)
    .bind(&education.degree)
    .bind(&education.field)
    .bind(education.start_year)
    .bind(education.end_year)
    .execute(executor)
    .await?;
    Ok(result.last_insert_rowid())
}
