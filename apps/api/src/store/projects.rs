use sqlx::types::Json;
use sqlx::{SqliteExecutor, SqlitePool};

use crate::models::project::{NewProject, Project, ProjectMatch, ProjectRow};

const PROJECT_COLUMNS: &str = "id, profile_id, title, description, links, skills_used, created_at";

/// Lists a profile's projects. With `skill`, keeps only projects whose
/// `skills_used` contains it as a case-sensitive substring.
pub async fn list_projects(
    pool: &SqlitePool,
    profile_id: i64,
    skill: Option<&str>,
) -> sqlx::Result<Vec<Project>> {
    let rows = match skill {
        Some(skill) => {
            sqlx::query_as::<_, ProjectRow>(&format!(
                "SELECT {PROJECT_COLUMNS} FROM projects \
                 WHERE profile_id = ? AND instr(skills_used, ?) > 0"
            ))
            .bind(profile_id)
            .bind(skill)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, ProjectRow>(&format!(
                "SELECT {PROJECT_COLUMNS} FROM projects WHERE profile_id = ?"
            ))
            .bind(profile_id)
            .fetch_all(pool)
            .await?
        }
    };
    Ok(rows.into_iter().map(Project::from).collect())
}

/// Inserts a project, encoding its links as JSON text. Returns the new id.
pub async fn insert_project<'e, E>(
    executor: E,
    profile_id: i64,
    project: &NewProject,
) -> sqlx::Result<i64>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query(
        "INSERT INTO projects (profile_id, title, description, links, skills_used) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(profile_id)
    .bind(&project.title)
    .bind(&project.description)
    .bind(project.links.clone().map(Json))
    .bind(&project.skills_used)
    .execute(executor)
    .await?;
    Ok(result.last_insert_rowid())
}

/// Case-sensitive substring match on title, description or skills_used.
pub async fn search_projects(
    pool: &SqlitePool,
    profile_id: i64,
    term: &str,
) -> sqlx::Result<Vec<ProjectMatch>> {
    sqlx::query_as::<_, ProjectMatch>(
        r#"
        SELECT id, title, description, skills_used
        FROM projects
        WHERE profile_id = ?1
          AND (instr(title, ?2) > 0 OR instr(description, ?2) > 0 OR instr(skills_used, ?2) > 0)
        "#,
    )
    .bind(profile_id)
    .bind(term)
    .fetch_all(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use crate::models::project::ProjectLink;
    use crate::store::{fixtures, PROFILE_ID};

    fn project(title: &str, skills_used: Option<&str>) -> NewProject {
        NewProject {
            title: title.to_string(),
            skills_used: skills_used.map(String::from),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_links_round_trip_in_order() {
        let pool = test_pool().await;
        fixtures::with_profile(&pool).await;
        let links = vec![
            ProjectLink {
                title: "GitHub".into(),
                url: "https://github.com/ada/engine".into(),
            },
            ProjectLink {
                title: "Paper".into(),
                url: "https://example.com/notes".into(),
            },
        ];
        let new = NewProject {
            title: "Analytical Engine".into(),
            links: Some(links.clone()),
            ..Default::default()
        };
        insert_project(&pool, PROFILE_ID, &new).await.unwrap();

        let projects = list_projects(&pool, PROFILE_ID, None).await.unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].links, links);
    }

    #[tokio::test]
    async fn test_skill_filter_is_case_sensitive_substring() {
        let pool = test_pool().await;
        fixtures::with_profile(&pool).await;
        insert_project(&pool, PROFILE_ID, &project("A", Some("Rust,Tokio")))
            .await
            .unwrap();
        insert_project(&pool, PROFILE_ID, &project("B", Some("Python")))
            .await
            .unwrap();
        insert_project(&pool, PROFILE_ID, &project("C", None))
            .await
            .unwrap();

        let hits = list_projects(&pool, PROFILE_ID, Some("Tok")).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "A");

        assert!(list_projects(&pool, PROFILE_ID, Some("rust"))
            .await
            .unwrap()
            .is_empty());
        assert!(list_projects(&pool, PROFILE_ID, Some("Haskell"))
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_search_covers_all_text_columns() {
        let pool = test_pool().await;
        fixtures::with_profile(&pool).await;
        let mut by_description = project("Loom", None);
        by_description.description = Some("Punched cards drive the pattern".into());
        insert_project(&pool, PROFILE_ID, &by_description)
            .await
            .unwrap();
        insert_project(&pool, PROFILE_ID, &project("Card reader", None))
            .await
            .unwrap();
        insert_project(&pool, PROFILE_ID, &project("Sorter", Some("Cards,Gears")))
            .await
            .unwrap();

        let hits = search_projects(&pool, PROFILE_ID, "ard").await.unwrap();
        assert_eq!(hits.len(), 3);
        let hits = search_projects(&pool, PROFILE_ID, "Card").await.unwrap();
        let titles: Vec<_> = hits.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Card reader", "Sorter"]);
    }
}
