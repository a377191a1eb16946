use sqlx::{SqliteExecutor, SqlitePool};

use crate::models::profile::{Links, NewLinks, Profile};

pub async fn get_profile(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Profile>> {
    sqlx::query_as::<_, Profile>(
        "SELECT id, name, email, created_at, updated_at FROM profile WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Inserts a new profile and returns its generated id.
/// Fails with a unique violation if the email is already taken.
pub async fn insert_profile<'e, E>(executor: E, name: &str, email: &str) -> sqlx::Result<i64>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query("INSERT INTO profile (name, email) VALUES (?, ?)")
        .bind(name)
        .bind(email)
        .execute(executor)
        .await?;
    Ok(result.last_insert_rowid())
}

/// Rewrites name and email in place. Returns the number of rows touched,
/// which is zero when no profile has that id.
pub async fn update_profile(
    pool: &SqlitePool,
    id: i64,
    name: &str,
    email: &str,
) -> sqlx::Result<u64> {
    let result = sqlx::query(
        "UPDATE profile SET name = ?, email = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
    )
    .bind(name)
    .bind(email)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

/// Insert-or-update keyed on id. Existing dependents keep pointing at the row.
pub async fn upsert_profile<'e, E>(executor: E, id: i64, name: &str, email: &str) -> sqlx::Result<()>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query(
        r#"
        INSERT INTO profile (id, name, email) VALUES (?, ?, ?)
        ON CONFLICT(id) DO UPDATE SET
            name = excluded.name,
            email = excluded.email,
            updated_at = CURRENT_TIMESTAMP
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(email)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn get_links(pool: &SqlitePool, profile_id: i64) -> sqlx::Result<Option<Links>> {
    sqlx::query_as::<_, Links>(
        "SELECT id, profile_id, github, linkedin, portfolio FROM links WHERE profile_id = ?",
    )
    .bind(profile_id)
    .fetch_optional(pool)
    .await
}

/// Replaces the profile's links row, creating it if absent.
pub async fn upsert_links<'e, E>(executor: E, profile_id: i64, links: &NewLinks) -> sqlx::Result<()>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query(
        r#"
        INSERT INTO links (profile_id, github, linkedin, portfolio) VALUES (?, ?, ?, ?)
        ON CONFLICT(profile_id) DO UPDATE SET
            github = excluded.github,
            linkedin = excluded.linkedin,
            portfolio = excluded.portfolio
        "#,
    )
    .bind(profile_id)
    .bind(&links.github)
    .bind(&links.linkedin)
    .bind(&links.portfolio)
    .execute(executor)
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use crate::store::PROFILE_ID;

    #[tokio::test]
    async fn test_insert_and_get_profile() {
        let pool = test_pool().await;
        let id = insert_profile(&pool, "Ada", "ada@example.com").await.unwrap();

        let profile = get_profile(&pool, id).await.unwrap().unwrap();
        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_duplicate_email_is_unique_violation() {
        let pool = test_pool().await;
        insert_profile(&pool, "Ada", "ada@example.com").await.unwrap();

        let err = insert_profile(&pool, "Other", "ada@example.com")
            .await
            .unwrap_err();
        match err {
            sqlx::Error::Database(db_err) => assert!(db_err.is_unique_violation()),
            other => panic!("expected database error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_unknown_id_touches_nothing() {
        let pool = test_pool().await;
        let touched = update_profile(&pool, 99, "Ghost", "ghost@example.com")
            .await
            .unwrap();
        assert_eq!(touched, 0);
        assert!(get_profile(&pool, 99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_upsert_profile_keeps_single_row() {
        let pool = test_pool().await;
        upsert_profile(&pool, PROFILE_ID, "Ada", "ada@example.com")
            .await
            .unwrap();
        upsert_profile(&pool, PROFILE_ID, "Ada L.", "ada@example.org")
            .await
            .unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM profile")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
        let profile = get_profile(&pool, PROFILE_ID).await.unwrap().unwrap();
        assert_eq!(profile.email, "ada@example.org");
    }

    #[tokio::test]
    async fn test_upsert_links_replaces_existing_row() {
        let pool = test_pool().await;
        upsert_profile(&pool, PROFILE_ID, "Ada", "ada@example.com")
            .await
            .unwrap();
        assert!(get_links(&pool, PROFILE_ID).await.unwrap().is_none());

        let first = NewLinks {
            github: Some("https://github.com/ada".into()),
            ..Default::default()
        };
        upsert_links(&pool, PROFILE_ID, &first).await.unwrap();
        let second = NewLinks {
            linkedin: Some("https://linkedin.com/in/ada".into()),
            ..Default::default()
        };
        upsert_links(&pool, PROFILE_ID, &second).await.unwrap();

        let links = get_links(&pool, PROFILE_ID).await.unwrap().unwrap();
        assert_eq!(links.github, None);
        assert_eq!(links.linkedin.as_deref(), Some("https://linkedin.com/in/ada"));
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }
}
