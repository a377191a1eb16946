//! Sample data for local development, enabled with `SEED_SAMPLE_DATA=true`.
//!
//! The profile and its links are upserted on every run. Collections are only
//! inserted while the profile has none, so restarting does not duplicate rows.

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use tracing::info;

use crate::models::career::{NewEducation, NewWork};
use crate::models::profile::NewLinks;
use crate::models::project::{NewProject, ProjectLink};
use crate::models::skill::{NewSkill, Proficiency};
use crate::store::{career, profile, projects, skills, PROFILE_ID};

const SAMPLE_NAME: &str = "Alex Morgan";
const SAMPLE_EMAIL: &str = "alex.morgan@example.com";

const SAMPLE_SKILLS: &[(&str, Proficiency, i64)] = &[
    ("Rust", Proficiency::Advanced, 3),
    ("SQL", Proficiency::Advanced, 4),
    ("Python", Proficiency::Expert, 5),
    ("TypeScript", Proficiency::Intermediate, 2),
    ("React", Proficiency::Intermediate, 2),
    ("Docker", Proficiency::Advanced, 3),
    ("Git", Proficiency::Expert, 5),
    ("Kubernetes", Proficiency::Beginner, 1),
];

/// Number of rows present after seeding, per collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub education: i64,
    pub skills: i64,
    pub projects: i64,
    pub work: i64,
}

pub async fn seed_sample_data(pool: &SqlitePool) -> Result<SeedSummary> {
    let mut tx = pool.begin().await?;

    profile::upsert_profile(&mut *tx, PROFILE_ID, SAMPLE_NAME, SAMPLE_EMAIL)
        .await
        .context("Failed to upsert sample profile")?;
    profile::upsert_links(&mut *tx, PROFILE_ID, &sample_links())
        .await
        .context("Failed to upsert sample links")?;

    let existing: i64 = sqlx::query_scalar(
        r#"
        SELECT (SELECT COUNT(*) FROM education WHERE profile_id = ?1)
             + (SELECT COUNT(*) FROM skills WHERE profile_id = ?1)
             + (SELECT COUNT(*) FROM projects WHERE profile_id = ?1)
             + (SELECT COUNT(*) FROM work WHERE profile_id = ?1)
        "#,
    )
    .bind(PROFILE_ID)
    .fetch_one(&mut *tx)
    .await?;

    if existing == 0 {
        for education in sample_education() {
            career::insert_education(&mut *tx, PROFILE_ID, &education).await?;
        }
        for (name, proficiency, years) in SAMPLE_SKILLS {
            let skill = NewSkill {
                skill: name.to_string(),
                proficiency: *proficiency,
                years_of_experience: *years,
            };
            skills::insert_skill(&mut *tx, PROFILE_ID, &skill).await?;
        }
        for project in sample_projects() {
            projects::insert_project(&mut *tx, PROFILE_ID, &project).await?;
        }
        for work in sample_work() {
            career::insert_work(&mut *tx, PROFILE_ID, &work).await?;
        }
        info!("Inserted sample collections for profile {PROFILE_ID}");
    } else {
        info!("Profile {PROFILE_ID} already has {existing} dependent rows, skipping collections");
    }

    let summary = summarize(&mut tx).await?;
    tx.commit().await?;

    info!(
        "Sample data ready: {} education, {} skills, {} projects, {} work entries",
        summary.education, summary.skills, summary.projects, summary.work
    );
    Ok(summary)
}

async fn summarize(tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>) -> Result<SeedSummary> {
    let (education, skills, projects, work): (i64, i64, i64, i64) = sqlx::query_as(
        r#"
        SELECT (SELECT COUNT(*) FROM education WHERE profile_id = ?1),
               (SELECT COUNT(*) FROM skills WHERE profile_id = ?1),
               (SELECT COUNT(*) FROM projects WHERE profile_id = ?1),
               (SELECT COUNT(*) FROM work WHERE profile_id = ?1)
        "#,
    )
    .bind(PROFILE_ID)
    .fetch_one(&mut **tx)
    .await?;

    Ok(SeedSummary {
        education,
        skills,
        projects,
        work,
    })
}

fn sample_links() -> NewLinks {
    NewLinks {
        github: Some("https://github.com/alex-morgan".to_string()),
        linkedin: Some("https://www.linkedin.com/in/alex-morgan".to_string()),
        portfolio: None,
    }
}

fn sample_education() -> Vec<NewEducation> {
    vec![
        NewEducation {
            school: "State University".to_string(),
            degree: Some("Bachelor of Science".to_string()),
            field: Some("Computer Science".to_string()),
            start_year: Some(2016),
            end_year: Some(2020),
        },
        NewEducation {
            school: "Central High School".to_string(),
            degree: Some("High School Diploma".to_string()),
            field: None,
            start_year: Some(2012),
            end_year: Some(2016),
        },
    ]
}

fn sample_projects() -> Vec<NewProject> {
    vec![
        NewProject {
            title: "Ledger".to_string(),
            description: Some(
                "Double-entry bookkeeping service with an append-only journal and monthly reports."
                    .to_string(),
            ),
            links: Some(vec![ProjectLink {
                title: "GitHub".to_string(),
                url: "https://github.com/alex-morgan/ledger".to_string(),
            }]),
            skills_used: Some("Rust,SQL,Docker".to_string()),
        },
        NewProject {
            title: "Trailhead".to_string(),
            description: Some(
                "Hiking route planner that merges elevation data with live weather feeds."
                    .to_string(),
            ),
            links: Some(vec![
                ProjectLink {
                    title: "GitHub".to_string(),
                    url: "https://github.com/alex-morgan/trailhead".to_string(),
                },
                ProjectLink {
                    title: "Demo".to_string(),
                    url: "https://trailhead.example.com".to_string(),
                },
            ]),
            skills_used: Some("TypeScript,React,Python".to_string()),
        },
        NewProject {
            title: "Dotfiles".to_string(),
            description: None,
            links: None,
            skills_used: Some("Git".to_string()),
        },
    ]
}

fn sample_work() -> Vec<NewWork> {
    vec![
        NewWork {
            company: "Northwind Systems".to_string(),
            position: "Backend Engineer".to_string(),
            description: Some(
                "Owns the billing APIs and the Postgres to SQLite export pipeline.".to_string(),
            ),
            start_date: Some("2022-03".to_string()),
            end_date: None,
            is_current: true,
        },
        NewWork {
            company: "Contoso Labs".to_string(),
            position: "Software Engineer Intern".to_string(),
            description: Some("Built internal tooling for test data generation.".to_string()),
            start_date: Some("2019-06".to_string()),
            end_date: Some("2019-09".to_string()),
            is_current: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    #[tokio::test]
    async fn test_seed_populates_every_collection() {
        let pool = test_pool().await;
        let summary = seed_sample_data(&pool).await.unwrap();

        assert_eq!(
            summary,
            SeedSummary {
                education: 2,
                skills: SAMPLE_SKILLS.len() as i64,
                projects: 3,
                work: 2,
            }
        );
        let profile = profile::get_profile(&pool, PROFILE_ID)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(profile.email, SAMPLE_EMAIL);
        assert!(profile::get_links(&pool, PROFILE_ID).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let pool = test_pool().await;
        let first = seed_sample_data(&pool).await.unwrap();
        let second = seed_sample_data(&pool).await.unwrap();
        assert_eq!(first, second);

        let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(links, 1);
    }

    #[tokio::test]
    async fn test_seeded_projects_decode_links() {
        let pool = test_pool().await;
        seed_sample_data(&pool).await.unwrap();

        let all = projects::list_projects(&pool, PROFILE_ID, None).await.unwrap();
        let trailhead = all.iter().find(|p| p.title == "Trailhead").unwrap();
        assert_eq!(trailhead.links.len(), 2);
        assert_eq!(trailhead.links[1].title, "Demo");
        let dotfiles = all.iter().find(|p| p.title == "Dotfiles").unwrap();
        assert!(dotfiles.links.is_empty());
    }
}
