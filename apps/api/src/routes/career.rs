use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::career::{Education, Work};
use crate::state::AppState;
use crate::store::{career, PROFILE_ID};

/// GET /work
pub async fn handle_list_work(State(state): State<AppState>) -> Result<Json<Vec<Work>>, AppError> {
    Ok(Json(career::list_work(&state.db, PROFILE_ID).await?))
}

/// GET /education
pub async fn handle_list_education(
    State(state): State<AppState>,
) -> Result<Json<Vec<Education>>, AppError> {
    Ok(Json(career::list_education(&state.db, PROFILE_ID).await?))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::models::career::{NewEducation, NewWork};
    use crate::routes::test_support::{app, get};
    use crate::store::{career, fixtures, PROFILE_ID};

    #[tokio::test]
    async fn test_empty_collections() {
        let (app, _pool) = app().await;
        assert_eq!(get(&app, "/work").await, (StatusCode::OK, json!([])));
        assert_eq!(get(&app, "/education").await, (StatusCode::OK, json!([])));
    }

    #[tokio::test]
    async fn test_work_newest_first() {
        let (app, pool) = app().await;
        fixtures::with_profile(&pool).await;
        for (company, start) in [("Old Co", "2018-01"), ("New Co", "2024-05"), ("Mid Co", "2021-11")] {
            let work = NewWork {
                company: company.to_string(),
                position: "Engineer".to_string(),
                description: None,
                start_date: Some(start.to_string()),
                end_date: None,
                is_current: false,
            };
            career::insert_work(&pool, PROFILE_ID, &work).await.unwrap();
        }

        let (_, body) = get(&app, "/work").await;
        let companies: Vec<_> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|w| w["company"].as_str().unwrap())
            .collect();
        assert_eq!(companies, vec!["New Co", "Mid Co", "Old Co"]);
        assert_eq!(body[0]["is_current"], false);
    }

    #[tokio::test]
    async fn test_education_listing() {
        let (app, pool) = app().await;
        fixtures::with_profile(&pool).await;
        let education = NewEducation {
            school: "University of London".to_string(),
            degree: Some("BSc".to_string()),
            field: Some("Mathematics".to_string()),
            start_year: Some(2015),
            end_year: Some(2018),
        };
        career::insert_education(&pool, PROFILE_ID, &education)
            .await
            .unwrap();

        let (status, body) = get(&app, "/education").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["school"], "University of London");
        assert_eq!(body[0]["end_year"], 2018);
    }
}
