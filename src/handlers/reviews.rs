use axum::{extract::State, response::Json};
use serde_json::json;

use crate::{
    errors::{AppError, Result},
    models::pledge::{CreateReview, Review},
    state::AppState,
};

// Submit an investor review for a pledge. Appends to the pledge's review
// history and flushes the whole collection before responding.
pub async fn create_review(
    State(state): State<AppState>,
    Json(payload): Json<CreateReview>,
) -> Result<Json<serde_json::Value>> {
    if !(1..=5).contains(&payload.rating) {
        return Err(AppError::invalid_data("rating must be between 1 and 5"));
    }

    let mut pledges = state.pledges.lock().await;
    let pledge = pledges
        .iter_mut()
        .find(|p| p.name == payload.pledge_name)
        .ok_or(AppError::PledgeNotFound)?;

    pledge.reviews.push(Review {
        rating: payload.rating,
        review: payload.review,
    });
    let name = pledge.name.clone();
    let count = pledge.reviews.len();

    state.store.save(&pledges)?;

    tracing::info!("📝 Review submitted for {} ({} total)", name, count);
    Ok(Json(json!({
        "success": true,
        "message": format!("Review submitted for {}!", name),
        "total_reviews": count,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::State;
    use tempfile::{tempdir, TempDir};

    use crate::models::pledge::Pledge;
    use crate::store::pledge_store::PledgeStore;

    fn state_with_pledge(dir: &TempDir, name: &str) -> AppState {
        let pledge = Pledge {
            name: name.to_string(),
            skill: "Rust".to_string(),
            amount: "$50".to_string(),
            reward: "Weekly progress calls".to_string(),
            reviews: Vec::new(),
            updates: Vec::new(),
        };
        AppState::new(
            PledgeStore::new(dir.path().join("pledges.csv")),
            vec![pledge],
        )
    }

    fn review_payload(pledge_name: &str, rating: u8) -> CreateReview {
        CreateReview {
            pledge_name: pledge_name.to_string(),
            rating,
            review: "solid progress".to_string(),
        }
    }

    #[tokio::test]
    async fn rejects_out_of_range_ratings() {
        let dir = tempdir().unwrap();
        for rating in [0, 6] {
            let state = state_with_pledge(&dir, "alice");
            let err = create_review(State(state.clone()), Json(review_payload("alice", rating)))
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::ValidationError(_)));
            // Rejected reviews never reach the collection.
            assert!(state.pledges.lock().await[0].reviews.is_empty());
        }
    }

    #[tokio::test]
    async fn unknown_pledge_name_is_not_found() {
        let dir = tempdir().unwrap();
        let state = state_with_pledge(&dir, "alice");

        let err = create_review(State(state), Json(review_payload("nobody", 4)))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::PledgeNotFound));
    }

    #[tokio::test]
    async fn valid_review_is_appended_and_flushed() {
        let dir = tempdir().unwrap();
        let state = state_with_pledge(&dir, "alice");

        create_review(State(state.clone()), Json(review_payload("alice", 5)))
            .await
            .unwrap();

        let saved = state.store.load().unwrap();
        assert_eq!(
            saved[0].reviews,
            vec![Review {
                rating: 5,
                review: "solid progress".to_string(),
            }]
        );
    }
}
