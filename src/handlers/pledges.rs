use axum::{extract::State, response::Json};
use serde_json::json;

use crate::{
    errors::{AppError, Result},
    models::pledge::{CreatePledge, Pledge, SupportPledge},
    state::AppState,
};

// Get all pledges (investor browse view)
pub async fn get_pledges(State(state): State<AppState>) -> Result<Json<Vec<Pledge>>> {
    let pledges = state.pledges.lock().await;

    tracing::info!("🔍 Fetched {} pledges", pledges.len());
    Ok(Json(pledges.clone()))
}

// Create a new pledge (student support-request form)
pub async fn create_pledge(
    State(state): State<AppState>,
    Json(payload): Json<CreatePledge>,
) -> Result<Json<Pledge>> {
    if payload.name.is_empty() || payload.skill.is_empty() || payload.amount.is_empty() {
        return Err(AppError::InvalidPledgeData);
    }

    let pledge = Pledge::new(payload);

    let mut pledges = state.pledges.lock().await;
    pledges.push(pledge.clone());
    state.store.save(&pledges)?;

    tracing::info!("✅ Pledge submitted for {} ({})", pledge.name, pledge.skill);
    Ok(Json(pledge))
}

// Support a pledge: validates the offered amount against the pledge's
// requested minimum. No payment processing happens here; nothing persists.
pub async fn support_pledge(
    State(state): State<AppState>,
    Json(payload): Json<SupportPledge>,
) -> Result<Json<serde_json::Value>> {
    let pledges = state.pledges.lock().await;
    let pledge = pledges
        .iter()
        .find(|p| p.name == payload.pledge_name)
        .ok_or(AppError::PledgeNotFound)?;

    let min_amount = parse_amount(&pledge.amount)?;
    if payload.amount < min_amount {
        return Err(AppError::invalid_data(format!(
            "pledge amount must be at least ${}",
            min_amount
        )));
    }

    tracing::info!(
        "💵 {} supported {} with ${}",
        payload.investor_name,
        pledge.name,
        payload.amount
    );

    Ok(Json(json!({
        "success": true,
        "message": format!(
            "Thank you {} for supporting {} with ${}!",
            payload.investor_name, pledge.name, payload.amount
        ),
    })))
}

// Per-pledge rating histogram (student reviews view)
pub async fn get_pledge_stats(State(state): State<AppState>) -> Result<Json<serde_json::Value>> {
    let pledges = state.pledges.lock().await;

    let stats: Vec<serde_json::Value> = pledges
        .iter()
        .filter(|p| !p.reviews.is_empty())
        .map(|p| {
            let mut counts = [0u32; 5];
            for review in &p.reviews {
                if (1..=5).contains(&review.rating) {
                    counts[review.rating as usize - 1] += 1;
                }
            }
            let total: u32 = counts.iter().sum();
            let weighted: u32 = counts
                .iter()
                .enumerate()
                .map(|(i, c)| (i as u32 + 1) * c)
                .sum();
            // A hand-edited file can hold only out-of-range ratings; avoid a
            // NaN average, which json! would flatten to null.
            let average_rating = if total == 0 {
                0.0
            } else {
                weighted as f64 / total as f64
            };

            json!({
                "name": p.name,
                "skill": p.skill,
                "rating_counts": {
                    "1": counts[0],
                    "2": counts[1],
                    "3": counts[2],
                    "4": counts[3],
                    "5": counts[4],
                },
                "average_rating": average_rating,
                "total_reviews": total,
            })
        })
        .collect();

    Ok(Json(json!({ "pledges": stats })))
}

/// Parses a currency display string like `"$50"` into its integer value.
/// Malformed input is a validation error at this boundary, not a store error.
pub fn parse_amount(raw: &str) -> Result<i64> {
    let value = raw.trim().trim_start_matches('$').trim().parse()?;
    Ok(value)
}
