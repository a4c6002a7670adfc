use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::pledges::{create_pledge, get_pledge_stats, get_pledges, support_pledge};
use crate::handlers::reviews::create_review;
use crate::handlers::updates::create_update;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        // GET /api/pledges - Browse all pledges
        // POST /api/pledges - Submit a new skill pledge
        .route("/", get(get_pledges).post(create_pledge))
        // POST /api/pledges/support - Pledge an amount toward a student
        .route("/support", post(support_pledge))
        // GET /api/pledges/stats - Rating histograms per pledge
        .route("/stats", get(get_pledge_stats))
        // POST /api/pledges/reviews - Leave a review for a pledge
        .route("/reviews", post(create_review))
        // POST /api/pledges/updates - Post a progress update (multipart)
        .route("/updates", post(create_update))
}
