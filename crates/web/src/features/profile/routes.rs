use axum::{Router, routing::get};

use super::handlers::{get_problem_stats, get_rating_history};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/user/:id/rating", get(get_rating_history))
        .route("/user/:id/stats", get(get_problem_stats))
}
