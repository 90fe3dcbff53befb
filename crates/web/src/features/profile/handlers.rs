use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use codeforces::{ProblemStats, RatingPoint, RatingWindow};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use super::services;
use crate::error::WebError;
use crate::state::AppState;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RatingHistoryQuery {
    /// Trailing window in days: 30, 90 or 365
    #[serde(default)]
    pub window: RatingWindow,
}

#[utoipa::path(
    get,
    path = "/api/v1/user/{id}/rating",
    params(
        ("id" = Uuid, Path, description = "Student id"),
        RatingHistoryQuery
    ),
    responses(
        (status = 200, description = "Rating history within the window", body = Vec<RatingPoint>),
        (status = 404, description = "Student not found")
    ),
    tag = "profile"
)]
pub async fn get_rating_history(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<RatingHistoryQuery>,
) -> Result<Response, WebError> {
    let points =
        services::rating_history(&state, id, query.window, Utc::now()).await?;

    Ok(Json(points).into_response())
}

#[utoipa::path(
    get,
    path = "/api/v1/user/{id}/stats",
    params(
        ("id" = Uuid, Path, description = "Student id")
    ),
    responses(
        (status = 200, description = "Problem-solving statistics", body = ProblemStats),
        (status = 404, description = "Student not found")
    ),
    tag = "profile"
)]
pub async fn get_problem_stats(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let stats = services::problem_stats(&state, id, Utc::now()).await?;

    Ok(Json(stats).into_response())
}
