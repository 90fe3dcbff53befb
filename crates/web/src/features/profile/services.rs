use chrono::{DateTime, Utc};
use codeforces::{ProblemStats, RatingPoint, RatingWindow, rating::filter_rating_window};
use storage::{error::Result, repository::student::StudentRepository};
use uuid::Uuid;

use crate::state::AppState;

/// Rating history for a student, filtered to the requested trailing window.
/// A failed Codeforces fetch degrades to an empty history; the student
/// lookup itself still fails with NotFound for an unknown id.
pub async fn rating_history(
    state: &AppState,
    id: Uuid,
    window: RatingWindow,
    now: DateTime<Utc>,
) -> Result<Vec<RatingPoint>> {
    let repo = StudentRepository::new(state.db.pool());
    let student = repo.find_by_id(id).await?;

    match state
        .codeforces
        .fetch_rating_history(&student.codeforces_handle)
        .await
    {
        Ok(changes) => Ok(filter_rating_window(&changes, window, now)),
        Err(e) => {
            tracing::warn!(
                handle = %student.codeforces_handle,
                error = %e,
                "Rating history unavailable, serving empty history"
            );
            Ok(Vec::new())
        }
    }
}

/// Problem-solving statistics for a student, recomputed from the full
/// submission list on every call. Degrades to all-zero stats when
/// Codeforces is unavailable.
pub async fn problem_stats(state: &AppState, id: Uuid, now: DateTime<Utc>) -> Result<ProblemStats> {
    let repo = StudentRepository::new(state.db.pool());
    let student = repo.find_by_id(id).await?;

    match state
        .codeforces
        .fetch_submissions(&student.codeforces_handle)
        .await
    {
        Ok(submissions) => Ok(ProblemStats::from_submissions(&submissions, now)),
        Err(e) => {
            tracing::warn!(
                handle = %student.codeforces_handle,
                error = %e,
                "Submission list unavailable, serving empty statistics"
            );
            Ok(ProblemStats::default())
        }
    }
}
