use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{CodeforcesError, Result};

/// Verdict string the judge uses for an accepted submission.
pub const VERDICT_ACCEPTED: &str = "OK";

/// Envelope every Codeforces API method wraps its payload in.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub status: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub result: Option<T>,
}

impl<T> ApiEnvelope<T> {
    pub fn into_result(self) -> Result<T> {
        if self.status == "OK" {
            if let Some(result) = self.result {
                return Ok(result);
            }
        }
        Err(CodeforcesError::Api(
            self.comment
                .unwrap_or_else(|| format!("status {}", self.status)),
        ))
    }
}

/// A problem as it appears inside a submission. `contest_id` is absent for
/// problems from archived or unofficial sources, and `rating` for problems
/// Codeforces has not calibrated yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    #[serde(default)]
    pub contest_id: Option<i64>,
    pub index: String,
    pub name: String,
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Problem {
    /// Identity used for deduplication: contest id plus index.
    pub fn key(&self) -> (Option<i64>, &str) {
        (self.contest_id, self.index.as_str())
    }
}

/// One entry of `user.status`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: i64,
    pub creation_time_seconds: i64,
    pub problem: Problem,
    #[serde(default)]
    pub verdict: Option<String>,
}

impl Submission {
    pub fn is_accepted(&self) -> bool {
        self.verdict.as_deref() == Some(VERDICT_ACCEPTED)
    }
}

/// One entry of `user.rating`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingChange {
    pub contest_id: i64,
    pub contest_name: String,
    pub handle: String,
    pub rank: i64,
    pub rating_update_time_seconds: i64,
    pub old_rating: i64,
    pub new_rating: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_envelope_unwraps_result() {
        let envelope: ApiEnvelope<Vec<i64>> =
            serde_json::from_str(r#"{"status":"OK","result":[1,2,3]}"#).unwrap();
        assert_eq!(envelope.into_result().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn failed_envelope_carries_comment() {
        let envelope: ApiEnvelope<Vec<i64>> = serde_json::from_str(
            r#"{"status":"FAILED","comment":"handle: User with handle x not found"}"#,
        )
        .unwrap();
        match envelope.into_result() {
            Err(CodeforcesError::Api(comment)) => {
                assert!(comment.contains("not found"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn submission_parses_with_unknown_fields_and_missing_verdict() {
        let submission: Submission = serde_json::from_str(
            r#"{
                "id": 42,
                "contestId": 1700,
                "creationTimeSeconds": 1700000000,
                "relativeTimeSeconds": 600,
                "programmingLanguage": "Rust",
                "problem": {
                    "contestId": 1700,
                    "index": "A",
                    "name": "Two Towers",
                    "type": "PROGRAMMING",
                    "rating": 900,
                    "tags": ["implementation"]
                }
            }"#,
        )
        .unwrap();

        assert_eq!(submission.problem.key(), (Some(1700), "A"));
        assert_eq!(submission.problem.rating, Some(900));
        assert!(!submission.is_accepted());
    }

    #[test]
    fn rating_change_parses() {
        let change: RatingChange = serde_json::from_str(
            r#"{
                "contestId": 1,
                "contestName": "Round #1",
                "handle": "ada_l",
                "rank": 10,
                "ratingUpdateTimeSeconds": 1700000000,
                "oldRating": 1400,
                "newRating": 1450
            }"#,
        )
        .unwrap();

        assert_eq!(change.new_rating, 1450);
        assert_eq!(change.rating_update_time_seconds, 1_700_000_000);
    }
}
