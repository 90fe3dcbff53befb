use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Problem, Submission};

/// Days of the trailing activity window `average_per_day` is computed over.
const ACTIVITY_WINDOW_DAYS: i64 = 30;

/// Fixed histogram buckets for solved-problem difficulty. Ranges are
/// disjoint; ratings below 800 fall outside every bucket.
const RATING_BUCKETS: [(&str, i64, i64); 4] = [
    ("800-1000", 800, 1000),
    ("1000-1500", 1001, 1500),
    ("1500-2000", 1501, 2000),
    ("2000+", 2001, i64::MAX),
];

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RatingBucket {
    pub name: String,
    pub count: u64,
}

/// Problem-solving summary derived from a handle's full submission list.
/// Deterministic over the same input and evaluation instant; nothing here
/// is cached or persisted.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProblemStats {
    pub total_solved: u64,
    pub average_per_day: f64,
    pub average_problem_rating: i64,
    pub most_difficult_problem: Option<Problem>,
    pub problems_by_rating: Vec<RatingBucket>,
    pub submissions_by_day: BTreeMap<NaiveDate, u64>,
}

impl Default for ProblemStats {
    fn default() -> Self {
        Self {
            total_solved: 0,
            average_per_day: 0.0,
            average_problem_rating: 0,
            most_difficult_problem: None,
            problems_by_rating: empty_buckets(),
            submissions_by_day: BTreeMap::new(),
        }
    }
}

impl ProblemStats {
    /// Single aggregation pass over a submission list.
    ///
    /// `now` anchors the 30-day activity window; passing it in keeps the
    /// derivation a pure function.
    pub fn from_submissions(submissions: &[Submission], now: DateTime<Utc>) -> Self {
        let solved = distinct_solved(submissions);
        let total_solved = solved.len() as u64;

        let cutoff = now - Duration::days(ACTIVITY_WINDOW_DAYS);
        let active_days: HashSet<NaiveDate> = submissions
            .iter()
            .filter_map(|s| DateTime::<Utc>::from_timestamp(s.creation_time_seconds, 0))
            .filter(|at| *at >= cutoff)
            .map(|at| at.date_naive())
            .collect();

        let average_per_day = if active_days.is_empty() {
            0.0
        } else {
            round_to_tenth(total_solved as f64 / active_days.len() as f64)
        };

        let ratings: Vec<i64> = solved.iter().filter_map(|p| p.rating).collect();
        let average_problem_rating = if ratings.is_empty() {
            0
        } else {
            (ratings.iter().sum::<i64>() as f64 / ratings.len() as f64).round() as i64
        };

        // Strict comparison over the insertion-ordered distinct set, so a
        // rating tie resolves to the problem seen first.
        let mut most_difficult_problem: Option<&Problem> = None;
        let mut highest_rating = 0;
        for problem in &solved {
            if let Some(rating) = problem.rating {
                if rating > highest_rating {
                    highest_rating = rating;
                    most_difficult_problem = Some(problem);
                }
            }
        }

        let mut problems_by_rating = empty_buckets();
        for rating in &ratings {
            let bucket = RATING_BUCKETS
                .iter()
                .position(|(_, min, max)| rating >= min && rating <= max);
            if let Some(i) = bucket {
                problems_by_rating[i].count += 1;
            }
        }

        let mut submissions_by_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();
        for submission in submissions {
            if let Some(at) = DateTime::<Utc>::from_timestamp(submission.creation_time_seconds, 0)
            {
                *submissions_by_day.entry(at.date_naive()).or_insert(0) += 1;
            }
        }

        Self {
            total_solved,
            average_per_day,
            average_problem_rating,
            most_difficult_problem: most_difficult_problem.cloned(),
            problems_by_rating,
            submissions_by_day,
        }
    }
}

/// Distinct accepted problems, first accepted submission wins, input order
/// preserved.
fn distinct_solved(submissions: &[Submission]) -> Vec<&Problem> {
    let mut seen = HashSet::new();
    let mut solved = Vec::new();

    for submission in submissions {
        if !submission.is_accepted() {
            continue;
        }
        let key = (
            submission.problem.contest_id,
            submission.problem.index.clone(),
        );
        if seen.insert(key) {
            solved.push(&submission.problem);
        }
    }

    solved
}

fn empty_buckets() -> Vec<RatingBucket> {
    RATING_BUCKETS
        .iter()
        .map(|(name, _, _)| RatingBucket {
            name: (*name).to_string(),
            count: 0,
        })
        .collect()
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
