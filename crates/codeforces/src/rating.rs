use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::RatingChange;

/// Trailing window a rating history can be filtered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum RatingWindow {
    #[default]
    #[serde(rename = "30")]
    Days30,
    #[serde(rename = "90")]
    Days90,
    #[serde(rename = "365")]
    Days365,
}

impl RatingWindow {
    pub fn days(self) -> i64 {
        match self {
            Self::Days30 => 30,
            Self::Days90 => 90,
            Self::Days365 => 365,
        }
    }
}

/// Display-ready point on the rating chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RatingPoint {
    /// Calendar date of the rating change, `YYYY-MM-DD`
    pub date: String,
    pub rating: i64,
    /// Millisecond timestamp, kept for client-side filtering
    pub timestamp: i64,
}

/// Converts rating changes into chart points, keeping only those inside the
/// trailing window ending at `now`. A point exactly at the cutoff is kept.
pub fn filter_rating_window(
    changes: &[RatingChange],
    window: RatingWindow,
    now: DateTime<Utc>,
) -> Vec<RatingPoint> {
    let cutoff = now - Duration::days(window.days());

    changes
        .iter()
        .filter_map(|change| {
            let at = DateTime::<Utc>::from_timestamp(change.rating_update_time_seconds, 0)?;
            if at < cutoff {
                return None;
            }
            Some(RatingPoint {
                date: at.format("%Y-%m-%d").to_string(),
                rating: change.new_rating,
                timestamp: change.rating_update_time_seconds * 1000,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn change(at: DateTime<Utc>, new_rating: i64) -> RatingChange {
        RatingChange {
            contest_id: 1,
            contest_name: "Round".into(),
            handle: "ada_l".into(),
            rank: 1,
            rating_update_time_seconds: at.timestamp(),
            old_rating: 0,
            new_rating,
        }
    }

    #[test]
    fn window_excludes_older_points() {
        let now = Utc.with_ymd_and_hms(2025, 8, 1, 12, 0, 0).unwrap();
        let changes = vec![
            change(now - Duration::days(45), 1200),
            change(now - Duration::days(10), 1300),
        ];

        let points = filter_rating_window(&changes, RatingWindow::Days30, now);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].rating, 1300);
    }

    #[test]
    fn boundary_point_at_cutoff_is_included() {
        let now = Utc.with_ymd_and_hms(2025, 8, 1, 12, 0, 0).unwrap();
        let changes = vec![change(now - Duration::days(30), 1250)];

        let points = filter_rating_window(&changes, RatingWindow::Days30, now);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].date, "2025-07-02");
    }

    #[test]
    fn wider_windows_keep_more_points() {
        let now = Utc.with_ymd_and_hms(2025, 8, 1, 12, 0, 0).unwrap();
        let changes = vec![
            change(now - Duration::days(300), 1100),
            change(now - Duration::days(60), 1200),
            change(now - Duration::days(5), 1350),
        ];

        assert_eq!(
            filter_rating_window(&changes, RatingWindow::Days30, now).len(),
            1
        );
        assert_eq!(
            filter_rating_window(&changes, RatingWindow::Days90, now).len(),
            2
        );
        assert_eq!(
            filter_rating_window(&changes, RatingWindow::Days365, now).len(),
            3
        );
    }

    #[test]
    fn timestamps_are_milliseconds() {
        let now = Utc.with_ymd_and_hms(2025, 8, 1, 0, 0, 0).unwrap();
        let changes = vec![change(now, 1500)];

        let points = filter_rating_window(&changes, RatingWindow::Days30, now);
        assert_eq!(points[0].timestamp, now.timestamp() * 1000);
    }

    #[test]
    fn window_deserializes_from_query_values() {
        assert_eq!(
            serde_json::from_str::<RatingWindow>("\"90\"").unwrap(),
            RatingWindow::Days90
        );
        assert!(serde_json::from_str::<RatingWindow>("\"7\"").is_err());
    }
}
