//! Cycle tracking records and prediction.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Row in the `cycle_records` table. One row per recorded period start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleRecord {
    pub id: String,
    pub user_id: String,
    pub start_date: NaiveDate,
    /// Expected cycle length in days at the time of recording.
    pub cycle_length: i64,
    #[serde(default)]
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CycleRecord {
    /// Predicted next period start: start date plus cycle length days.
    pub fn next_period_date(&self) -> NaiveDate {
        self.start_date + chrono::Duration::days(self.cycle_length)
    }

    /// Whole days remaining until the predicted start, rounded up.
    /// Negative once the prediction has passed.
    pub fn days_until_next(&self, now: DateTime<Utc>) -> i64 {
        let next = self
            .next_period_date()
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc())
            .unwrap_or(now);
        let seconds = (next - now).num_seconds();
        seconds.div_euclid(86_400) + i64::from(seconds.rem_euclid(86_400) > 0)
    }
}

/// Day-of-cycle for display, 1-based from the recorded start.
pub fn cycle_day(record: &CycleRecord, today: NaiveDate) -> i64 {
    (today - record.start_date).num_days() + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(start: &str, length: i64) -> CycleRecord {
        CycleRecord {
            id: "c-1".into(),
            user_id: "u-1".into(),
            start_date: start.parse().unwrap(),
            cycle_length: length,
            note: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_next_period_is_start_plus_length() {
        let r = record("2026-01-01", 28);
        assert_eq!(r.next_period_date(), "2026-01-29".parse().unwrap());
    }

    #[test]
    fn test_days_until_counts_whole_days() {
        let r = record("2026-01-01", 28);
        let now = Utc.with_ymd_and_hms(2026, 1, 20, 0, 0, 0).unwrap();
        assert_eq!(r.days_until_next(now), 9);
    }

    #[test]
    fn test_days_until_rounds_partial_days_up() {
        let r = record("2026-01-01", 28);
        let now = Utc.with_ymd_and_hms(2026, 1, 19, 23, 0, 0).unwrap();
        assert_eq!(r.days_until_next(now), 10);
    }

    #[test]
    fn test_days_until_negative_after_prediction() {
        let r = record("2026-01-01", 28);
        let now = Utc.with_ymd_and_hms(2026, 2, 10, 12, 0, 0).unwrap();
        assert!(r.days_until_next(now) < 0);
    }

    #[test]
    fn test_cycle_day_is_one_based() {
        let r = record("2026-01-01", 28);
        assert_eq!(cycle_day(&r, "2026-01-01".parse().unwrap()), 1);
        assert_eq!(cycle_day(&r, "2026-01-08".parse().unwrap()), 8);
    }
}
