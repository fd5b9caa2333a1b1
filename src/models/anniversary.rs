//! Anniversaries and day counting.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnniversaryKind {
    #[default]
    Love,
    Date,
    Birthday,
    Custom,
}

/// Row in the `anniversaries` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Anniversary {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub kind: AnniversaryKind,
    #[serde(default)]
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Anniversary {
    /// Whole days elapsed since the anniversary date.
    pub fn days_since(&self, today: NaiveDate) -> i64 {
        (today - self.date).num_days()
    }

    /// Days until the next yearly occurrence. Zero on the day itself.
    pub fn days_until_next(&self, today: NaiveDate) -> i64 {
        (self.next_occurrence(today) - today).num_days()
    }

    /// The anniversary's date this year, or next year if it has already
    /// passed. Feb 29 falls on Mar 1 in common years.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let this_year = with_year(self.date, today.year());
        if this_year >= today {
            this_year
        } else {
            with_year(self.date, today.year() + 1)
        }
    }
}

fn with_year(date: NaiveDate, year: i32) -> NaiveDate {
    date.with_year(year).unwrap_or_else(|| {
        // Only Feb 29 lacks a counterpart
        NaiveDate::from_ymd_opt(year, 3, 1).unwrap_or(date)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anniversary(date: &str) -> Anniversary {
        Anniversary {
            id: "a-1".into(),
            user_id: "u-1".into(),
            title: "first date".into(),
            date: date.parse().unwrap(),
            kind: AnniversaryKind::Date,
            note: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_days_since() {
        let a = anniversary("2024-01-01");
        assert_eq!(a.days_since("2024-01-31".parse().unwrap()), 30);
    }

    #[test]
    fn test_next_occurrence_same_year() {
        let a = anniversary("2024-06-15");
        let today = "2026-03-01".parse().unwrap();
        assert_eq!(a.next_occurrence(today), "2026-06-15".parse().unwrap());
    }

    #[test]
    fn test_next_occurrence_rolls_to_next_year() {
        let a = anniversary("2024-06-15");
        let today = "2026-07-01".parse().unwrap();
        assert_eq!(a.next_occurrence(today), "2027-06-15".parse().unwrap());
    }

    #[test]
    fn test_on_the_day_counts_zero() {
        let a = anniversary("2024-06-15");
        let today = "2026-06-15".parse().unwrap();
        assert_eq!(a.days_until_next(today), 0);
    }

    #[test]
    fn test_leap_day_falls_on_march_first() {
        let a = anniversary("2024-02-29");
        let today = "2026-01-10".parse().unwrap();
        assert_eq!(a.next_occurrence(today), "2026-03-01".parse().unwrap());
    }
}
