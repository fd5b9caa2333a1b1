//! Data models for Tandem.
//!
//! One flat record type per feature table, plus the derived values the
//! screens compute at render time (cycle prediction, distances, day
//! counts). Records are owned by exactly one identity and carry no
//! referential integrity beyond the foreign ids they store.

mod alarm;
mod anniversary;
mod board;
mod budget;
mod cycle;
mod date_idea;
mod gallery;
mod joke;
mod location;
mod mood;
mod pin;
mod user;
mod wishlist;

pub use alarm::*;
pub use anniversary::*;
pub use board::*;
pub use budget::*;
pub use cycle::*;
pub use date_idea::*;
pub use gallery::*;
pub use joke::*;
pub use location::*;
pub use mood::*;
pub use pin::*;
pub use user::*;
pub use wishlist::*;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Generate a new record id.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current UTC timestamp.
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Coarse relative timestamp for list rows ("3h ago").
pub fn time_ago(moment: DateTime<Utc>, reference: DateTime<Utc>) -> String {
    let minutes = (reference - moment).num_minutes();
    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if minutes < 1440 {
        format!("{}h ago", minutes / 60)
    } else {
        format!("{}d ago", minutes / 1440)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_time_ago_buckets() {
        let now = Utc::now();
        assert_eq!(time_ago(now, now), "just now");
        assert_eq!(time_ago(now - Duration::minutes(5), now), "5m ago");
        assert_eq!(time_ago(now - Duration::hours(3), now), "3h ago");
        assert_eq!(time_ago(now - Duration::days(2), now), "2d ago");
    }
}
