//! Shared alarms and reminders.
//!
//! The core stores the schedule; the shell owns actual notification
//! delivery through platform APIs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AlarmKind {
    Morning,
    Noon,
    Night,
    #[default]
    Reminder,
}

/// Row in the `alarms` table. `time` is a wall-clock `HH:MM` string and
/// `days` holds lowercase weekday names; both are opaque to the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alarm {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub time: String,
    #[serde(default)]
    pub days: Vec<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub kind: AlarmKind,
    #[serde(default)]
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
}
