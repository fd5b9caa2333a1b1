//! Daily mood entries.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Love,
    Excited,
    Calm,
    Sad,
    Angry,
    Tired,
    Surprised,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Love => "love",
            Self::Excited => "excited",
            Self::Calm => "calm",
            Self::Sad => "sad",
            Self::Angry => "angry",
            Self::Tired => "tired",
            Self::Surprised => "surprised",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Happy => "😊",
            Self::Love => "🥰",
            Self::Excited => "🤩",
            Self::Calm => "😌",
            Self::Sad => "😔",
            Self::Angry => "😤",
            Self::Tired => "😴",
            Self::Surprised => "😲",
        }
    }
}

/// Row in the `moods` table; at most one per identity per day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: String,
    pub user_id: String,
    pub mood: Mood,
    #[serde(default)]
    pub note: Option<String>,
    pub recorded_on: NaiveDate,
    pub created_at: DateTime<Utc>,
}
