//! Joke journal records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum JokeCategory {
    #[default]
    General,
    Dad,
    Couple,
    Panda,
}

impl JokeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Dad => "dad",
            Self::Couple => "couple",
            Self::Panda => "panda",
        }
    }
}

/// Row in the `jokes` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Joke {
    pub id: String,
    pub user_id: String,
    pub content: String,
    #[serde(default)]
    pub category: JokeCategory,
    pub created_at: DateTime<Utc>,
}
