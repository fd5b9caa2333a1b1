//! Date idea collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DateIdeaCategory {
    Outdoor,
    Indoor,
    Food,
    Creative,
    #[default]
    Romantic,
}

impl DateIdeaCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Outdoor => "outdoor",
            Self::Indoor => "indoor",
            Self::Food => "food",
            Self::Creative => "creative",
            Self::Romantic => "romantic",
        }
    }
}

/// Row in the `date_ideas` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateIdea {
    pub id: String,
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub category: DateIdeaCategory,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub is_done: bool,
    pub created_at: DateTime<Utc>,
}
