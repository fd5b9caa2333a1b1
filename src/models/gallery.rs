//! Shared photo gallery: photos, comments, likes.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Album {
    #[default]
    Daily,
    Date,
    Travel,
}

impl Album {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Date => "date",
            Self::Travel => "travel",
        }
    }
}

/// Row in the `photos` table. `image_ref` points at the stored image;
/// capture and upload belong to the shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    pub user_id: String,
    pub image_ref: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub album: Album,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub taken_on: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Row in the `photo_comments` table; references a photo id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoComment {
    pub id: String,
    pub user_id: String,
    pub photo_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Row in the `photo_likes` table; one per identity per photo by
/// intent, though nothing backend-side enforces it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoLike {
    pub id: String,
    pub user_id: String,
    pub photo_id: String,
    pub created_at: DateTime<Utc>,
}

/// A photo joined with its interaction counts, assembled on read.
#[derive(Debug, Clone)]
pub struct PhotoWithCounts {
    pub photo: Photo,
    pub like_count: u64,
    pub liked_by_me: bool,
}
