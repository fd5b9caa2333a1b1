//! Message board posts and reactions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PostKind {
    #[default]
    Reminder,
    LoveNote,
    Question,
    Announcement,
}

impl PostKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reminder => "reminder",
            Self::LoveNote => "love_note",
            Self::Question => "question",
            Self::Announcement => "announcement",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Dislike,
}

impl ReactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }
}

/// Row in the `board_posts` table. Reaction counts are never stored on
/// the post; they are counted from `post_reactions` on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardPost {
    pub id: String,
    pub user_id: String,
    pub message: String,
    #[serde(default)]
    pub kind: PostKind,
    #[serde(default)]
    pub is_urgent: bool,
    pub created_at: DateTime<Utc>,
}

/// Row in the `post_reactions` table; references a post id. One per
/// identity per post, maintained by delete-then-insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostReaction {
    pub id: String,
    pub user_id: String,
    pub post_id: String,
    pub reaction: ReactionKind,
    pub created_at: DateTime<Utc>,
}

/// A post joined with its reaction counts, assembled on read.
#[derive(Debug, Clone)]
pub struct PostWithCounts {
    pub post: BoardPost,
    pub likes: u64,
    pub dislikes: u64,
}
