//! Pinned one-line messages between the two partners.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row in the `pin_messages` table. Sent by one partner, read by the
/// other; `is_read` flips once the receiver has seen it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PinMessage {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}
