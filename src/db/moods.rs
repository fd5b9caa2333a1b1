//! Mood entry queries.

use chrono::NaiveDate;
use serde_json::json;

use crate::backend::{Backend, Order};
use crate::models::{new_id, now, Mood, MoodEntry};
use crate::Result;

const TABLE: &str = "moods";

/// Mood history, newest day first.
pub async fn list_moods(backend: &Backend, user_id: &str) -> Result<Vec<MoodEntry>> {
    backend
        .from(TABLE)
        .eq("user_id", user_id)
        .order("recorded_on", Order::Desc)
        .fetch()
        .await
}

/// The entry recorded for a given day, if any.
pub async fn mood_on(
    backend: &Backend,
    user_id: &str,
    day: NaiveDate,
) -> Result<Option<MoodEntry>> {
    backend
        .from(TABLE)
        .eq("user_id", user_id)
        .eq("recorded_on", day)
        .fetch_optional()
        .await
}

/// Record today's mood. A second call on the same day replaces the
/// earlier entry via a read-check then update.
pub async fn record_mood(
    backend: &Backend,
    user_id: &str,
    day: NaiveDate,
    mood: Mood,
    note: Option<&str>,
) -> Result<MoodEntry> {
    if let Some(existing) = mood_on(backend, user_id, day).await? {
        let updated: Vec<MoodEntry> = backend
            .from(TABLE)
            .eq("id", &existing.id)
            .update(&json!({ "mood": mood, "note": note }))
            .await?;
        return updated
            .into_iter()
            .next()
            .ok_or_else(|| crate::Error::NotFound("mood entry".into()));
    }

    backend
        .from(TABLE)
        .insert(&json!({
            "id": new_id(),
            "user_id": user_id,
            "mood": mood,
            "note": note,
            "recorded_on": day,
            "created_at": now(),
        }))
        .await
}

pub async fn delete_mood(backend: &Backend, id: &str) -> Result<()> {
    backend.from(TABLE).eq("id", id).delete().await
}
