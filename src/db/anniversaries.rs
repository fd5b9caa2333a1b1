//! Anniversary queries.

use chrono::NaiveDate;
use serde_json::json;

use crate::backend::{Backend, Order};
use crate::models::{new_id, now, Anniversary, AnniversaryKind};
use crate::Result;

const TABLE: &str = "anniversaries";

/// List an identity's anniversaries, earliest date first.
pub async fn list_anniversaries(backend: &Backend, user_id: &str) -> Result<Vec<Anniversary>> {
    backend
        .from(TABLE)
        .eq("user_id", user_id)
        .order("date", Order::Asc)
        .fetch()
        .await
}

pub async fn add_anniversary(
    backend: &Backend,
    user_id: &str,
    title: &str,
    date: NaiveDate,
    kind: AnniversaryKind,
    note: Option<&str>,
) -> Result<Anniversary> {
    backend
        .from(TABLE)
        .insert(&json!({
            "id": new_id(),
            "user_id": user_id,
            "title": title,
            "date": date,
            "kind": kind,
            "note": note,
            "created_at": now(),
        }))
        .await
}

pub async fn delete_anniversary(backend: &Backend, id: &str) -> Result<()> {
    backend.from(TABLE).eq("id", id).delete().await
}
