//! Alarm and reminder queries.

use serde_json::json;

use crate::backend::{Backend, Order};
use crate::models::{new_id, now, Alarm, AlarmKind};
use crate::Result;

const TABLE: &str = "alarms";

pub async fn list_alarms(backend: &Backend, user_id: &str) -> Result<Vec<Alarm>> {
    backend
        .from(TABLE)
        .eq("user_id", user_id)
        .order("time", Order::Asc)
        .fetch()
        .await
}

pub async fn add_alarm(
    backend: &Backend,
    user_id: &str,
    title: &str,
    time: &str,
    days: &[String],
    message: Option<&str>,
    kind: AlarmKind,
) -> Result<Alarm> {
    backend
        .from(TABLE)
        .insert(&json!({
            "id": new_id(),
            "user_id": user_id,
            "title": title,
            "time": time,
            "days": days,
            "message": message,
            "kind": kind,
            "is_enabled": true,
            "created_at": now(),
        }))
        .await
}

/// Enable or disable one alarm.
pub async fn set_enabled(backend: &Backend, id: &str, is_enabled: bool) -> Result<()> {
    let _: Vec<Alarm> = backend
        .from(TABLE)
        .eq("id", id)
        .update(&json!({ "is_enabled": is_enabled }))
        .await?;
    Ok(())
}

pub async fn delete_alarm(backend: &Backend, id: &str) -> Result<()> {
    backend.from(TABLE).eq("id", id).delete().await
}
