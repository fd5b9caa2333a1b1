//! Cycle record queries.

use chrono::NaiveDate;
use serde_json::json;

use crate::backend::{Backend, Order};
use crate::models::{new_id, now, CycleRecord};
use crate::Result;

const TABLE: &str = "cycle_records";

/// All recorded period starts, newest first.
pub async fn list_cycle_records(backend: &Backend, user_id: &str) -> Result<Vec<CycleRecord>> {
    backend
        .from(TABLE)
        .eq("user_id", user_id)
        .order("start_date", Order::Desc)
        .fetch()
        .await
}

/// Record a period start together with the expected cycle length.
pub async fn add_cycle_record(
    backend: &Backend,
    user_id: &str,
    start_date: NaiveDate,
    cycle_length: i64,
    note: Option<&str>,
) -> Result<CycleRecord> {
    backend
        .from(TABLE)
        .insert(&json!({
            "id": new_id(),
            "user_id": user_id,
            "start_date": start_date,
            "cycle_length": cycle_length,
            "note": note,
            "created_at": now(),
        }))
        .await
}

pub async fn delete_cycle_record(backend: &Backend, id: &str) -> Result<()> {
    backend.from(TABLE).eq("id", id).delete().await
}
