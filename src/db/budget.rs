//! Shared spending queries.

use chrono::NaiveDate;
use serde_json::json;

use crate::backend::{Backend, Order};
use crate::models::{new_id, now, SpendCategory, Transaction};
use crate::Result;

const TABLE: &str = "transactions";

/// All transactions for this identity's ledger, newest spend first.
pub async fn list_transactions(backend: &Backend, user_id: &str) -> Result<Vec<Transaction>> {
    backend
        .from(TABLE)
        .eq("user_id", user_id)
        .order("spent_on", Order::Desc)
        .fetch()
        .await
}

#[allow(clippy::too_many_arguments)]
pub async fn add_transaction(
    backend: &Backend,
    user_id: &str,
    title: &str,
    amount_cents: i64,
    category: SpendCategory,
    spent_on: NaiveDate,
    paid_by: &str,
    is_shared: bool,
) -> Result<Transaction> {
    backend
        .from(TABLE)
        .insert(&json!({
            "id": new_id(),
            "user_id": user_id,
            "title": title,
            "amount_cents": amount_cents,
            "category": category,
            "spent_on": spent_on,
            "paid_by": paid_by,
            "is_shared": is_shared,
            "created_at": now(),
        }))
        .await
}

pub async fn delete_transaction(backend: &Backend, id: &str) -> Result<()> {
    backend.from(TABLE).eq("id", id).delete().await
}
