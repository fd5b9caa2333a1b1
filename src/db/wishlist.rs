//! Wishlist queries.

use serde_json::json;

use crate::backend::{Backend, Order};
use crate::models::{new_id, now, Priority, WishlistItem};
use crate::Result;

const TABLE: &str = "wishlist_items";

pub async fn list_wishlist(backend: &Backend, user_id: &str) -> Result<Vec<WishlistItem>> {
    backend
        .from(TABLE)
        .eq("user_id", user_id)
        .order("created_at", Order::Desc)
        .fetch()
        .await
}

pub async fn add_wish(
    backend: &Backend,
    user_id: &str,
    title: &str,
    note: Option<&str>,
    priority: Priority,
) -> Result<WishlistItem> {
    backend
        .from(TABLE)
        .insert(&json!({
            "id": new_id(),
            "user_id": user_id,
            "title": title,
            "note": note,
            "priority": priority,
            "is_fulfilled": false,
            "created_at": now(),
        }))
        .await
}

/// Set the fulfilled flag on one item.
pub async fn set_fulfilled(backend: &Backend, id: &str, is_fulfilled: bool) -> Result<()> {
    let _: Vec<WishlistItem> = backend
        .from(TABLE)
        .eq("id", id)
        .update(&json!({ "is_fulfilled": is_fulfilled }))
        .await?;
    Ok(())
}

pub async fn delete_wish(backend: &Backend, id: &str) -> Result<()> {
    backend.from(TABLE).eq("id", id).delete().await
}
