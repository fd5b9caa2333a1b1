//! Joke journal queries.

use serde_json::json;

use crate::backend::{Backend, Order};
use crate::models::{new_id, now, Joke, JokeCategory};
use crate::Result;

const TABLE: &str = "jokes";

/// List an identity's jokes, newest first.
pub async fn list_jokes(backend: &Backend, user_id: &str) -> Result<Vec<Joke>> {
    backend
        .from(TABLE)
        .eq("user_id", user_id)
        .order("created_at", Order::Desc)
        .fetch()
        .await
}

/// Add a joke and return it as stored.
pub async fn add_joke(
    backend: &Backend,
    user_id: &str,
    content: &str,
    category: JokeCategory,
) -> Result<Joke> {
    backend
        .from(TABLE)
        .insert(&json!({
            "id": new_id(),
            "user_id": user_id,
            "content": content,
            "category": category,
            "created_at": now(),
        }))
        .await
}

pub async fn delete_joke(backend: &Backend, id: &str) -> Result<()> {
    backend.from(TABLE).eq("id", id).delete().await
}
