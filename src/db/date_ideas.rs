//! Date idea queries.

use serde_json::json;

use crate::backend::{Backend, Order};
use crate::models::{new_id, now, DateIdea, DateIdeaCategory};
use crate::Result;

const TABLE: &str = "date_ideas";

pub async fn list_date_ideas(backend: &Backend, user_id: &str) -> Result<Vec<DateIdea>> {
    backend
        .from(TABLE)
        .eq("user_id", user_id)
        .order("created_at", Order::Desc)
        .fetch()
        .await
}

pub async fn add_date_idea(
    backend: &Backend,
    user_id: &str,
    title: &str,
    note: Option<&str>,
    category: DateIdeaCategory,
) -> Result<DateIdea> {
    backend
        .from(TABLE)
        .insert(&json!({
            "id": new_id(),
            "user_id": user_id,
            "title": title,
            "note": note,
            "category": category,
            "is_favorite": false,
            "is_done": false,
            "created_at": now(),
        }))
        .await
}

pub async fn set_favorite(backend: &Backend, id: &str, is_favorite: bool) -> Result<()> {
    let _: Vec<DateIdea> = backend
        .from(TABLE)
        .eq("id", id)
        .update(&json!({ "is_favorite": is_favorite }))
        .await?;
    Ok(())
}

pub async fn set_done(backend: &Backend, id: &str, is_done: bool) -> Result<()> {
    let _: Vec<DateIdea> = backend
        .from(TABLE)
        .eq("id", id)
        .update(&json!({ "is_done": is_done }))
        .await?;
    Ok(())
}

pub async fn delete_date_idea(backend: &Backend, id: &str) -> Result<()> {
    backend.from(TABLE).eq("id", id).delete().await
}
