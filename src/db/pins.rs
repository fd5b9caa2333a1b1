//! Pin message queries.

use serde_json::json;

use crate::backend::{Backend, Order};
use crate::models::{new_id, now, PinMessage};
use crate::Result;

const TABLE: &str = "pin_messages";

/// Send a pin from one partner to the other.
pub async fn send_pin(
    backend: &Backend,
    sender_id: &str,
    receiver_id: &str,
    message: &str,
) -> Result<PinMessage> {
    backend
        .from(TABLE)
        .insert(&json!({
            "id": new_id(),
            "sender_id": sender_id,
            "receiver_id": receiver_id,
            "message": message,
            "is_read": false,
            "created_at": now(),
        }))
        .await
}

/// Pins addressed to this identity, newest first.
pub async fn received_pins(backend: &Backend, user_id: &str) -> Result<Vec<PinMessage>> {
    backend
        .from(TABLE)
        .eq("receiver_id", user_id)
        .order("created_at", Order::Desc)
        .fetch()
        .await
}

/// Flip a pin's read flag.
pub async fn mark_pin_read(backend: &Backend, id: &str, is_read: bool) -> Result<()> {
    let _: Vec<PinMessage> = backend
        .from(TABLE)
        .eq("id", id)
        .update(&json!({ "is_read": is_read }))
        .await?;
    Ok(())
}

pub async fn delete_pin(backend: &Backend, id: &str) -> Result<()> {
    backend.from(TABLE).eq("id", id).delete().await
}
