//! User profile rows, mirroring the auth identity metadata.

use serde_json::json;

use crate::backend::Backend;
use crate::models::{now, UserProfile};
use crate::Result;

const TABLE: &str = "user_profiles";

/// Create the profile row for a freshly registered identity.
pub async fn create_profile(
    backend: &Backend,
    user_id: &str,
    username: &str,
    is_partner: bool,
) -> Result<UserProfile> {
    backend
        .from(TABLE)
        .insert(&json!({
            "id": user_id,
            "username": username,
            "is_partner": is_partner,
            "created_at": now(),
        }))
        .await
}

/// Fetch one profile by identity id.
pub async fn get_profile(backend: &Backend, user_id: &str) -> Result<UserProfile> {
    backend.from(TABLE).eq("id", user_id).fetch_one().await
}
