//! Location sample queries. One row per identity, upserted in place.

use serde_json::json;

use crate::backend::Backend;
use crate::models::{new_id, now, LocationSample};
use crate::Result;

const TABLE: &str = "locations";

/// This identity's stored sample, if it has ever shared one.
pub async fn get_location(backend: &Backend, user_id: &str) -> Result<Option<LocationSample>> {
    backend
        .from(TABLE)
        .eq("user_id", user_id)
        .fetch_optional()
        .await
}

/// The partner's sample, only while they are sharing.
pub async fn partner_location(
    backend: &Backend,
    partner_id: &str,
) -> Result<Option<LocationSample>> {
    let sample = get_location(backend, partner_id).await?;
    Ok(sample.filter(|s| s.is_sharing))
}

/// Write this identity's current position, replacing any earlier row.
pub async fn upsert_location(
    backend: &Backend,
    user_id: &str,
    latitude: f64,
    longitude: f64,
    place_name: Option<&str>,
    is_sharing: bool,
) -> Result<LocationSample> {
    backend
        .from(TABLE)
        .upsert(
            "user_id",
            &json!({
                "id": new_id(),
                "user_id": user_id,
                "latitude": latitude,
                "longitude": longitude,
                "place_name": place_name,
                "is_sharing": is_sharing,
                "updated_at": now(),
            }),
        )
        .await
}

/// Flip the sharing flag without touching the coordinates.
pub async fn set_sharing(backend: &Backend, user_id: &str, is_sharing: bool) -> Result<()> {
    let _: Vec<LocationSample> = backend
        .from(TABLE)
        .eq("user_id", user_id)
        .update(&json!({ "is_sharing": is_sharing, "updated_at": now() }))
        .await?;
    Ok(())
}
