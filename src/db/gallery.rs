//! Gallery queries: photos, comments, likes.
//!
//! Like toggling is a read-check followed by an insert or delete. Two
//! simultaneous toggles from the same identity can both observe "no
//! existing like" and both insert, breaking the one-like-per-identity
//! intent; the backend does not enforce it. Known defect, kept.

use chrono::NaiveDate;
use serde_json::json;

use crate::backend::{Backend, Order};
use crate::models::{new_id, now, Album, Photo, PhotoComment, PhotoLike};
use crate::Result;

const PHOTOS: &str = "photos";
const COMMENTS: &str = "photo_comments";
const LIKES: &str = "photo_likes";

/// All photos in the shared gallery, newest first.
pub async fn list_photos(backend: &Backend, user_id: &str) -> Result<Vec<Photo>> {
    backend
        .from(PHOTOS)
        .eq("user_id", user_id)
        .order("created_at", Order::Desc)
        .fetch()
        .await
}

pub async fn add_photo(
    backend: &Backend,
    user_id: &str,
    image_ref: &str,
    caption: Option<&str>,
    album: Album,
    taken_on: Option<NaiveDate>,
) -> Result<Photo> {
    backend
        .from(PHOTOS)
        .insert(&json!({
            "id": new_id(),
            "user_id": user_id,
            "image_ref": image_ref,
            "caption": caption,
            "album": album,
            "is_favorite": false,
            "taken_on": taken_on,
            "created_at": now(),
        }))
        .await
}

pub async fn set_photo_favorite(backend: &Backend, id: &str, is_favorite: bool) -> Result<()> {
    let _: Vec<Photo> = backend
        .from(PHOTOS)
        .eq("id", id)
        .update(&json!({ "is_favorite": is_favorite }))
        .await?;
    Ok(())
}

pub async fn delete_photo(backend: &Backend, id: &str) -> Result<()> {
    backend.from(PHOTOS).eq("id", id).delete().await
}

/// Comments under one photo, oldest first.
pub async fn list_comments(backend: &Backend, photo_id: &str) -> Result<Vec<PhotoComment>> {
    backend
        .from(COMMENTS)
        .eq("photo_id", photo_id)
        .order("created_at", Order::Asc)
        .fetch()
        .await
}

pub async fn add_comment(
    backend: &Backend,
    user_id: &str,
    photo_id: &str,
    content: &str,
) -> Result<PhotoComment> {
    backend
        .from(COMMENTS)
        .insert(&json!({
            "id": new_id(),
            "user_id": user_id,
            "photo_id": photo_id,
            "content": content,
            "created_at": now(),
        }))
        .await
}

pub async fn delete_comment(backend: &Backend, id: &str) -> Result<()> {
    backend.from(COMMENTS).eq("id", id).delete().await
}

/// Whether this identity has liked the photo.
pub async fn has_liked(backend: &Backend, photo_id: &str, user_id: &str) -> Result<bool> {
    let existing: Option<PhotoLike> = backend
        .from(LIKES)
        .eq("photo_id", photo_id)
        .eq("user_id", user_id)
        .fetch_optional()
        .await?;
    Ok(existing.is_some())
}

/// Exact number of likes on the photo, counted backend-side.
pub async fn like_count(backend: &Backend, photo_id: &str) -> Result<u64> {
    backend.from(LIKES).eq("photo_id", photo_id).count().await
}

/// Add or remove this identity's like. Returns true when the photo is
/// liked after the call.
pub async fn toggle_like(backend: &Backend, photo_id: &str, user_id: &str) -> Result<bool> {
    let existing: Option<PhotoLike> = backend
        .from(LIKES)
        .eq("photo_id", photo_id)
        .eq("user_id", user_id)
        .fetch_optional()
        .await?;

    match existing {
        Some(like) => {
            backend.from(LIKES).eq("id", &like.id).delete().await?;
            Ok(false)
        }
        None => {
            let _: PhotoLike = backend
                .from(LIKES)
                .insert(&json!({
                    "id": new_id(),
                    "user_id": user_id,
                    "photo_id": photo_id,
                    "created_at": now(),
                }))
                .await?;
            Ok(true)
        }
    }
}
