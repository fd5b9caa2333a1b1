//! Message board queries.
//!
//! Reaction counts are never written onto the post row. Each list read
//! counts the reaction rows backend-side, so counts cannot go stale the
//! way a cached counter column can.

use serde_json::json;

use crate::backend::{Backend, Order};
use crate::models::{new_id, now, BoardPost, PostKind, PostReaction, PostWithCounts, ReactionKind};
use crate::Result;

const POSTS: &str = "board_posts";
const REACTIONS: &str = "post_reactions";

/// The shared board, newest post first, each with fresh reaction counts.
pub async fn list_posts(backend: &Backend) -> Result<Vec<PostWithCounts>> {
    let posts: Vec<BoardPost> = backend
        .from(POSTS)
        .order("created_at", Order::Desc)
        .fetch()
        .await?;

    let mut with_counts = Vec::with_capacity(posts.len());
    for post in posts {
        let likes = reaction_count(backend, &post.id, ReactionKind::Like).await?;
        let dislikes = reaction_count(backend, &post.id, ReactionKind::Dislike).await?;
        with_counts.push(PostWithCounts {
            post,
            likes,
            dislikes,
        });
    }
    Ok(with_counts)
}

pub async fn add_post(
    backend: &Backend,
    user_id: &str,
    message: &str,
    kind: PostKind,
    is_urgent: bool,
) -> Result<BoardPost> {
    backend
        .from(POSTS)
        .insert(&json!({
            "id": new_id(),
            "user_id": user_id,
            "message": message,
            "kind": kind,
            "is_urgent": is_urgent,
            "created_at": now(),
        }))
        .await
}

pub async fn delete_post(backend: &Backend, id: &str) -> Result<()> {
    backend.from(POSTS).eq("id", id).delete().await
}

/// Replace this identity's reaction on a post: any previous reaction row
/// is deleted, then the new one inserted. The two steps are separate
/// calls; a concurrent reaction from the other partner interleaves
/// freely, but since counts are computed on read nothing is lost.
pub async fn react(
    backend: &Backend,
    post_id: &str,
    user_id: &str,
    reaction: ReactionKind,
) -> Result<PostReaction> {
    backend
        .from(REACTIONS)
        .eq("post_id", post_id)
        .eq("user_id", user_id)
        .delete()
        .await?;

    backend
        .from(REACTIONS)
        .insert(&json!({
            "id": new_id(),
            "user_id": user_id,
            "post_id": post_id,
            "reaction": reaction,
            "created_at": now(),
        }))
        .await
}

/// Exact reaction-row count for one post and kind.
pub async fn reaction_count(
    backend: &Backend,
    post_id: &str,
    reaction: ReactionKind,
) -> Result<u64> {
    backend
        .from(REACTIONS)
        .eq("post_id", post_id)
        .eq("reaction", reaction.as_str())
        .count()
        .await
}
