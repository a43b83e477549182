//! Comment like management.

use tracing::info;

use crate::common::error::{DiscussionError, Result};
use crate::common::{CommentId, UserId};
use crate::domains::comments::models::{Comment, CommentLike};
use crate::kernel::ServiceDeps;

/// Like a comment on behalf of the token's user.
///
/// A user holds at most one like per comment; repeats are rejected.
pub async fn like_comment(
    token: &str,
    comment_id: CommentId,
    deps: &ServiceDeps,
) -> Result<CommentLike> {
    let actor = deps.authenticate(token).await?;
    let actor_id = UserId::from_uuid(actor.id);

    if Comment::find_by_id(comment_id, &deps.db_pool).await?.is_none() {
        return Err(DiscussionError::NotFound("comment"));
    }

    if CommentLike::find_by_comment_and_user(comment_id, actor_id, &deps.db_pool)
        .await?
        .is_some()
    {
        return Err(DiscussionError::AlreadyExists("like"));
    }

    let like = CommentLike::create(comment_id, actor_id, &deps.db_pool).await?;

    info!(comment_id = %comment_id, user_id = %actor_id, "Liked comment");

    Ok(like)
}

/// Remove the caller's like from a comment.
pub async fn unlike_comment(token: &str, comment_id: CommentId, deps: &ServiceDeps) -> Result<()> {
    let actor = deps.authenticate(token).await?;
    let actor_id = UserId::from_uuid(actor.id);

    let like = CommentLike::find_by_comment_and_user(comment_id, actor_id, &deps.db_pool)
        .await?
        .ok_or(DiscussionError::NotFound("like"))?;

    CommentLike::delete(like.id, &deps.db_pool).await?;

    info!(comment_id = %comment_id, user_id = %actor_id, "Unliked comment");

    Ok(())
}
