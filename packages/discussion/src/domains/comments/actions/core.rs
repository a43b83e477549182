//! Comment and reply actions - entry-point functions for the comment tree
//!
//! Actions are self-contained: they authenticate the caller token, run
//! ownership checks, and return final models.

use tracing::info;

use crate::common::error::{DiscussionError, Result};
use crate::common::{CommentId, PostId, ReplyId, UserId};
use crate::domains::comments::models::{Comment, Reply};
use crate::domains::posts::models::Post;
use crate::kernel::ServiceDeps;

/// Comment on a post on behalf of the token's user.
pub async fn create_comment(
    token: &str,
    post_id: PostId,
    text: &str,
    deps: &ServiceDeps,
) -> Result<Comment> {
    let actor = deps.authenticate(token).await?;
    let actor_id = UserId::from_uuid(actor.id);

    if Post::find_by_id(post_id, &deps.db_pool).await?.is_none() {
        return Err(DiscussionError::NotFound("post"));
    }

    let comment = Comment::create(post_id, actor_id, text, &deps.db_pool).await?;

    info!(post_id = %post_id, comment_id = %comment.id, user_id = %actor_id, "Created comment");

    Ok(comment)
}

/// Update a comment's text. Only the owner may update.
pub async fn update_comment(
    token: &str,
    comment_id: CommentId,
    text: &str,
    deps: &ServiceDeps,
) -> Result<Comment> {
    let actor = deps.authenticate(token).await?;
    let actor_id = UserId::from_uuid(actor.id);

    let comment = Comment::find_by_id(comment_id, &deps.db_pool)
        .await?
        .ok_or(DiscussionError::NotFound("comment"))?;

    if comment.user_id != actor_id {
        return Err(DiscussionError::Unauthorized("comment"));
    }

    let comment = Comment::update(comment_id, text, &deps.db_pool).await?;

    info!(comment_id = %comment_id, user_id = %actor_id, "Updated comment");

    Ok(comment)
}

/// Delete a comment. Only the owner may delete; replies and likes go
/// with it by cascade.
pub async fn delete_comment(token: &str, comment_id: CommentId, deps: &ServiceDeps) -> Result<()> {
    let actor = deps.authenticate(token).await?;
    let actor_id = UserId::from_uuid(actor.id);

    let comment = Comment::find_by_id(comment_id, &deps.db_pool)
        .await?
        .ok_or(DiscussionError::NotFound("comment"))?;

    if comment.user_id != actor_id {
        return Err(DiscussionError::Unauthorized("comment"));
    }

    Comment::delete(comment_id, &deps.db_pool).await?;

    info!(comment_id = %comment_id, user_id = %actor_id, "Deleted comment");

    Ok(())
}

/// Reply to a comment on behalf of the token's user.
pub async fn create_reply(
    token: &str,
    comment_id: CommentId,
    text: &str,
    deps: &ServiceDeps,
) -> Result<Reply> {
    let actor = deps.authenticate(token).await?;
    let actor_id = UserId::from_uuid(actor.id);

    if Comment::find_by_id(comment_id, &deps.db_pool).await?.is_none() {
        return Err(DiscussionError::NotFound("comment"));
    }

    let reply = Reply::create(comment_id, actor_id, text, &deps.db_pool).await?;

    info!(comment_id = %comment_id, reply_id = %reply.id, user_id = %actor_id, "Created reply");

    Ok(reply)
}

/// Delete a reply. Only the owner may delete.
pub async fn delete_reply(token: &str, reply_id: ReplyId, deps: &ServiceDeps) -> Result<()> {
    let actor = deps.authenticate(token).await?;
    let actor_id = UserId::from_uuid(actor.id);

    let reply = Reply::find_by_id(reply_id, &deps.db_pool)
        .await?
        .ok_or(DiscussionError::NotFound("reply"))?;

    if reply.user_id != actor_id {
        return Err(DiscussionError::Unauthorized("reply"));
    }

    Reply::delete(reply_id, &deps.db_pool).await?;

    info!(reply_id = %reply_id, user_id = %actor_id, "Deleted reply");

    Ok(())
}
