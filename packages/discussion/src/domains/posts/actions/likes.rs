//! Post like management.

use tracing::info;

use crate::common::error::{DiscussionError, Result};
use crate::common::{PostId, UserId};
use crate::domains::posts::models::{Post, PostLike};
use crate::kernel::ServiceDeps;

/// Like a post on behalf of the token's user.
///
/// A user holds at most one like per post; repeats are rejected.
pub async fn like_post(token: &str, post_id: PostId, deps: &ServiceDeps) -> Result<PostLike> {
    let actor = deps.authenticate(token).await?;
    let actor_id = UserId::from_uuid(actor.id);

    if Post::find_by_id(post_id, &deps.db_pool).await?.is_none() {
        return Err(DiscussionError::NotFound("post"));
    }

    if PostLike::find_by_post_and_user(post_id, actor_id, &deps.db_pool)
        .await?
        .is_some()
    {
        return Err(DiscussionError::AlreadyExists("like"));
    }

    let like = PostLike::create(post_id, actor_id, &deps.db_pool).await?;

    info!(post_id = %post_id, user_id = %actor_id, "Liked post");

    Ok(like)
}

/// Remove the caller's like from a post.
pub async fn unlike_post(token: &str, post_id: PostId, deps: &ServiceDeps) -> Result<()> {
    let actor = deps.authenticate(token).await?;
    let actor_id = UserId::from_uuid(actor.id);

    let like = PostLike::find_by_post_and_user(post_id, actor_id, &deps.db_pool)
        .await?
        .ok_or(DiscussionError::NotFound("like"))?;

    PostLike::delete(like.id, &deps.db_pool).await?;

    info!(post_id = %post_id, user_id = %actor_id, "Unliked post");

    Ok(())
}
