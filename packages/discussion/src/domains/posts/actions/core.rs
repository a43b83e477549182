//! Post CRUD actions - entry-point functions for post operations
//!
//! Actions are self-contained: they authenticate the caller token, run
//! ownership checks, and return final response data.

use tracing::{debug, info};

use crate::common::error::{DiscussionError, Result};
use crate::common::{PostId, UserId};
use crate::domains::hashtags::actions::{parse_tags, reconcile};
use crate::domains::hashtags::models::Hashtag;
use crate::domains::posts::actions::aggregate::aggregate_post;
use crate::domains::posts::actions::views::record_view;
use crate::domains::posts::data::{PostData, PostResponse};
use crate::domains::posts::models::Post;
use crate::kernel::ServiceDeps;

/// Create a post owned by the token's user.
/// Returns the flat post with its hashtag list.
///
/// `tags` is a raw comma-separated tag string; a string that parses to
/// no tags leaves the post without hashtags.
pub async fn create_post(
    token: &str,
    text: &str,
    image_url: Option<&str>,
    tags: Option<&str>,
    deps: &ServiceDeps,
) -> Result<PostData> {
    let actor = deps.authenticate(token).await?;
    let actor_id = UserId::from_uuid(actor.id);

    if text.trim().is_empty() {
        return Err(DiscussionError::Invalid(
            "post text must not be empty".to_string(),
        ));
    }

    let post = Post::create(actor_id, text, image_url, &deps.db_pool).await?;

    if let Some(raw) = tags {
        let target = parse_tags(raw);
        if !target.is_empty() {
            reconcile(post.id, &target, &deps.db_pool).await?;
        }
    }

    let hashtags = Hashtag::tags_for_post(post.id, &deps.db_pool).await?;

    info!(post_id = %post.id, user_id = %actor_id, "Created post");

    Ok(PostData::new(post, hashtags))
}

/// Update a post's text, image, or tags. Only the owner may update.
/// Returns the updated flat post with its hashtag list.
///
/// `None` and empty-string fields leave the current value in place. A
/// tag string that parses to no tags leaves the hashtag set unchanged.
pub async fn update_post(
    token: &str,
    post_id: PostId,
    text: Option<&str>,
    image_url: Option<&str>,
    tags: Option<&str>,
    deps: &ServiceDeps,
) -> Result<PostData> {
    let actor = deps.authenticate(token).await?;
    let actor_id = UserId::from_uuid(actor.id);

    let post = Post::find_by_id(post_id, &deps.db_pool)
        .await?
        .ok_or(DiscussionError::NotFound("post"))?;

    if post.user_id != actor_id {
        return Err(DiscussionError::Unauthorized("post"));
    }

    let text = text.filter(|t| !t.is_empty());
    let image_url = image_url.filter(|u| !u.is_empty());

    let post = Post::update(post_id, text, image_url, &deps.db_pool).await?;

    if let Some(raw) = tags {
        let target = parse_tags(raw);
        if !target.is_empty() {
            reconcile(post.id, &target, &deps.db_pool).await?;
        }
    }

    let hashtags = Hashtag::tags_for_post(post.id, &deps.db_pool).await?;

    info!(post_id = %post_id, user_id = %actor_id, "Updated post");

    Ok(PostData::new(post, hashtags))
}

/// Delete a post. Only the owner may delete; comments, likes, views,
/// and hashtag links go with it by cascade.
pub async fn delete_post(token: &str, post_id: PostId, deps: &ServiceDeps) -> Result<()> {
    let actor = deps.authenticate(token).await?;
    let actor_id = UserId::from_uuid(actor.id);

    let post = Post::find_by_id(post_id, &deps.db_pool)
        .await?
        .ok_or(DiscussionError::NotFound("post"))?;

    if post.user_id != actor_id {
        return Err(DiscussionError::Unauthorized("post"));
    }

    Post::delete(post_id, &deps.db_pool).await?;

    info!(post_id = %post_id, user_id = %actor_id, "Deleted post");

    Ok(())
}

/// Fetch one post as a fully aggregated response tree.
///
/// Counts the caller's first view before aggregation, so the returned
/// view count already includes it.
pub async fn get_post(token: &str, post_id: PostId, deps: &ServiceDeps) -> Result<PostResponse> {
    let actor = deps.authenticate(token).await?;
    let viewer_id = UserId::from_uuid(actor.id);

    let mut post = Post::find_by_id(post_id, &deps.db_pool)
        .await?
        .ok_or(DiscussionError::NotFound("post"))?;

    if record_view(&post, viewer_id, &deps.db_pool).await? {
        post.view_count += 1;
    }

    aggregate_post(post, token, deps).await
}

/// List posts as aggregated response trees, newest first.
///
/// `tags` keeps posts carrying at least one of the given hashtags,
/// `search` keeps posts whose text matches case-insensitively.
pub async fn list_posts(
    token: &str,
    tags: Option<&[String]>,
    search: Option<&str>,
    skip: i64,
    limit: i64,
    deps: &ServiceDeps,
) -> Result<Vec<PostResponse>> {
    deps.authenticate(token).await?;

    let posts = Post::find_filtered(tags, search, skip, limit, &deps.db_pool).await?;

    let mut responses = Vec::with_capacity(posts.len());
    for post in posts {
        responses.push(aggregate_post(post, token, deps).await?);
    }

    debug!(returned = responses.len(), "Listed posts");

    Ok(responses)
}
