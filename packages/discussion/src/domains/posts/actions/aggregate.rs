//! Post aggregation - builds the complete response tree for one post
//!
//! The relational neighborhood (comments, replies, likes, hashtags) is
//! fully materialized first, one batch read per collection. Every user
//! referenced anywhere in the tree is then resolved through the identity
//! service before composition starts. Any failed lookup fails the whole
//! aggregation - a partial tree is never returned.

use std::collections::{HashMap, HashSet};

use futures::stream::{self, StreamExt};
use tracing::debug;

use crate::common::error::{DiscussionError, Result};
use crate::common::{CommentId, UserId};
use crate::domains::comments::models::{Comment, CommentLike, Reply};
use crate::domains::hashtags::models::Hashtag;
use crate::domains::posts::data::{
    CommentData, CommentLikeData, LikeData, PostResponse, ReplyData,
};
use crate::domains::posts::models::{Post, PostLike};
use crate::kernel::{ServiceDeps, UserSummary};

/// Upper bound on concurrent identity lookups within one aggregation.
const MAX_CONCURRENT_LOOKUPS: usize = 8;

/// Build the full response tree for an already-loaded post.
///
/// Read-only: callers that must count the view do so before calling this
/// and pass the post with its adjusted count.
pub async fn aggregate_post(post: Post, token: &str, deps: &ServiceDeps) -> Result<PostResponse> {
    let pool = &deps.db_pool;

    let comments = Comment::find_for_post(post.id, pool).await?;
    let post_likes = PostLike::find_for_post(post.id, pool).await?;
    let hashtags = Hashtag::tags_for_post(post.id, pool).await?;

    let comment_ids: Vec<CommentId> = comments.iter().map(|c| c.id).collect();
    let replies = Reply::find_for_comment_ids(&comment_ids, pool).await?;
    let comment_likes = CommentLike::find_for_comment_ids(&comment_ids, pool).await?;

    debug!(
        post_id = %post.id,
        comments = comments.len(),
        replies = replies.len(),
        "Aggregating post"
    );

    // Collect every distinct user referenced in the tree, then resolve
    // them all up front.
    let mut user_ids: HashSet<UserId> = HashSet::new();
    user_ids.insert(post.user_id);
    user_ids.extend(comments.iter().map(|c| c.user_id));
    user_ids.extend(post_likes.iter().map(|l| l.user_id));
    user_ids.extend(replies.iter().map(|r| r.user_id));
    user_ids.extend(comment_likes.iter().map(|l| l.user_id));

    let users = resolve_users(user_ids, token, deps).await?;

    // Composition is pure from here on.
    let mut replies_by_comment: HashMap<CommentId, Vec<Reply>> = HashMap::new();
    for reply in replies {
        replies_by_comment
            .entry(reply.comment_id)
            .or_default()
            .push(reply);
    }

    let mut likes_by_comment: HashMap<CommentId, Vec<CommentLike>> = HashMap::new();
    for like in comment_likes {
        likes_by_comment.entry(like.comment_id).or_default().push(like);
    }

    let mut comments_data = Vec::with_capacity(comments.len());
    for comment in comments {
        let likes = likes_by_comment.remove(&comment.id).unwrap_or_default();
        let mut like_data = Vec::with_capacity(likes.len());
        for like in likes {
            like_data.push(CommentLikeData {
                id: like.id,
                user_id: like.user_id,
                user_name: resolved(&users, like.user_id)?.name.clone(),
            });
        }

        let replies = replies_by_comment.remove(&comment.id).unwrap_or_default();
        let mut reply_data = Vec::with_capacity(replies.len());
        for reply in replies {
            reply_data.push(ReplyData {
                id: reply.id,
                comment_id: reply.comment_id,
                user_id: reply.user_id,
                text: reply.text,
                created_on: reply.created_on,
                user: resolved(&users, reply.user_id)?.clone(),
            });
        }

        comments_data.push(CommentData {
            id: comment.id,
            post_id: comment.post_id,
            user_id: comment.user_id,
            text: comment.text,
            created_on: comment.created_on,
            total_likes: like_data.len() as i64,
            likes: like_data,
            replies: reply_data,
            user: resolved(&users, comment.user_id)?.clone(),
        });
    }

    let mut like_data = Vec::with_capacity(post_likes.len());
    for like in post_likes {
        like_data.push(LikeData {
            id: like.id,
            post_id: like.post_id,
            user_id: like.user_id,
            created_on: like.created_on,
            user: resolved(&users, like.user_id)?.clone(),
        });
    }

    Ok(PostResponse {
        id: post.id,
        user_id: post.user_id,
        user: resolved(&users, post.user_id)?.clone(),
        text: post.text,
        image_url: post.image_url,
        created_on: post.created_on,
        hashtags,
        view_count: post.view_count,
        comments: comments_data,
        total_likes: like_data.len() as i64,
        likes: like_data,
    })
}

/// Resolve a set of users through the identity service with bounded
/// concurrency. The first failure aborts the batch; in-flight lookups
/// are dropped.
async fn resolve_users(
    user_ids: HashSet<UserId>,
    token: &str,
    deps: &ServiceDeps,
) -> Result<HashMap<UserId, UserSummary>> {
    let lookups = user_ids.into_iter().map(|user_id| {
        let identity = deps.identity.clone();
        async move {
            identity
                .user_summary(user_id.into_uuid(), token)
                .await
                .map(|summary| (user_id, summary))
        }
    });

    let mut stream = stream::iter(lookups).buffer_unordered(MAX_CONCURRENT_LOOKUPS);

    let mut resolved = HashMap::new();
    while let Some(result) = stream.next().await {
        let (user_id, summary) = result.map_err(DiscussionError::dependency)?;
        resolved.insert(user_id, summary);
    }
    Ok(resolved)
}

fn resolved(users: &HashMap<UserId, UserSummary>, id: UserId) -> Result<&UserSummary> {
    users
        .get(&id)
        .ok_or_else(|| anyhow::anyhow!("user {} missing from resolved set", id).into())
}
