//! Test fixtures for creating test data.
//!
//! These fixtures use the model methods directly to create test data.
//! The test database is shared, so data is scoped per test with fresh
//! user ids and unique text markers instead of global cleanup.

use anyhow::Result;
use discussion_core::common::{CommentId, PostId, UserId};
use discussion_core::domains::comments::models::{Comment, Reply};
use discussion_core::domains::posts::models::Post;
use sqlx::PgPool;
use uuid::Uuid;

/// A fresh external user id. Users live in the identity service, so a
/// random UUID is all a test needs.
pub fn test_user() -> UserId {
    UserId::from_uuid(Uuid::new_v4())
}

/// A unique marker for scoping tag and search assertions to one test.
pub fn unique_marker(prefix: &str) -> String {
    format!("{}-{}", prefix, &Uuid::new_v4().to_string()[..8])
}

/// Create a test post without an image
pub async fn create_test_post(pool: &PgPool, user_id: UserId, text: &str) -> Result<Post> {
    Ok(Post::create(user_id, text, None, pool).await?)
}

/// Create a test comment on a post
pub async fn create_test_comment(
    pool: &PgPool,
    post_id: PostId,
    user_id: UserId,
    text: &str,
) -> Result<Comment> {
    Ok(Comment::create(post_id, user_id, text, pool).await?)
}

/// Create a test reply to a comment
pub async fn create_test_reply(
    pool: &PgPool,
    comment_id: CommentId,
    user_id: UserId,
    text: &str,
) -> Result<Reply> {
    Ok(Reply::create(comment_id, user_id, text, pool).await?)
}
