use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{CommentId, CommentLikeId, PostId, PostLikeId, ReplyId, UserId};
use crate::domains::posts::models::Post;
use crate::kernel::UserSummary;

/// Flat API representation of a post with its tag list
///
/// Returned by the create/update paths, which do not aggregate the
/// relational neighborhood.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostData {
    pub id: PostId,
    pub user_id: UserId,
    pub text: String,
    pub image_url: Option<String>,
    pub created_on: DateTime<Utc>,
    pub view_count: i64,
    pub hashtags: Vec<String>,
}

impl PostData {
    pub fn new(post: Post, hashtags: Vec<String>) -> Self {
        Self {
            id: post.id,
            user_id: post.user_id,
            text: post.text,
            image_url: post.image_url,
            created_on: post.created_on,
            view_count: post.view_count,
            hashtags,
        }
    }
}

/// A like on a post, with its actor resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeData {
    pub id: PostLikeId,
    pub post_id: PostId,
    pub user_id: UserId,
    pub created_on: DateTime<Utc>,
    pub user: UserSummary,
}

/// A like on a comment, carrying just the actor's display name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentLikeData {
    pub id: CommentLikeId,
    pub user_id: UserId,
    pub user_name: String,
}

/// A reply with its author resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyData {
    pub id: ReplyId,
    pub comment_id: CommentId,
    pub user_id: UserId,
    pub text: String,
    pub created_on: DateTime<Utc>,
    pub user: UserSummary,
}

/// A comment with its likes, replies and author resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentData {
    pub id: CommentId,
    pub post_id: PostId,
    pub user_id: UserId,
    pub text: String,
    pub created_on: DateTime<Utc>,
    pub likes: Vec<CommentLikeData>,
    pub total_likes: i64,
    pub replies: Vec<ReplyData>,
    pub user: UserSummary,
}

/// The complete denormalized response tree for one post
///
/// Counts always equal the cardinality of the collections they sit next
/// to; nothing here is cached across calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: PostId,
    pub user_id: UserId,
    pub user: UserSummary,
    pub text: String,
    pub image_url: Option<String>,
    pub created_on: DateTime<Utc>,
    pub hashtags: Vec<String>,
    pub view_count: i64,
    pub comments: Vec<CommentData>,
    pub likes: Vec<LikeData>,
    pub total_likes: i64,
}
