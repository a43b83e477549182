use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::error::Result;
use crate::common::{PostId, PostViewId, UserId};

/// A recorded view of a post by one viewer.
///
/// At most one row per (post, viewer) pair; the row's existence means the
/// viewer's single increment to the post's view count has been applied.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PostView {
    pub id: PostViewId,
    pub post_id: PostId,
    pub user_id: UserId,
    pub created_on: DateTime<Utc>,
}

// =============================================================================
// PostView Queries
// =============================================================================

impl PostView {
    /// Find a viewer's view row on a post, if any
    pub async fn find_by_post_and_user(
        post_id: PostId,
        user_id: UserId,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM post_views WHERE post_id = $1 AND user_id = $2")
            .bind(post_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Find all views of a post
    pub async fn find_for_post(post_id: PostId, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM post_views WHERE post_id = $1")
            .bind(post_id)
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }
}
