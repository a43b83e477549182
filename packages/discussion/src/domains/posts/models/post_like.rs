use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::error::Result;
use crate::common::{PostId, PostLikeId, UserId};

/// A like on a post. At most one per (post, user) pair.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PostLike {
    pub id: PostLikeId,
    pub post_id: PostId,
    pub user_id: UserId,
    pub created_on: DateTime<Utc>,
}

// =============================================================================
// PostLike Queries
// =============================================================================

impl PostLike {
    pub async fn create(post_id: PostId, user_id: UserId, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO post_likes (id, post_id, user_id)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(PostLikeId::new())
        .bind(post_id)
        .bind(user_id)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Find a user's like on a post, if any
    pub async fn find_by_post_and_user(
        post_id: PostId,
        user_id: UserId,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM post_likes WHERE post_id = $1 AND user_id = $2")
            .bind(post_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Find all likes of a post, oldest first
    pub async fn find_for_post(post_id: PostId, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM post_likes WHERE post_id = $1 ORDER BY created_on",
        )
        .bind(post_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn delete(id: PostLikeId, pool: &PgPool) -> Result<()> {
        sqlx::query("DELETE FROM post_likes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
