use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::error::Result;
use crate::common::{CommentId, CommentLikeId, UserId};

/// A like on a comment. At most one per (comment, user) pair.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CommentLike {
    pub id: CommentLikeId,
    pub comment_id: CommentId,
    pub user_id: UserId,
    pub created_on: DateTime<Utc>,
}

// =============================================================================
// CommentLike Queries
// =============================================================================

impl CommentLike {
    pub async fn create(comment_id: CommentId, user_id: UserId, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO comment_likes (id, comment_id, user_id)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(CommentLikeId::new())
        .bind(comment_id)
        .bind(user_id)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Find a user's like on a comment, if any
    pub async fn find_by_comment_and_user(
        comment_id: CommentId,
        user_id: UserId,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM comment_likes WHERE comment_id = $1 AND user_id = $2",
        )
        .bind(comment_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Batch-load likes for multiple comments, oldest first
    pub async fn find_for_comment_ids(
        comment_ids: &[CommentId],
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM comment_likes WHERE comment_id = ANY($1) ORDER BY created_on",
        )
        .bind(comment_ids)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn delete(id: CommentLikeId, pool: &PgPool) -> Result<()> {
        sqlx::query("DELETE FROM comment_likes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
