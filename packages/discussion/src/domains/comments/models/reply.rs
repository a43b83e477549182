use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::error::Result;
use crate::common::{CommentId, ReplyId, UserId};

/// A reply to a comment.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Reply {
    pub id: ReplyId,
    pub comment_id: CommentId,
    pub user_id: UserId,
    pub text: String,
    pub created_on: DateTime<Utc>,
}

// =============================================================================
// Reply Queries
// =============================================================================

impl Reply {
    pub async fn create(
        comment_id: CommentId,
        user_id: UserId,
        text: &str,
        pool: &PgPool,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO replies (id, comment_id, user_id, text)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(ReplyId::new())
        .bind(comment_id)
        .bind(user_id)
        .bind(text)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn find_by_id(id: ReplyId, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM replies WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Batch-load replies for multiple comments, oldest first
    pub async fn find_for_comment_ids(
        comment_ids: &[CommentId],
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM replies WHERE comment_id = ANY($1) ORDER BY created_on",
        )
        .bind(comment_ids)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn delete(id: ReplyId, pool: &PgPool) -> Result<()> {
        sqlx::query("DELETE FROM replies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
