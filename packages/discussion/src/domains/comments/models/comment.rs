use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::error::Result;
use crate::common::{CommentId, PostId, UserId};

/// A comment on a post. Owns its replies and likes by cascade.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    pub user_id: UserId,
    pub text: String,
    pub created_on: DateTime<Utc>,
}

// =============================================================================
// Comment Queries
// =============================================================================

impl Comment {
    pub async fn create(
        post_id: PostId,
        user_id: UserId,
        text: &str,
        pool: &PgPool,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO comments (id, post_id, user_id, text)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(CommentId::new())
        .bind(post_id)
        .bind(user_id)
        .bind(text)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn find_by_id(id: CommentId, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM comments WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn update(id: CommentId, text: &str, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>("UPDATE comments SET text = $2 WHERE id = $1 RETURNING *")
            .bind(id)
            .bind(text)
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }

    /// Find all comments of a post, oldest first
    pub async fn find_for_post(post_id: PostId, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM comments WHERE post_id = $1 ORDER BY created_on",
        )
        .bind(post_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Delete a comment. Replies and likes go with it by cascade.
    pub async fn delete(id: CommentId, pool: &PgPool) -> Result<()> {
        sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
