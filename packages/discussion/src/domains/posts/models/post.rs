use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::error::Result;
use crate::common::{PostId, UserId};

/// A post. Owns its comments, likes, hashtag links and views by cascade.
///
/// `view_count` is maintained by the view recording path and only ever
/// grows; it counts distinct non-author viewers.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: PostId,
    pub user_id: UserId,
    pub text: String,
    pub image_url: Option<String>,
    pub created_on: DateTime<Utc>,
    pub view_count: i64,
}

// =============================================================================
// Post Queries
// =============================================================================

impl Post {
    pub async fn create(
        user_id: UserId,
        text: &str,
        image_url: Option<&str>,
        pool: &PgPool,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO posts (id, user_id, text, image_url)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(PostId::new())
        .bind(user_id)
        .bind(text)
        .bind(image_url)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn find_by_id(id: PostId, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM posts WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Partial update: only supplied fields change
    pub async fn update(
        id: PostId,
        text: Option<&str>,
        image_url: Option<&str>,
        pool: &PgPool,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            UPDATE posts
            SET text = COALESCE($2, text),
                image_url = COALESCE($3, image_url)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(text)
        .bind(image_url)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Delete a post. Comments, likes, hashtag links and views go with it
    /// by cascade; shared hashtag rows stay.
    pub async fn delete(id: PostId, pool: &PgPool) -> Result<()> {
        sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Find posts with optional tag and text filters, newest first.
    ///
    /// `tags` matches posts linked to ANY of the given tag texts; `search`
    /// matches case-insensitively anywhere in the post text.
    pub async fn find_filtered(
        tags: Option<&[String]>,
        search: Option<&str>,
        skip: i64,
        limit: i64,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT p.* FROM posts p
            WHERE ($1::text[] IS NULL OR p.id IN (
                    SELECT ph.post_id
                    FROM post_hashtags ph
                    INNER JOIN hashtags h ON h.id = ph.hashtag_id
                    WHERE h.tag = ANY($1)))
              AND ($2::text IS NULL OR p.text ILIKE '%' || $2 || '%')
            ORDER BY p.created_on DESC
            OFFSET $3
            LIMIT $4
            "#,
        )
        .bind(tags)
        .bind(search)
        .bind(skip)
        .bind(limit)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}
