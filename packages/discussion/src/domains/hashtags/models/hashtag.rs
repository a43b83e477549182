use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::error::Result;
use crate::common::{HashtagId, PostId};

/// A hashtag - globally unique by tag text, shared across posts.
///
/// Hashtag rows are created lazily on first use and never deleted by
/// post mutation.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Hashtag {
    pub id: HashtagId,
    pub tag: String,
}

// =============================================================================
// Hashtag Queries
// =============================================================================

impl Hashtag {
    /// Find hashtag by its tag text (the natural key)
    pub async fn find_by_tag(tag: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM hashtags WHERE tag = $1")
            .bind(tag)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Find all hashtags linked to a post, ordered by tag text
    pub async fn find_for_post(post_id: PostId, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT h.*
            FROM hashtags h
            INNER JOIN post_hashtags ph ON ph.hashtag_id = h.id
            WHERE ph.post_id = $1
            ORDER BY h.tag
            "#,
        )
        .bind(post_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Tag strings linked to a post, ordered by tag text
    pub async fn tags_for_post(post_id: PostId, pool: &PgPool) -> Result<Vec<String>> {
        let hashtags = Self::find_for_post(post_id, pool).await?;
        Ok(hashtags.into_iter().map(|h| h.tag).collect())
    }
}
