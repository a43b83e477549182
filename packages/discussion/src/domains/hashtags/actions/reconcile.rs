//! Hashtag reconciliation - keeps a post's tag links equal to a target set
//!
//! Reconciliation computes the minimal diff between the currently linked
//! tags and the caller's target set, then applies it: stale links are
//! removed, missing hashtags are created on first use, missing links are
//! inserted. Hashtag rows themselves are never deleted here.

use std::collections::BTreeSet;

use sqlx::PgPool;
use tracing::info;

use crate::common::error::Result;
use crate::common::{HashtagId, PostId};
use crate::domains::hashtags::models::Hashtag;

/// Parse a comma-separated tag string into a tag set.
///
/// Segments are trimmed; segments that are empty after trimming are
/// dropped, so `"a,,b"` and `"a, b,"` both parse to `{"a", "b"}`.
/// Tags are case-sensitive as supplied.
pub fn parse_tags(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Make the post's linked tag set exactly equal to `target`.
///
/// Runs as one transaction: the read of the current links and the
/// inserts/deletes derived from it commit or roll back together.
/// Calling this twice with the same target set is a no-op the second
/// time. Callers that have no tag input skip the call entirely, which
/// leaves existing links untouched.
pub async fn reconcile(post_id: PostId, target: &BTreeSet<String>, pool: &PgPool) -> Result<()> {
    let mut tx = pool.begin().await?;

    let current: Vec<Hashtag> = sqlx::query_as::<_, Hashtag>(
        r#"
        SELECT h.*
        FROM hashtags h
        INNER JOIN post_hashtags ph ON ph.hashtag_id = h.id
        WHERE ph.post_id = $1
        "#,
    )
    .bind(post_id)
    .fetch_all(&mut *tx)
    .await?;

    let current_tags: BTreeSet<String> = current.iter().map(|h| h.tag.clone()).collect();

    // Unlink tags that fell out of the target set. The hashtag rows stay -
    // they are shared across posts.
    let mut removed = 0;
    for hashtag in current.iter().filter(|h| !target.contains(&h.tag)) {
        sqlx::query("DELETE FROM post_hashtags WHERE post_id = $1 AND hashtag_id = $2")
            .bind(post_id)
            .bind(hashtag.id)
            .execute(&mut *tx)
            .await?;
        removed += 1;
    }

    // Link new tags, creating hashtags lazily on first use. The upsert
    // makes creation safe under concurrent first-use of the same text.
    let mut added = 0;
    for tag in target.difference(&current_tags) {
        let hashtag: Hashtag = sqlx::query_as::<_, Hashtag>(
            r#"
            INSERT INTO hashtags (id, tag)
            VALUES ($1, $2)
            ON CONFLICT (tag) DO UPDATE SET tag = EXCLUDED.tag
            RETURNING *
            "#,
        )
        .bind(HashtagId::new())
        .bind(tag)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO post_hashtags (post_id, hashtag_id)
            VALUES ($1, $2)
            ON CONFLICT (post_id, hashtag_id) DO NOTHING
            "#,
        )
        .bind(post_id)
        .bind(hashtag.id)
        .execute(&mut *tx)
        .await?;
        added += 1;
    }

    tx.commit().await?;

    info!(post_id = %post_id, added, removed, "Reconciled post hashtags");
    Ok(())
}
