//! View counting for posts.
//!
//! A post's view count moves at most once per (post, viewer) pair. The
//! uniqueness guard on `post_views` and the increment run inside one
//! transaction, so concurrent reads of the same post by the same viewer
//! cannot double-count.

use sqlx::PgPool;
use tracing::debug;

use crate::common::error::Result;
use crate::common::{PostViewId, UserId};
use crate::domains::posts::models::Post;

/// Record that `viewer_id` has seen `post`.
///
/// Returns whether the view counted. Authors viewing their own post and
/// repeat viewers are no-ops.
pub async fn record_view(post: &Post, viewer_id: UserId, pool: &PgPool) -> Result<bool> {
    if viewer_id == post.user_id {
        return Ok(false);
    }

    let mut tx = pool.begin().await?;

    let inserted = sqlx::query(
        r#"
        INSERT INTO post_views (id, post_id, user_id)
        VALUES ($1, $2, $3)
        ON CONFLICT (post_id, user_id) DO NOTHING
        "#,
    )
    .bind(PostViewId::new())
    .bind(post.id)
    .bind(viewer_id)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    if inserted == 0 {
        tx.commit().await?;
        return Ok(false);
    }

    sqlx::query("UPDATE posts SET view_count = view_count + 1 WHERE id = $1")
        .bind(post.id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    debug!(post_id = %post.id, viewer_id = %viewer_id, "Counted first view");
    Ok(true)
}
