//! Integration tests for post view counting.
//!
//! A post's view count moves at most once per (post, viewer) pair, and
//! the author's own reads never move it.

mod common;

use crate::common::{create_test_post, test_user, TestHarness};
use discussion_core::domains::posts::actions::{get_post, record_view};
use discussion_core::domains::posts::models::{Post, PostView};
use discussion_core::kernel::{MockIdentityService, TestDependencies};
use test_context::test_context;
use uuid::Uuid;

// =============================================================================
// record_view
// =============================================================================

/// The first view from another user counts.
#[test_context(TestHarness)]
#[tokio::test]
async fn first_view_counts(ctx: &TestHarness) {
    let author = test_user();
    let viewer = test_user();
    let post = create_test_post(&ctx.db_pool, author, "a post").await.unwrap();

    let counted = record_view(&post, viewer, &ctx.db_pool).await.unwrap();
    assert!(counted);

    let reloaded = Post::find_by_id(post.id, &ctx.db_pool)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.view_count, 1);

    let view = PostView::find_by_post_and_user(post.id, viewer, &ctx.db_pool)
        .await
        .unwrap();
    assert!(view.is_some());
}

/// Repeat views from the same user do not count again.
#[test_context(TestHarness)]
#[tokio::test]
async fn repeat_view_does_not_count(ctx: &TestHarness) {
    let author = test_user();
    let viewer = test_user();
    let post = create_test_post(&ctx.db_pool, author, "a post").await.unwrap();

    assert!(record_view(&post, viewer, &ctx.db_pool).await.unwrap());
    assert!(!record_view(&post, viewer, &ctx.db_pool).await.unwrap());

    let reloaded = Post::find_by_id(post.id, &ctx.db_pool)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.view_count, 1);
}

/// The author viewing their own post never counts.
#[test_context(TestHarness)]
#[tokio::test]
async fn author_view_does_not_count(ctx: &TestHarness) {
    let author = test_user();
    let post = create_test_post(&ctx.db_pool, author, "my own post")
        .await
        .unwrap();

    let counted = record_view(&post, author, &ctx.db_pool).await.unwrap();
    assert!(!counted);

    let reloaded = Post::find_by_id(post.id, &ctx.db_pool)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.view_count, 0);

    let views = PostView::find_for_post(post.id, &ctx.db_pool).await.unwrap();
    assert!(views.is_empty());
}

/// Distinct viewers each count once.
#[test_context(TestHarness)]
#[tokio::test]
async fn distinct_viewers_each_count(ctx: &TestHarness) {
    let author = test_user();
    let post = create_test_post(&ctx.db_pool, author, "popular post")
        .await
        .unwrap();

    for _ in 0..3 {
        assert!(record_view(&post, test_user(), &ctx.db_pool).await.unwrap());
    }

    let reloaded = Post::find_by_id(post.id, &ctx.db_pool)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.view_count, 3);
}

/// Concurrent first views from N distinct viewers all land: total
/// increment is N, no lost updates.
#[test_context(TestHarness)]
#[tokio::test]
async fn concurrent_distinct_viewers_all_count(ctx: &TestHarness) {
    let author = test_user();
    let post = create_test_post(&ctx.db_pool, author, "viral post")
        .await
        .unwrap();

    let viewers: i64 = 8;
    let mut handles = Vec::new();
    for _ in 0..viewers {
        let viewer = test_user();
        let pool = ctx.db_pool.clone();
        let post = post.clone();
        handles.push(tokio::spawn(async move {
            record_view(&post, viewer, &pool).await
        }));
    }

    for handle in handles {
        assert!(handle.await.unwrap().unwrap());
    }

    let reloaded = Post::find_by_id(post.id, &ctx.db_pool)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.view_count, viewers);

    let views = PostView::find_for_post(post.id, &ctx.db_pool).await.unwrap();
    assert_eq!(views.len(), viewers as usize);
}

/// Concurrent duplicate views from one viewer count exactly once.
#[test_context(TestHarness)]
#[tokio::test]
async fn concurrent_duplicate_views_count_once(ctx: &TestHarness) {
    let author = test_user();
    let viewer = test_user();
    let post = create_test_post(&ctx.db_pool, author, "contended post")
        .await
        .unwrap();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let pool = ctx.db_pool.clone();
        let post = post.clone();
        handles.push(tokio::spawn(async move {
            record_view(&post, viewer, &pool).await
        }));
    }

    let mut counted = 0;
    for handle in handles {
        if handle.await.unwrap().unwrap() {
            counted += 1;
        }
    }
    assert_eq!(counted, 1);

    let reloaded = Post::find_by_id(post.id, &ctx.db_pool)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.view_count, 1);
}

// =============================================================================
// get_post view integration
// =============================================================================

/// get_post counts the caller's first view and returns the bumped count.
#[test_context(TestHarness)]
#[tokio::test]
async fn get_post_counts_first_view(ctx: &TestHarness) {
    let author = test_user();
    let viewer = Uuid::new_v4();
    let post = create_test_post(&ctx.db_pool, author, "read me").await.unwrap();

    let deps = ctx.deps(TestDependencies::new().mock_identity(
        MockIdentityService::new().with_current_user(viewer, "viewer"),
    ));

    let response = get_post("token", post.id, &deps).await.unwrap();
    assert_eq!(response.view_count, 1);

    let again = get_post("token", post.id, &deps).await.unwrap();
    assert_eq!(again.view_count, 1);
}

/// get_post by the author leaves the count at zero.
#[test_context(TestHarness)]
#[tokio::test]
async fn get_post_by_author_does_not_count(ctx: &TestHarness) {
    let author = test_user();
    let post = create_test_post(&ctx.db_pool, author, "my post").await.unwrap();

    let deps = ctx.deps(TestDependencies::new().mock_identity(
        MockIdentityService::new().with_current_user(author.into_uuid(), "author"),
    ));

    let response = get_post("token", post.id, &deps).await.unwrap();
    assert_eq!(response.view_count, 0);
}
