//! Integration tests for post listing and filters.
//!
//! The test database is shared across suites, so every test scopes its
//! assertions with a unique tag or text marker.

mod common;

use crate::common::{create_test_post, test_user, unique_marker, TestHarness};
use discussion_core::domains::hashtags::actions::{parse_tags, reconcile};
use discussion_core::domains::posts::actions::list_posts;
use discussion_core::kernel::{MockIdentityService, TestDependencies};
use test_context::test_context;
use uuid::Uuid;

// =============================================================================
// Search and Ordering
// =============================================================================

/// list_posts returns matching posts as aggregated trees, newest first.
#[test_context(TestHarness)]
#[tokio::test]
async fn lists_matching_posts_newest_first(ctx: &TestHarness) {
    let author = test_user();
    let marker = unique_marker("feed");

    let oldest = create_test_post(&ctx.db_pool, author, &format!("{} oldest", marker))
        .await
        .unwrap();
    let middle = create_test_post(&ctx.db_pool, author, &format!("{} middle", marker))
        .await
        .unwrap();
    let newest = create_test_post(&ctx.db_pool, author, &format!("{} newest", marker))
        .await
        .unwrap();

    let deps = ctx.deps(TestDependencies::new().mock_identity(
        MockIdentityService::new().with_current_user(Uuid::new_v4(), "lister"),
    ));

    let results = list_posts("token", None, Some(marker.as_str()), 0, 100, &deps)
        .await
        .unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].id, newest.id);
    assert_eq!(results[1].id, middle.id);
    assert_eq!(results[2].id, oldest.id);
}

/// Text search matches case-insensitively.
#[test_context(TestHarness)]
#[tokio::test]
async fn search_is_case_insensitive(ctx: &TestHarness) {
    let author = test_user();
    let marker = unique_marker("casefold");

    let post = create_test_post(&ctx.db_pool, author, &format!("Gardening {}", marker))
        .await
        .unwrap();

    let deps = ctx.deps(TestDependencies::new().mock_identity(
        MockIdentityService::new().with_current_user(Uuid::new_v4(), "lister"),
    ));

    let upper = marker.to_uppercase();
    let results = list_posts("token", None, Some(upper.as_str()), 0, 100, &deps)
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, post.id);
}

// =============================================================================
// Tag Filter
// =============================================================================

/// The tag filter keeps posts carrying at least one of the given tags.
#[test_context(TestHarness)]
#[tokio::test]
async fn tag_filter_keeps_tagged_posts(ctx: &TestHarness) {
    let author = test_user();
    let alpha = unique_marker("alpha");
    let beta = unique_marker("beta");

    let tagged_alpha = create_test_post(&ctx.db_pool, author, "about alpha")
        .await
        .unwrap();
    reconcile(tagged_alpha.id, &parse_tags(&alpha), &ctx.db_pool)
        .await
        .unwrap();

    let tagged_beta = create_test_post(&ctx.db_pool, author, "about beta")
        .await
        .unwrap();
    reconcile(tagged_beta.id, &parse_tags(&beta), &ctx.db_pool)
        .await
        .unwrap();

    let untagged = create_test_post(&ctx.db_pool, author, "about nothing")
        .await
        .unwrap();

    let deps = ctx.deps(TestDependencies::new().mock_identity(
        MockIdentityService::new().with_current_user(Uuid::new_v4(), "lister"),
    ));

    let filter = vec![alpha.clone(), beta.clone()];
    let results = list_posts("token", Some(&filter), None, 0, 100, &deps)
        .await
        .unwrap();

    let ids: Vec<_> = results.iter().map(|p| p.id).collect();
    assert!(ids.contains(&tagged_alpha.id));
    assert!(ids.contains(&tagged_beta.id));
    assert!(!ids.contains(&untagged.id));

    let only_alpha = vec![alpha.clone()];
    let results = list_posts("token", Some(&only_alpha), None, 0, 100, &deps)
        .await
        .unwrap();
    let ids: Vec<_> = results.iter().map(|p| p.id).collect();
    assert!(ids.contains(&tagged_alpha.id));
    assert!(!ids.contains(&tagged_beta.id));
}

/// Tag and search filters combine.
#[test_context(TestHarness)]
#[tokio::test]
async fn tag_and_search_filters_combine(ctx: &TestHarness) {
    let author = test_user();
    let alpha = unique_marker("alpha");
    let marker = unique_marker("combo");

    let matching = create_test_post(&ctx.db_pool, author, &format!("{} matching", marker))
        .await
        .unwrap();
    reconcile(matching.id, &parse_tags(&alpha), &ctx.db_pool)
        .await
        .unwrap();

    let wrong_text = create_test_post(&ctx.db_pool, author, "tagged but off-topic")
        .await
        .unwrap();
    reconcile(wrong_text.id, &parse_tags(&alpha), &ctx.db_pool)
        .await
        .unwrap();

    create_test_post(&ctx.db_pool, author, &format!("{} untagged", marker))
        .await
        .unwrap();

    let deps = ctx.deps(TestDependencies::new().mock_identity(
        MockIdentityService::new().with_current_user(Uuid::new_v4(), "lister"),
    ));

    let filter = vec![alpha.clone()];
    let results = list_posts(
        "token",
        Some(&filter),
        Some(marker.as_str()),
        0,
        100,
        &deps,
    )
    .await
    .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, matching.id);
}

// =============================================================================
// Paging
// =============================================================================

/// skip and limit page through matching posts in order.
#[test_context(TestHarness)]
#[tokio::test]
async fn skip_and_limit_page_through_results(ctx: &TestHarness) {
    let author = test_user();
    let marker = unique_marker("page");

    let mut ids = Vec::new();
    for i in 0..5 {
        let post = create_test_post(&ctx.db_pool, author, &format!("{} item {}", marker, i))
            .await
            .unwrap();
        ids.push(post.id);
    }
    // Newest first
    ids.reverse();

    let deps = ctx.deps(TestDependencies::new().mock_identity(
        MockIdentityService::new().with_current_user(Uuid::new_v4(), "lister"),
    ));

    let page = list_posts("token", None, Some(marker.as_str()), 1, 2, &deps)
        .await
        .unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(page[0].id, ids[1]);
    assert_eq!(page[1].id, ids[2]);
}
