// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (like "aggregate a post") should be domain functions that
// use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseIdentityService)

use anyhow::Result;
use async_trait::async_trait;
use identity_client::{UserProfile, UserSummary};
use uuid::Uuid;

// =============================================================================
// Identity Service Trait (Infrastructure - user resolution)
// =============================================================================

#[async_trait]
pub trait BaseIdentityService: Send + Sync {
    /// Resolve a bearer token to the authenticated user's profile
    async fn current_user(&self, token: &str) -> Result<UserProfile>;

    /// Resolve a user id to its public summary
    ///
    /// The caller's token is forwarded; the identity service authorizes
    /// lookups itself. Failures must propagate - never substitute an
    /// empty user.
    async fn user_summary(&self, user_id: Uuid, token: &str) -> Result<UserSummary>;
}

// =============================================================================
// Media Store Trait (Infrastructure - image hosting)
// =============================================================================

#[async_trait]
pub trait BaseMediaStore: Send + Sync {
    /// Upload image bytes under the given filename, returning the public URL
    async fn upload(&self, filename: &str, bytes: Vec<u8>) -> Result<String>;
}
