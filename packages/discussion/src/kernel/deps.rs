//! Service dependencies for actions (using traits for testability)
//!
//! This module provides the central dependency container used by all domain
//! actions. All external services use trait abstractions to enable testing.

use anyhow::Result;
use async_trait::async_trait;
use identity_client::{IdentityClient, UserProfile, UserSummary};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::common::error::DiscussionError;
use crate::config::Config;
use crate::kernel::{BaseIdentityService, BaseMediaStore, ImgbbStore};

// =============================================================================
// IdentityClient Adapter (implements BaseIdentityService trait)
// =============================================================================

/// Wrapper around IdentityClient that implements BaseIdentityService trait
pub struct IdentityAdapter(pub Arc<IdentityClient>);

impl IdentityAdapter {
    pub fn new(client: Arc<IdentityClient>) -> Self {
        Self(client)
    }
}

#[async_trait]
impl BaseIdentityService for IdentityAdapter {
    async fn current_user(&self, token: &str) -> Result<UserProfile> {
        self.0.get_current_user(token).await.map_err(Into::into)
    }

    async fn user_summary(&self, user_id: Uuid, token: &str) -> Result<UserSummary> {
        self.0.get_user(user_id, token).await.map_err(Into::into)
    }
}

// =============================================================================
// ServiceDeps
// =============================================================================

/// Service dependencies accessible to actions (using traits for testability)
#[derive(Clone)]
pub struct ServiceDeps {
    pub db_pool: PgPool,
    pub identity: Arc<dyn BaseIdentityService>,
    /// Media host for image uploads (optional, not all envs need it)
    pub media: Option<Arc<dyn BaseMediaStore>>,
}

impl ServiceDeps {
    /// Create new ServiceDeps with the given dependencies
    pub fn new(
        db_pool: PgPool,
        identity: Arc<dyn BaseIdentityService>,
        media: Option<Arc<dyn BaseMediaStore>>,
    ) -> Self {
        Self {
            db_pool,
            identity,
            media,
        }
    }

    /// Resolve the caller's bearer token to their profile.
    ///
    /// Any identity-service failure surfaces as a dependency error; a
    /// caller is never silently anonymous.
    pub async fn authenticate(
        &self,
        token: &str,
    ) -> Result<UserProfile, DiscussionError> {
        self.identity
            .current_user(token)
            .await
            .map_err(DiscussionError::dependency)
    }

    /// Wire up production dependencies from configuration
    pub fn from_config(config: &Config, db_pool: PgPool) -> Self {
        let identity_client = Arc::new(IdentityClient::new(config.user_service_url.clone()));
        let identity: Arc<dyn BaseIdentityService> =
            Arc::new(IdentityAdapter::new(identity_client));

        let media: Option<Arc<dyn BaseMediaStore>> = config
            .imgbb_api_key
            .as_ref()
            .map(|key| {
                Arc::new(ImgbbStore::new(config.imgbb_base_url.clone(), key.clone()))
                    as Arc<dyn BaseMediaStore>
            });

        Self::new(db_pool, identity, media)
    }
}
