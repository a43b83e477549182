// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServiceDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use identity_client::{UserProfile, UserSummary};
use sqlx::PgPool;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use super::{BaseIdentityService, BaseMediaStore, ServiceDeps};

// =============================================================================
// Mock Identity Service
// =============================================================================

pub struct MockIdentityService {
    /// Registered users returned by summary lookups
    users: Arc<Mutex<HashMap<Uuid, UserSummary>>>,
    /// Profile returned for any token, unless failing
    current: Arc<Mutex<Option<UserProfile>>>,
    /// User ids whose summary lookups fail
    failing_users: Arc<Mutex<HashSet<Uuid>>>,
    fail_current: Arc<Mutex<bool>>,
    fail_all: Arc<Mutex<bool>>,
    current_user_calls: Arc<Mutex<Vec<String>>>,
    summary_calls: Arc<Mutex<Vec<Uuid>>>,
}

impl MockIdentityService {
    pub fn new() -> Self {
        Self {
            users: Arc::new(Mutex::new(HashMap::new())),
            current: Arc::new(Mutex::new(None)),
            failing_users: Arc::new(Mutex::new(HashSet::new())),
            fail_current: Arc::new(Mutex::new(false)),
            fail_all: Arc::new(Mutex::new(false)),
            current_user_calls: Arc::new(Mutex::new(Vec::new())),
            summary_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Register a user returned by summary lookups
    pub fn with_user(self, id: Uuid, name: &str) -> Self {
        self.users.lock().unwrap().insert(
            id,
            UserSummary {
                id,
                name: name.to_string(),
            },
        );
        self
    }

    /// Set the profile resolved from any token
    pub fn with_current_user(self, id: Uuid, name: &str) -> Self {
        *self.current.lock().unwrap() = Some(UserProfile {
            id,
            name: name.to_string(),
            email: Some(format!("{}@example.org", name)),
            mobile_no: None,
        });
        self
    }

    /// Make summary lookups for one user id fail
    pub fn with_failing_user(self, id: Uuid) -> Self {
        self.failing_users.lock().unwrap().insert(id);
        self
    }

    /// Make token resolution fail
    pub fn failing_current(self) -> Self {
        *self.fail_current.lock().unwrap() = true;
        self
    }

    /// Make every call fail (service down)
    pub fn failing(self) -> Self {
        *self.fail_all.lock().unwrap() = true;
        self
    }

    /// Get all tokens passed to current_user
    pub fn current_user_calls(&self) -> Vec<String> {
        self.current_user_calls.lock().unwrap().clone()
    }

    /// Get all user ids that were looked up
    pub fn summary_calls(&self) -> Vec<Uuid> {
        self.summary_calls.lock().unwrap().clone()
    }

    /// Check if a user id was looked up
    pub fn was_resolved(&self, id: Uuid) -> bool {
        self.summary_calls.lock().unwrap().iter().any(|u| *u == id)
    }
}

impl Default for MockIdentityService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseIdentityService for MockIdentityService {
    async fn current_user(&self, token: &str) -> Result<UserProfile> {
        // Record the call
        self.current_user_calls
            .lock()
            .unwrap()
            .push(token.to_string());

        if *self.fail_all.lock().unwrap() || *self.fail_current.lock().unwrap() {
            anyhow::bail!("identity service unavailable");
        }

        let current = self.current.lock().unwrap().clone();
        match current {
            Some(profile) => Ok(profile),
            None => {
                let id = Uuid::new_v4();
                Ok(UserProfile {
                    id,
                    name: format!("user-{}", &id.to_string()[..8]),
                    email: None,
                    mobile_no: None,
                })
            }
        }
    }

    async fn user_summary(&self, user_id: Uuid, _token: &str) -> Result<UserSummary> {
        // Record the call
        self.summary_calls.lock().unwrap().push(user_id);

        if *self.fail_all.lock().unwrap()
            || self.failing_users.lock().unwrap().contains(&user_id)
        {
            anyhow::bail!("identity lookup failed for {}", user_id);
        }

        let known = self.users.lock().unwrap().get(&user_id).cloned();
        Ok(known.unwrap_or_else(|| UserSummary {
            id: user_id,
            name: format!("user-{}", &user_id.to_string()[..8]),
        }))
    }
}

// =============================================================================
// Mock Media Store
// =============================================================================

pub struct MockMediaStore {
    /// Queued URLs to return; falls back to a derived mock URL
    responses: Arc<Mutex<Vec<String>>>,
    uploads: Arc<Mutex<Vec<String>>>,
    fail: Arc<Mutex<bool>>,
}

impl MockMediaStore {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            uploads: Arc::new(Mutex::new(Vec::new())),
            fail: Arc::new(Mutex::new(false)),
        }
    }

    /// Queue a URL to be returned for the next upload
    pub fn with_url(self, url: &str) -> Self {
        self.responses.lock().unwrap().push(url.to_string());
        self
    }

    /// Make every upload fail
    pub fn failing(self) -> Self {
        *self.fail.lock().unwrap() = true;
        self
    }

    /// Get all filenames that were uploaded
    pub fn uploads(&self) -> Vec<String> {
        self.uploads.lock().unwrap().clone()
    }

    /// Check if a filename was uploaded
    pub fn was_uploaded(&self, filename: &str) -> bool {
        self.uploads.lock().unwrap().iter().any(|f| f == filename)
    }
}

impl Default for MockMediaStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseMediaStore for MockMediaStore {
    async fn upload(&self, filename: &str, _bytes: Vec<u8>) -> Result<String> {
        // Record the call
        self.uploads.lock().unwrap().push(filename.to_string());

        if *self.fail.lock().unwrap() {
            anyhow::bail!("media host unavailable");
        }

        let mut responses = self.responses.lock().unwrap();
        if !responses.is_empty() {
            Ok(responses.remove(0))
        } else {
            Ok(format!("https://images.example.org/{}", filename))
        }
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

pub struct TestDependencies {
    pub identity: Arc<MockIdentityService>,
    pub media: Arc<MockMediaStore>,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            identity: Arc::new(MockIdentityService::new()),
            media: Arc::new(MockMediaStore::new()),
        }
    }

    /// Set a mock identity service
    pub fn mock_identity(mut self, identity: MockIdentityService) -> Self {
        self.identity = Arc::new(identity);
        self
    }

    /// Set a mock media store
    pub fn mock_media(mut self, media: MockMediaStore) -> Self {
        self.media = Arc::new(media);
        self
    }

    /// Convert into ServiceDeps for testing
    pub fn into_deps(self, db_pool: PgPool) -> ServiceDeps {
        ServiceDeps::new(db_pool, self.identity, Some(self.media))
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
