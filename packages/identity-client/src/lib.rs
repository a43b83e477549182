//! Pure REST client for the user identity service
//!
//! A clean, minimal client for the identity service HTTP API with no
//! domain-specific logic. Resolves bearer tokens to the authenticated
//! user and user ids to public summaries.
//!
//! # Example
//!
//! ```rust,ignore
//! use identity_client::IdentityClient;
//!
//! let client = IdentityClient::from_env()?;
//!
//! // Who is the caller?
//! let me = client.get_current_user(token).await?;
//!
//! // Public view of another user
//! let author = client.get_user(author_id, token).await?;
//! ```

pub mod error;
pub mod types;

pub use error::{IdentityError, Result};
pub use types::{UserProfile, UserSummary};

use reqwest::Client;
use tracing::warn;
use uuid::Uuid;

/// Pure identity service API client.
#[derive(Clone)]
pub struct IdentityClient {
    http_client: Client,
    base_url: String,
}

impl IdentityClient {
    /// Create a new client against the given service base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create from environment variable `USER_SERVICE_URL`.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("USER_SERVICE_URL")
            .map_err(|_| IdentityError::Config("USER_SERVICE_URL not set".into()))?;
        Ok(Self::new(base_url))
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a bearer token to the authenticated user's full profile.
    ///
    /// A rejected or expired token surfaces as an `Api` error; this client
    /// never substitutes an empty user for a failed lookup.
    pub async fn get_current_user(&self, token: &str) -> Result<UserProfile> {
        let response = self
            .http_client
            .get(format!("{}/user/get_current_user", self.base_url))
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Identity service request failed");
                IdentityError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Identity service rejected token");
            return Err(IdentityError::Api(format!(
                "Identity service error: {}",
                error_text
            )));
        }

        response
            .json()
            .await
            .map_err(|e| IdentityError::Parse(e.to_string()))
    }

    /// Resolve a user id to its public summary.
    pub async fn get_user(&self, user_id: Uuid, token: &str) -> Result<UserSummary> {
        let response = self
            .http_client
            .get(format!("{}/users/{}", self.base_url, user_id))
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, user_id = %user_id, "Identity service request failed");
                IdentityError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, user_id = %user_id, error = %error_text, "Identity lookup failed");
            return Err(IdentityError::Api(format!(
                "Identity service error: {}",
                error_text
            )));
        }

        response
            .json()
            .await
            .map_err(|e| IdentityError::Parse(e.to_string()))
    }
}
