use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub user_service_url: String,
    pub imgbb_base_url: String,
    pub imgbb_api_key: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .context("DATABASE_URL must be set")?,
            user_service_url: env::var("USER_SERVICE_URL")
                .context("USER_SERVICE_URL must be set")?,
            imgbb_base_url: env::var("IMGBB_BASE_URL")
                .unwrap_or_else(|_| "https://api.imgbb.com/1".to_string()),
            imgbb_api_key: env::var("IMGBB_API_KEY").ok(),
        })
    }
}
