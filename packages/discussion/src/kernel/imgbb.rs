use anyhow::Result;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use tracing::{error, info};

use super::traits::BaseMediaStore;

/// Imgbb image hosting client
/// Relays uploaded image bytes to the media host and returns the public URL
pub struct ImgbbStore {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct ImgbbResponse {
    data: Option<ImgbbData>,
    error: Option<ImgbbError>,
}

#[derive(Debug, Deserialize)]
struct ImgbbData {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ImgbbError {
    message: String,
}

impl ImgbbStore {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl BaseMediaStore for ImgbbStore {
    async fn upload(&self, filename: &str, bytes: Vec<u8>) -> Result<String> {
        let form = Form::new().part(
            "image",
            Part::bytes(bytes).file_name(filename.to_string()),
        );

        info!(filename = %filename, "Uploading image to media host");

        let response = self
            .client
            .post(format!("{}/upload", self.base_url))
            .query(&[("key", self.api_key.as_str()), ("name", filename)])
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("Image upload failed {}: {}", status, body);
            anyhow::bail!("Media host error {}: {}", status, body);
        }

        let upload: ImgbbResponse = response.json().await?;

        match upload.data {
            Some(data) => Ok(data.url),
            None => {
                let message = upload
                    .error
                    .map(|e| e.message)
                    .unwrap_or_else(|| "Unknown error".to_string());
                error!("Image upload rejected: {}", message);
                anyhow::bail!("Upload failed: {}", message);
            }
        }
    }
}
