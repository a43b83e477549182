//! Image upload relay to the media host.

use tracing::info;

use crate::common::error::{DiscussionError, Result};
use crate::kernel::ServiceDeps;

/// Upload an image and return its public URL.
///
/// Fails with `DependencyUnavailable` when no media host is configured.
pub async fn upload_image(
    token: &str,
    filename: &str,
    bytes: Vec<u8>,
    deps: &ServiceDeps,
) -> Result<String> {
    deps.authenticate(token).await?;

    let media = deps.media.as_ref().ok_or_else(|| {
        DiscussionError::DependencyUnavailable("media host not configured".to_string())
    })?;

    let url = media
        .upload(filename, bytes)
        .await
        .map_err(DiscussionError::dependency)?;

    info!(filename = %filename, url = %url, "Uploaded post image");

    Ok(url)
}
