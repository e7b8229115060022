// SPDX-License-Identifier: MPL-2.0
//! Downloading and decoding images referenced by the manifest.
//!
//! A completed [`load_image`] is the asset-readiness signal for a gallery item
//! or a lightbox image; any error is the failure signal. Nothing here retries.

use crate::error::{Error, Result};
use crate::media::image::{decode, ImageData};
use futures_util::StreamExt;
use std::time::Duration;

/// Largest response body accepted for a single image (64 MB).
pub const MAX_IMAGE_BYTES: u64 = 64 * 1024 * 1024;

/// Connection timeout for image downloads. The manifest fetch has none.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);

/// Builds the shared HTTP client used for manifest and image requests.
///
/// # Errors
///
/// Returns [`Error::Network`] if the TLS backend cannot be initialised.
pub fn build_client(user_agent: &str) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .connect_timeout(CONNECT_TIMEOUT)
        .user_agent(user_agent)
        .build()
        .map_err(Error::from)
}

/// Downloads the body at `url`, refusing anything larger than [`MAX_IMAGE_BYTES`].
///
/// # Errors
///
/// Returns [`Error::Network`] on transport failures, non-success statuses or
/// oversized bodies.
pub async fn fetch_bytes(client: &reqwest::Client, url: &str) -> Result<Vec<u8>> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Network(format!("HTTP status: {status}")));
    }

    if let Some(length) = response.content_length() {
        check_size(length)?;
    }

    let mut body = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        body.extend_from_slice(&chunk);
        check_size(body.len() as u64)?;
    }

    Ok(body)
}

fn check_size(length: u64) -> Result<()> {
    if length > MAX_IMAGE_BYTES {
        return Err(Error::Network(format!(
            "Response too large ({length} bytes, limit {MAX_IMAGE_BYTES})"
        )));
    }
    Ok(())
}

/// Downloads and decodes an image off the UI thread.
///
/// `max_width` downscales wide images (used for grid thumbnails).
///
/// # Errors
///
/// Propagates download errors and [`Error::Image`] decode failures.
pub async fn load_image(
    client: reqwest::Client,
    url: String,
    max_width: Option<u32>,
) -> Result<ImageData> {
    let bytes = fetch_bytes(&client, &url).await?;
    tokio::task::spawn_blocking(move || decode(&bytes, max_width))
        .await
        .unwrap_or_else(|e| Err(Error::Image(format!("Decode task failed: {e}"))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_limit_is_inclusive() {
        assert!(check_size(MAX_IMAGE_BYTES).is_ok());
        assert!(matches!(
            check_size(MAX_IMAGE_BYTES + 1),
            Err(Error::Network(_))
        ));
    }

    #[test]
    fn client_builds_with_custom_user_agent() {
        assert!(build_client("IcedFolio/0.1.0").is_ok());
    }

    #[tokio::test]
    async fn unreachable_host_is_a_network_error() {
        let client = build_client("IcedFolio/test").expect("client");
        // Port 9 (discard) on localhost is closed in test environments.
        let result = load_image(client, "http://127.0.0.1:9/x.jpg".into(), None).await;
        assert!(matches!(result, Err(Error::Network(_))));
    }
}
