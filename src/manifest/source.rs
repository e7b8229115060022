// SPDX-License-Identifier: MPL-2.0
//! Where the manifest text comes from.
//!
//! The loader only sees the [`ManifestSource`] trait; the application picks an
//! HTTP or local-file source from configuration via [`ManifestLocation`].

use crate::error::ManifestError;
use std::fmt;
use std::future::Future;
use std::path::PathBuf;

/// A readable manifest resource. One call to `fetch` is one load attempt.
pub trait ManifestSource: Send + Sync {
    /// Reads the raw manifest text.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Unavailable`] when the resource cannot be read
    /// or the server answers with a non-success status.
    fn fetch(&self) -> impl Future<Output = Result<String, ManifestError>> + Send;

    /// Human-readable location used in log lines.
    fn describe(&self) -> String;
}

/// Fetches the manifest over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpManifestSource {
    client: reqwest::Client,
    url: String,
}

impl HttpManifestSource {
    #[must_use]
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

impl ManifestSource for HttpManifestSource {
    async fn fetch(&self) -> Result<String, ManifestError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| ManifestError::unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ManifestError::unavailable(format!("HTTP status: {status}")));
        }

        response
            .text()
            .await
            .map_err(|e| ManifestError::unavailable(e.to_string()))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Reads the manifest from the local filesystem.
#[derive(Debug, Clone)]
pub struct FileManifestSource {
    path: PathBuf,
}

impl FileManifestSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ManifestSource for FileManifestSource {
    async fn fetch(&self) -> Result<String, ManifestError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| ManifestError::unavailable(format!("{}: {e}", self.path.display())))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Configured manifest location, resolved from a CLI flag or settings value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestLocation {
    Remote(String),
    Local(PathBuf),
}

impl ManifestLocation {
    /// Values with an `http://` or `https://` scheme are remote, anything else
    /// is treated as a filesystem path.
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        let raw = raw.trim();
        let lower = raw.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            ManifestLocation::Remote(raw.to_string())
        } else {
            ManifestLocation::Local(PathBuf::from(raw))
        }
    }

    /// Builds the matching source. Remote sources share the given client.
    #[must_use]
    pub fn into_source(self, client: reqwest::Client) -> ConfiguredSource {
        match self {
            ManifestLocation::Remote(url) => {
                ConfiguredSource::Http(HttpManifestSource::new(client, url))
            }
            ManifestLocation::Local(path) => ConfiguredSource::File(FileManifestSource::new(path)),
        }
    }
}

impl fmt::Display for ManifestLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestLocation::Remote(url) => write!(f, "{url}"),
            ManifestLocation::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Runtime choice between the two built-in sources.
#[derive(Debug, Clone)]
pub enum ConfiguredSource {
    Http(HttpManifestSource),
    File(FileManifestSource),
}

impl ManifestSource for ConfiguredSource {
    async fn fetch(&self) -> Result<String, ManifestError> {
        match self {
            ConfiguredSource::Http(source) => source.fetch().await,
            ConfiguredSource::File(source) => source.fetch().await,
        }
    }

    fn describe(&self) -> String {
        match self {
            ConfiguredSource::Http(source) => source.describe(),
            ConfiguredSource::File(source) => source.describe(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn http_and_https_are_remote() {
        assert_eq!(
            ManifestLocation::from_raw("https://cdn.example.com/images1.txt"),
            ManifestLocation::Remote("https://cdn.example.com/images1.txt".into())
        );
        assert!(matches!(
            ManifestLocation::from_raw("HTTP://example.com/list.txt"),
            ManifestLocation::Remote(_)
        ));
    }

    #[test]
    fn other_values_are_local_paths() {
        assert_eq!(
            ManifestLocation::from_raw(" images1.txt "),
            ManifestLocation::Local(PathBuf::from("images1.txt"))
        );
    }

    #[tokio::test]
    async fn file_source_reads_contents() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("images1.txt");
        std::fs::write(&path, "http://a.com/1.jpg|One\n").expect("write manifest");

        let text = FileManifestSource::new(&path).fetch().await.expect("read");
        assert_eq!(text, "http://a.com/1.jpg|One\n");
    }

    #[tokio::test]
    async fn file_with_byte_order_mark_loads_live() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("images1.txt");
        std::fs::write(&path, "\u{FEFF}https://a.com/only.jpg | Only\n").expect("write manifest");

        let state = crate::manifest::load(&FileManifestSource::new(&path)).await;
        assert!(!state.using_fallback());
        assert_eq!(state.len(), 1);
        assert_eq!(state.images()[0].url(), "https://a.com/only.jpg");
    }

    #[tokio::test]
    async fn missing_file_is_unavailable() {
        let dir = tempdir().expect("create temp dir");
        let source = FileManifestSource::new(dir.path().join("missing.txt"));

        let err = source.fetch().await.expect_err("missing file must fail");
        assert!(matches!(err, ManifestError::Unavailable { .. }));
    }
}
