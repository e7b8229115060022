// SPDX-License-Identifier: MPL-2.0
//! Error taxonomy shared across the crate.
//!
//! Data-layer failures (manifest, per-image assets) are absorbed into typed
//! state by their owning component; these types only carry the cause so it can
//! be logged or shown as technical details.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Manifest Error: {0}")]
    Manifest(#[from] ManifestError),
    #[error("Image Error: {0}")]
    Image(String),
    #[error("Network Error: {0}")]
    Network(String),
}

/// Reasons the live manifest could not be used.
///
/// Both variants lead to the same recovery (the bundled demo collection); the
/// distinction only survives for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ManifestError {
    /// Network failure, unreadable file, or a non-success response status.
    #[error("manifest unavailable: {reason}")]
    Unavailable { reason: String },

    /// The manifest was read but yielded zero valid records.
    #[error("manifest contains no valid records")]
    Empty,
}

impl ManifestError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        ManifestError::Unavailable {
            reason: reason.into(),
        }
    }
}

impl Error {
    /// Returns the i18n message key used when this error is shown to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Manifest(_) => "error-manifest",
            Error::Image(_) => "error-image-decode",
            Error::Network(_) => "error-image-network",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn manifest_error_wraps_into_crate_error() {
        let err: Error = ManifestError::Empty.into();
        assert!(matches!(err, Error::Manifest(ManifestError::Empty)));
        assert_eq!(
            format!("{}", err),
            "Manifest Error: manifest contains no valid records"
        );
    }

    #[test]
    fn unavailable_reason_is_kept() {
        let err = ManifestError::unavailable("HTTP status: 404 Not Found");
        assert_eq!(
            err.to_string(),
            "manifest unavailable: HTTP status: 404 Not Found"
        );
    }

    #[test]
    fn i18n_keys_are_distinct_for_asset_failures() {
        assert_ne!(
            Error::Image("x".into()).i18n_key(),
            Error::Network("x".into()).i18n_key()
        );
    }
}
