// SPDX-License-Identifier: MPL-2.0
//! Manifest ingestion: the line-oriented text format listing the gallery's
//! images, the bundled demo collection, and the single load attempt that
//! decides between them.
//!
//! # Format
//!
//! ```text
//! # comments and blank lines are ignored
//! https://example.com/a.jpg | Caption with | pipes allowed
//! [https://example.com/b.jpg]
//! ```

pub mod fallback;
pub mod loader;
pub mod parser;
pub mod source;

pub use fallback::fallback_images;
pub use loader::load;
pub use parser::parse;
pub use source::{FileManifestSource, HttpManifestSource, ManifestLocation, ManifestSource};

/// A validated `(url, description)` pair derived from one manifest line.
///
/// Records are immutable once built; order within a sequence is the display
/// and navigation order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRecord {
    url: String,
    description: Option<String>,
}

impl ImageRecord {
    /// Builds a record. An empty description is normalized to `None`.
    #[must_use]
    pub fn new(url: impl Into<String>, description: Option<String>) -> Self {
        Self {
            url: url.into(),
            description: description.filter(|text| !text.is_empty()),
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
