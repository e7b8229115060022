// SPDX-License-Identifier: MPL-2.0
//! The single manifest load attempt and the live-vs-demo decision.

use super::{fallback_images, parse, ImageRecord, ManifestSource};
use crate::error::ManifestError;
use crate::gallery::GalleryState;

/// Fetches and parses the manifest once, then settles the gallery.
///
/// Network failures, non-success statuses and manifests without a single
/// valid record all produce the demo collection with `using_fallback` set.
/// Nothing is published before the decision completes.
pub async fn load<S: ManifestSource>(source: &S) -> GalleryState {
    tracing::debug!(source = %source.describe(), "fetching manifest");
    let fetched = source.fetch().await;
    settle(decide(fetched))
}

/// Turns a fetch result into the live records or the reason to fall back.
///
/// # Errors
///
/// Passes through [`ManifestError::Unavailable`] and returns
/// [`ManifestError::Empty`] when the text holds no valid record.
pub fn decide(fetched: Result<String, ManifestError>) -> Result<Vec<ImageRecord>, ManifestError> {
    let records = parse(&fetched?);
    if records.is_empty() {
        return Err(ManifestError::Empty);
    }
    Ok(records)
}

/// Builds the settled gallery state for a decision.
#[must_use]
pub fn settle(decision: Result<Vec<ImageRecord>, ManifestError>) -> GalleryState {
    match decision {
        Ok(records) => {
            tracing::info!(count = records.len(), "loaded photographs from manifest");
            GalleryState::settled(records, false)
        }
        Err(reason) => {
            tracing::warn!(%reason, "falling back to demo gallery");
            GalleryState::settled(fallback_images(), true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_falls_back() {
        let state = settle(decide(Err(ManifestError::unavailable("offline"))));
        assert!(state.using_fallback());
        assert!(!state.is_loading());
        assert_eq!(state.images().to_vec(), fallback_images());
    }

    #[test]
    fn comment_only_manifest_is_empty() {
        let decision = decide(Ok("# only comments\n".to_string()));
        assert_eq!(decision, Err(ManifestError::Empty));
    }

    #[test]
    fn empty_and_unavailable_settle_identically() {
        let empty = settle(decide(Ok(String::new())));
        let offline = settle(decide(Err(ManifestError::unavailable("timeout"))));
        assert_eq!(empty, offline);
    }

    #[test]
    fn live_records_are_kept_in_order() {
        let text = "http://a.com/1.jpg|One\nhttp://a.com/2.jpg\nhttp://a.com/3.jpg|Three";
        let state = settle(decide(Ok(text.to_string())));

        assert!(!state.using_fallback());
        assert_eq!(state.len(), 3);
        assert_eq!(state.get(0).map(ImageRecord::url), Some("http://a.com/1.jpg"));
        assert_eq!(state.get(2).and_then(ImageRecord::description), Some("Three"));
    }
}
