// SPDX-License-Identifier: MPL-2.0
//! Authoritative gallery data: the image list and how it was obtained.

use crate::manifest::ImageRecord;
use std::sync::Arc;

/// Gallery data for one session.
///
/// Starts in the loading state with no images and settles exactly once, either
/// with the live manifest or with the bundled demo collection. The image list
/// is shared (not copied) with lightbox sessions and never changes after
/// settling.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryState {
    images: Arc<[ImageRecord]>,
    loading: bool,
    using_fallback: bool,
}

/// What the footer summary shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Summary {
    Loading,
    Demo,
    Live { count: usize },
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::loading()
    }
}

impl GalleryState {
    /// Initial state at boot: loading, no images.
    #[must_use]
    pub fn loading() -> Self {
        Self {
            images: Arc::from(Vec::new()),
            loading: true,
            using_fallback: false,
        }
    }

    /// A settled state carrying the final image list.
    #[must_use]
    pub fn settled(images: Vec<ImageRecord>, using_fallback: bool) -> Self {
        Self {
            images: Arc::from(images),
            loading: false,
            using_fallback,
        }
    }

    /// Applies the load result. Only the first settle is accepted; returns
    /// `false` when this state has already settled or `outcome` is not settled.
    pub fn settle(&mut self, outcome: GalleryState) -> bool {
        if !self.loading || outcome.loading {
            return false;
        }
        *self = outcome;
        true
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn using_fallback(&self) -> bool {
        self.using_fallback
    }

    #[must_use]
    pub fn images(&self) -> &Arc<[ImageRecord]> {
        &self.images
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ImageRecord> {
        self.images.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Footer summary derived from the image count and fallback flag.
    #[must_use]
    pub fn summary(&self) -> Summary {
        if self.loading {
            Summary::Loading
        } else if self.using_fallback {
            Summary::Demo
        } else {
            Summary::Live {
                count: self.images.len(),
            }
        }
    }
}
