// SPDX-License-Identifier: MPL-2.0
//! Per-item asset readiness for the gallery grid.
//!
//! Each rendered item owns one [`ItemLoadTracker`]. Trackers start pending and
//! move once, either to loaded or to errored. Both outcomes are terminal: a
//! late or duplicate signal is ignored, and nothing is retried.
//!
//! [`ItemTrackers`] keeps the trackers in an arena indexed by position. The
//! image list is immutable after the gallery settles, so `(index, url)` is a
//! stable identity and siblings never share state.

use crate::gallery::GalleryState;
use crate::media::ImageData;
use std::time::{Duration, Instant};

/// Readiness of one item's asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemLoadState {
    #[default]
    Pending,
    Loaded,
    Errored,
}

/// State machine for exactly one visual asset.
#[derive(Debug, Clone, Default)]
pub struct ItemLoadTracker {
    state: ItemLoadState,
    content: Option<ImageData>,
    loaded_at: Option<Instant>,
    error: Option<String>,
}

impl ItemLoadTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> ItemLoadState {
        self.state
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.state == ItemLoadState::Pending
    }

    /// Records the success signal. Returns `false` if already settled.
    pub fn mark_loaded(&mut self, image: ImageData, now: Instant) -> bool {
        if !self.is_pending() {
            return false;
        }
        self.state = ItemLoadState::Loaded;
        self.content = Some(image);
        self.loaded_at = Some(now);
        true
    }

    /// Records the failure signal. Returns `false` if already settled.
    pub fn mark_errored(&mut self, reason: impl Into<String>) -> bool {
        if !self.is_pending() {
            return false;
        }
        self.state = ItemLoadState::Errored;
        self.error = Some(reason.into());
        true
    }

    /// Decoded content, present only once loaded.
    #[must_use]
    pub fn content(&self) -> Option<&ImageData> {
        self.content.as_ref()
    }

    /// Failure reason, present only once errored.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Opacity of the reveal transition at `now`, in `[0.0, 1.0]`.
    ///
    /// The transition is anchored to the instant the item loaded, so
    /// re-rendering never restarts it.
    #[must_use]
    pub fn reveal_progress(&self, now: Instant, duration: Duration) -> f32 {
        let Some(loaded_at) = self.loaded_at else {
            return 0.0;
        };
        if duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(loaded_at);
        (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_revealing(&self, now: Instant, duration: Duration) -> bool {
        self.loaded_at.is_some() && self.reveal_progress(now, duration) < 1.0
    }
}

/// Outcome of delivering a signal to the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied(ItemLoadState),
    /// The tracker had already settled; the signal was dropped.
    AlreadySettled,
    /// No tracker at that index carries that URL.
    Unknown,
}

/// Arena of trackers, one per gallery item, indexed by position.
#[derive(Debug, Clone, Default)]
pub struct ItemTrackers {
    entries: Vec<(String, ItemLoadTracker)>,
}

impl ItemTrackers {
    /// Creates one pending tracker per image in the settled gallery.
    #[must_use]
    pub fn for_gallery(gallery: &GalleryState) -> Self {
        Self {
            entries: gallery
                .images()
                .iter()
                .map(|record| (record.url().to_string(), ItemLoadTracker::new()))
                .collect(),
        }
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ItemLoadTracker> {
        self.entries.get(index).map(|(_, tracker)| tracker)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Delivers a load result to the tracker identified by `(index, url)`.
    pub fn resolve<E: std::fmt::Display>(
        &mut self,
        index: usize,
        url: &str,
        result: Result<ImageData, E>,
        now: Instant,
    ) -> Resolution {
        let Some((_, tracker)) = self
            .entries
            .get_mut(index)
            .filter(|(tracked_url, _)| tracked_url == url)
        else {
            return Resolution::Unknown;
        };

        let applied = match result {
            Ok(image) => tracker.mark_loaded(image, now),
            Err(err) => tracker.mark_errored(err.to_string()),
        };

        if applied {
            Resolution::Applied(tracker.state())
        } else {
            Resolution::AlreadySettled
        }
    }

    /// Whether any item is still inside its reveal transition.
    #[must_use]
    pub fn any_revealing(&self, now: Instant, duration: Duration) -> bool {
        self.entries
            .iter()
            .any(|(_, tracker)| tracker.is_revealing(now, duration))
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, tracker)| tracker.is_pending())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::ImageRecord;

    const REVEAL: Duration = Duration::from_millis(700);

    fn pixel() -> ImageData {
        ImageData::from_rgba(1, 1, vec![0, 0, 0, 255])
    }

    fn gallery(n: usize) -> GalleryState {
        GalleryState::settled(
            (0..n)
                .map(|i| ImageRecord::new(format!("http://a.com/{i}.jpg"), None))
                .collect(),
            false,
        )
    }

    #[test]
    fn starts_pending_without_content() {
        let tracker = ItemLoadTracker::new();
        assert_eq!(tracker.state(), ItemLoadState::Pending);
        assert!(tracker.content().is_none());
        assert!(tracker.error().is_none());
    }

    #[test]
    fn loaded_is_terminal() {
        let mut tracker = ItemLoadTracker::new();
        assert!(tracker.mark_loaded(pixel(), Instant::now()));
        assert!(!tracker.mark_errored("late failure"));
        assert!(!tracker.mark_loaded(pixel(), Instant::now()));
        assert_eq!(tracker.state(), ItemLoadState::Loaded);
        assert!(tracker.error().is_none());
    }

    #[test]
    fn errored_is_terminal() {
        let mut tracker = ItemLoadTracker::new();
        assert!(tracker.mark_errored("404"));
        assert!(!tracker.mark_loaded(pixel(), Instant::now()));
        assert_eq!(tracker.state(), ItemLoadState::Errored);
        assert!(tracker.content().is_none());
        assert_eq!(tracker.error(), Some("404"));
    }

    #[test]
    fn reveal_runs_once_from_load_instant() {
        let start = Instant::now();
        let mut tracker = ItemLoadTracker::new();
        assert_eq!(tracker.reveal_progress(start, REVEAL), 0.0);

        tracker.mark_loaded(pixel(), start);
        let halfway = tracker.reveal_progress(start + REVEAL / 2, REVEAL);
        assert!((halfway - 0.5).abs() < 0.01);
        assert!(tracker.is_revealing(start + REVEAL / 2, REVEAL));

        // Later renders stay fully revealed.
        assert_eq!(tracker.reveal_progress(start + REVEAL * 3, REVEAL), 1.0);
        assert!(!tracker.is_revealing(start + REVEAL * 3, REVEAL));
    }

    #[test]
    fn zero_duration_reveals_immediately() {
        let now = Instant::now();
        let mut tracker = ItemLoadTracker::new();
        tracker.mark_loaded(pixel(), now);
        assert_eq!(tracker.reveal_progress(now, Duration::ZERO), 1.0);
    }

    #[test]
    fn arena_isolates_siblings() {
        let mut trackers = ItemTrackers::for_gallery(&gallery(3));
        let now = Instant::now();

        let outcome = trackers.resolve(1, "http://a.com/1.jpg", Err("boom"), now);
        assert_eq!(outcome, Resolution::Applied(ItemLoadState::Errored));

        assert!(trackers.get(0).is_some_and(ItemLoadTracker::is_pending));
        assert!(trackers.get(2).is_some_and(ItemLoadTracker::is_pending));
        assert_eq!(trackers.pending_count(), 2);
    }

    #[test]
    fn arena_rejects_mismatched_identity() {
        let mut trackers = ItemTrackers::for_gallery(&gallery(2));
        let outcome = trackers.resolve(0, "http://a.com/1.jpg", Ok::<_, String>(pixel()), Instant::now());
        assert_eq!(outcome, Resolution::Unknown);
        assert_eq!(
            trackers.resolve(5, "http://a.com/5.jpg", Err("x"), Instant::now()),
            Resolution::Unknown
        );
    }

    #[test]
    fn arena_drops_duplicate_signals() {
        let mut trackers = ItemTrackers::for_gallery(&gallery(1));
        let now = Instant::now();
        trackers.resolve(0, "http://a.com/0.jpg", Ok::<_, String>(pixel()), now);
        let again = trackers.resolve(0, "http://a.com/0.jpg", Err("late"), now);
        assert_eq!(again, Resolution::AlreadySettled);
        assert_eq!(trackers.get(0).map(ItemLoadTracker::state), Some(ItemLoadState::Loaded));
    }

    #[test]
    fn any_revealing_tracks_recent_loads() {
        let mut trackers = ItemTrackers::for_gallery(&gallery(2));
        let now = Instant::now();
        assert!(!trackers.any_revealing(now, REVEAL));

        trackers.resolve(0, "http://a.com/0.jpg", Ok::<_, String>(pixel()), now);
        assert!(trackers.any_revealing(now, REVEAL));
        assert!(!trackers.any_revealing(now + REVEAL, REVEAL));
    }
}
