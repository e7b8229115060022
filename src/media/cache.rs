// SPDX-License-Identifier: MPL-2.0
//! Byte-bounded LRU cache of decoded lightbox images.
//!
//! - **LRU eviction**: least recently used images are evicted first
//! - **Memory-bounded**: total decoded size is limited by a byte budget
//! - **URL-keyed**: entries are indexed by the manifest URL

use crate::media::ImageData;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Default cache budget (96 MB), roughly a dozen full-HD photos.
pub const DEFAULT_CACHE_BYTES: usize = 96 * 1024 * 1024;

/// Upper bound on the number of entries regardless of their size.
const MAX_ENTRIES: NonZeroUsize = match NonZeroUsize::new(64) {
    Some(n) => n,
    None => unreachable!(),
};

/// Hit/miss counters, logged when a lightbox session closes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

pub struct ImageCache {
    cache: LruCache<String, ImageData>,
    max_bytes: usize,
    current_bytes: usize,
    stats: CacheStats,
}

impl ImageCache {
    #[must_use]
    pub fn new(max_bytes: usize) -> Self {
        Self {
            cache: LruCache::new(MAX_ENTRIES),
            max_bytes,
            current_bytes: 0,
            stats: CacheStats::default(),
        }
    }

    /// Inserts an image. Returns `false` when it is larger than half the budget.
    pub fn insert(&mut self, url: String, image: ImageData) -> bool {
        let size = image.size_bytes();
        if size > self.max_bytes / 2 {
            return false;
        }

        if let Some(existing) = self.cache.pop(&url) {
            self.current_bytes = self.current_bytes.saturating_sub(existing.size_bytes());
        }

        while self.current_bytes + size > self.max_bytes {
            let Some((_, evicted)) = self.cache.pop_lru() else {
                break;
            };
            self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes());
            self.stats.evictions += 1;
        }

        if let Some((_, evicted)) = self.cache.push(url, image) {
            // Entry-count eviction (the key was not present, see pop above).
            self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes());
            self.stats.evictions += 1;
        }
        self.current_bytes += size;
        true
    }

    /// Returns a cheap clone of the cached image and refreshes its LRU position.
    pub fn get(&mut self, url: &str) -> Option<ImageData> {
        match self.cache.get(url) {
            Some(image) => {
                self.stats.hits += 1;
                Some(image.clone())
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    #[must_use]
    pub fn contains(&self, url: &str) -> bool {
        self.cache.contains(url)
    }

    pub fn clear(&mut self) {
        self.cache.clear();
        self.current_bytes = 0;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.current_bytes
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_BYTES)
    }
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("image_count", &self.cache.len())
            .field("memory_usage", &self.current_bytes)
            .field("max_bytes", &self.max_bytes)
            .field("stats", &self.stats)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(width: u32, height: u32) -> ImageData {
        ImageData::from_rgba(width, height, vec![0; (width * height * 4) as usize])
    }

    #[test]
    fn new_cache_is_empty() {
        let cache = ImageCache::default();
        assert!(cache.is_empty());
        assert_eq!(cache.memory_usage(), 0);
    }

    #[test]
    fn insert_and_get() {
        let mut cache = ImageCache::default();
        assert!(cache.insert("http://a.com/1.jpg".into(), image(10, 10)));

        let hit = cache.get("http://a.com/1.jpg").expect("cached");
        assert_eq!(hit.width, 10);
        assert!(cache.get("http://a.com/2.jpg").is_none());
        assert_eq!(cache.stats().hits, 1);
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn oversized_images_are_rejected() {
        let mut cache = ImageCache::new(1_000);
        assert!(!cache.insert("big".into(), image(20, 20)));
        assert!(cache.is_empty());
    }

    #[test]
    fn least_recently_used_is_evicted_on_byte_limit() {
        // Each 25x25 image is 2_500 bytes; the budget fits two of them.
        let mut cache = ImageCache::new(5_000);
        cache.insert("a".into(), image(25, 25));
        cache.insert("b".into(), image(25, 25));
        let _ = cache.get("a");
        cache.insert("c".into(), image(25, 25));

        assert!(cache.contains("a"));
        assert!(!cache.contains("b"));
        assert!(cache.contains("c"));
        assert_eq!(cache.memory_usage(), 5_000);
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn reinserting_same_key_does_not_double_count() {
        let mut cache = ImageCache::new(10_000);
        cache.insert("a".into(), image(10, 10));
        cache.insert("a".into(), image(10, 10));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.memory_usage(), 400);
    }

    #[test]
    fn clear_resets_usage() {
        let mut cache = ImageCache::default();
        cache.insert("a".into(), image(10, 10));
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.memory_usage(), 0);
    }
}
