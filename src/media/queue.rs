// SPDX-License-Identifier: MPL-2.0
//! Bounded window of in-flight thumbnail loads.
//!
//! Gallery items are queued in order when the manifest settles. At most
//! `limit` of them download at once; each completion admits the next waiting
//! item.

use std::collections::{BTreeSet, VecDeque};

/// Default number of thumbnails downloaded concurrently.
pub const DEFAULT_MAX_IN_FLIGHT: usize = 6;

/// Minimum accepted concurrency.
pub const MIN_MAX_IN_FLIGHT: usize = 1;

/// Maximum accepted concurrency.
pub const MAX_MAX_IN_FLIGHT: usize = 32;

#[derive(Debug, Clone)]
pub struct LoadQueue {
    waiting: VecDeque<usize>,
    in_flight: BTreeSet<usize>,
    limit: usize,
}

impl Default for LoadQueue {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_IN_FLIGHT)
    }
}

impl LoadQueue {
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            waiting: VecDeque::new(),
            in_flight: BTreeSet::new(),
            limit: limit.clamp(MIN_MAX_IN_FLIGHT, MAX_MAX_IN_FLIGHT),
        }
    }

    /// Queues items `0..len`, replacing any previous contents, and returns the
    /// indices to start now.
    pub fn start(&mut self, len: usize) -> Vec<usize> {
        self.clear();
        self.waiting.extend(0..len);
        self.admit()
    }

    /// Marks `index` as finished and returns the next index to start, if any.
    ///
    /// Completions for indices that are not in flight are ignored.
    pub fn finish(&mut self, index: usize) -> Option<usize> {
        if !self.in_flight.remove(&index) {
            return None;
        }
        self.admit().into_iter().next()
    }

    pub fn clear(&mut self) {
        self.waiting.clear();
        self.in_flight.clear();
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    #[must_use]
    pub fn waiting(&self) -> usize {
        self.waiting.len()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.waiting.is_empty() && self.in_flight.is_empty()
    }

    fn admit(&mut self) -> Vec<usize> {
        let mut started = Vec::new();
        while self.in_flight.len() < self.limit {
            let Some(index) = self.waiting.pop_front() else {
                break;
            };
            self.in_flight.insert(index);
            started.push(index);
        }
        started
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_admits_up_to_the_limit() {
        let mut queue = LoadQueue::new(4);
        assert_eq!(queue.start(10), vec![0, 1, 2, 3]);
        assert_eq!(queue.in_flight(), 4);
        assert_eq!(queue.waiting(), 6);
    }

    #[test]
    fn short_galleries_start_everything() {
        let mut queue = LoadQueue::new(4);
        assert_eq!(queue.start(2), vec![0, 1]);
        assert_eq!(queue.waiting(), 0);
    }

    #[test]
    fn each_completion_admits_the_next_item_in_order() {
        let mut queue = LoadQueue::new(2);
        queue.start(4);
        assert_eq!(queue.finish(1), Some(2));
        assert_eq!(queue.finish(0), Some(3));
        assert_eq!(queue.finish(2), None);
        assert_eq!(queue.finish(3), None);
        assert!(queue.is_idle());
    }

    #[test]
    fn unknown_and_duplicate_completions_are_ignored() {
        let mut queue = LoadQueue::new(2);
        queue.start(5);
        assert_eq!(queue.finish(4), None);
        assert_eq!(queue.finish(0), Some(2));
        assert_eq!(queue.finish(0), None);
        assert_eq!(queue.in_flight(), 2);
    }

    #[test]
    fn restarting_discards_previous_work() {
        let mut queue = LoadQueue::new(2);
        queue.start(5);
        assert_eq!(queue.start(1), vec![0]);
        assert_eq!(queue.in_flight(), 1);
        assert_eq!(queue.waiting(), 0);
    }

    #[test]
    fn limit_is_clamped() {
        assert_eq!(LoadQueue::new(0).limit(), MIN_MAX_IN_FLIGHT);
        assert_eq!(LoadQueue::new(1000).limit(), MAX_MAX_IN_FLIGHT);
    }
}
