// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each handler mutates the part of [`App`] it owns and returns the follow-up
//! work as a [`Task`]. Background results are checked against the current
//! generation before they touch any state.

use super::{App, Message, SCROLLABLE_ID};
use crate::error::{Error, Result};
use crate::gallery::item_load::Resolution;
use crate::gallery::lightbox::{self, Effect};
use crate::gallery::{GalleryState, ItemTrackers};
use crate::media::{self, ImageData, THUMBNAIL_WIDTH};
use crate::ui::{chrome, grid};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::time::Instant;

pub(super) fn handle_manifest_settled(
    app: &mut App,
    generation: u64,
    state: GalleryState,
) -> Task<Message> {
    if generation != app.generation {
        tracing::debug!(generation, current = app.generation, "dropping stale manifest");
        return Task::none();
    }
    if !app.gallery.settle(state) {
        return Task::none();
    }

    app.trackers = ItemTrackers::for_gallery(&app.gallery);

    let started = app.thumbnails.start(app.gallery.len());
    tracing::debug!(
        started = started.len(),
        waiting = app.thumbnails.waiting(),
        "loading thumbnails"
    );
    Task::batch(started.into_iter().map(|index| load_thumbnail(app, index)))
}

pub(super) fn handle_thumbnail_loaded(
    app: &mut App,
    generation: u64,
    index: usize,
    url: &str,
    result: Result<ImageData>,
) -> Task<Message> {
    if generation != app.generation {
        return Task::none();
    }
    if let Err(err) = &result {
        tracing::warn!(index, url, error = %err, "thumbnail failed");
    }
    let next = app
        .thumbnails
        .finish(index)
        .map_or_else(Task::none, |next| load_thumbnail(app, next));

    match app.trackers.resolve(index, url, result, Instant::now()) {
        Resolution::Applied(state) => tracing::trace!(index, ?state, "item settled"),
        Resolution::AlreadySettled => tracing::debug!(index, "duplicate thumbnail signal"),
        Resolution::Unknown => tracing::debug!(index, url, "thumbnail for unknown item"),
    }
    // The reveal animation measures from the tick clock.
    app.now = Instant::now();
    next
}

pub(super) fn handle_grid_message(app: &mut App, message: grid::Message) -> Task<Message> {
    match message {
        grid::Message::Open(index) => {
            if !app.lightbox.open(app.gallery.images().clone(), index) {
                tracing::warn!(index, len = app.gallery.len(), "refusing to open lightbox");
                return Task::none();
            }
            tracing::debug!(index, "lightbox opened");
            load_current(app)
        }
    }
}

pub(super) fn handle_lightbox_message(
    app: &mut App,
    message: lightbox::Message,
) -> Task<Message> {
    match app.lightbox.update(message) {
        Effect::None => Task::none(),
        Effect::Closed => {
            let stats = app.cache.stats();
            tracing::debug!(
                hits = stats.hits,
                misses = stats.misses,
                evictions = stats.evictions,
                cached = app.cache.len(),
                "lightbox closed"
            );
            Task::none()
        }
        Effect::Navigated(index) => {
            tracing::trace!(index, "lightbox navigated");
            load_current(app)
        }
    }
}

pub(super) fn handle_lightbox_image_loaded(
    app: &mut App,
    generation: u64,
    index: usize,
    url: String,
    result: Result<ImageData>,
) -> Task<Message> {
    if generation != app.generation {
        return Task::none();
    }

    let is_current = app.lightbox.current_index() == Some(index)
        && app
            .lightbox
            .current_record()
            .is_some_and(|record| record.url() == url);

    match result {
        Ok(image) => {
            app.cache.insert(url, image.clone());
            if is_current {
                let now = Instant::now();
                app.now = now;
                app.lightbox.on_asset_ready(index, image, now);
            }
        }
        Err(err) => {
            tracing::warn!(index, url, error = %err, "lightbox image failed");
            if is_current {
                app.lightbox.on_asset_failed(index, app.i18n.tr(err.i18n_key()));
            }
        }
    }
    Task::none()
}

pub(super) fn handle_prefetched(
    app: &mut App,
    generation: u64,
    url: String,
    result: Result<ImageData>,
) -> Task<Message> {
    if generation != app.generation {
        return Task::none();
    }
    match result {
        Ok(image) => {
            if !app.cache.insert(url.clone(), image) {
                tracing::debug!(url, "prefetched image too large to cache");
            }
        }
        Err(err) => tracing::debug!(url, error = %err, "prefetch failed"),
    }
    Task::none()
}

pub(super) fn handle_chrome_message(message: chrome::Message) -> Task<Message> {
    match message {
        chrome::Message::ScrollToTop => {
            operation::snap_to(Id::new(SCROLLABLE_ID), RelativeOffset { x: 0.0, y: 0.0 })
        }
    }
}

/// Discards the session and starts over with a fresh manifest load.
pub(super) fn handle_reload(app: &mut App) -> Task<Message> {
    app.generation = app.generation.wrapping_add(1);
    tracing::info!(generation = app.generation, "reloading gallery");

    app.gallery = GalleryState::loading();
    app.trackers = ItemTrackers::default();
    app.thumbnails.clear();
    app.lightbox.close();
    app.cache.clear();
    app.scroll_offset = 0.0;
    app.show_fault_details = false;

    Task::batch([
        app.load_manifest(),
        operation::snap_to(Id::new(SCROLLABLE_ID), RelativeOffset { x: 0.0, y: 0.0 }),
    ])
}

/// Starts the thumbnail download for one gallery item.
fn load_thumbnail(app: &App, index: usize) -> Task<Message> {
    let Some(record) = app.gallery.images().get(index) else {
        return Task::none();
    };
    let generation = app.generation;
    let url = record.url().to_string();

    match app.client.clone() {
        Some(client) => Task::perform(
            media::load_image(client, url.clone(), Some(THUMBNAIL_WIDTH)),
            move |result| Message::ThumbnailLoaded {
                generation,
                index,
                url,
                result,
            },
        ),
        None => Task::done(Message::ThumbnailLoaded {
            generation,
            index,
            url,
            result: Err(client_unavailable()),
        }),
    }
}

/// Loads the image under the lightbox cursor and prefetches its neighbors.
fn load_current(app: &mut App) -> Task<Message> {
    let (Some(index), Some(record)) = (app.lightbox.current_index(), app.lightbox.current_record())
    else {
        return Task::none();
    };
    let url = record.url().to_string();
    let generation = app.generation;

    let current = if let Some(image) = app.cache.get(&url) {
        let now = Instant::now();
        app.now = now;
        app.lightbox.on_asset_ready(index, image, now);
        Task::none()
    } else {
        match app.client.clone() {
            Some(client) => Task::perform(
                media::load_image(client, url.clone(), None),
                move |result| Message::LightboxImageLoaded {
                    generation,
                    index,
                    url,
                    result,
                },
            ),
            None => Task::done(Message::LightboxImageLoaded {
                generation,
                index,
                url,
                result: Err(client_unavailable()),
            }),
        }
    };

    Task::batch([current, prefetch_neighbors(app, index)])
}

fn prefetch_neighbors(app: &App, index: usize) -> Task<Message> {
    let Some(client) = app.client.clone() else {
        return Task::none();
    };
    let images = app.gallery.images();
    let len = images.len();
    if len < 2 {
        return Task::none();
    }

    let generation = app.generation;
    let mut neighbors = vec![(index + 1) % len, (index + len - 1) % len];
    neighbors.dedup();

    Task::batch(
        neighbors
            .into_iter()
            .filter_map(|neighbor| images.get(neighbor))
            .map(|record| record.url().to_string())
            .filter(|url| !app.cache.contains(url))
            .map(|url| {
                let client = client.clone();
                Task::perform(
                    media::load_image(client, url.clone(), None),
                    move |result| Message::Prefetched {
                        generation,
                        url,
                        result,
                    },
                )
            }),
    )
}

fn client_unavailable() -> Error {
    Error::Network("HTTP client unavailable".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_client_is_a_network_error() {
        assert!(matches!(client_unavailable(), Error::Network(_)));
    }
}
