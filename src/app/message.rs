// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::gallery::{lightbox, GalleryState};
use crate::media::ImageData;
use crate::ui::{chrome, grid};
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
///
/// Results of background work carry the load generation they were started
/// in. Results from an earlier generation arrive after a reload and are
/// dropped.
#[derive(Debug, Clone)]
pub enum Message {
    /// The one manifest load attempt finished.
    ManifestSettled {
        generation: u64,
        state: GalleryState,
    },
    /// A grid thumbnail finished downloading and decoding.
    ThumbnailLoaded {
        generation: u64,
        index: usize,
        url: String,
        result: Result<ImageData, Error>,
    },
    /// A full-size image requested by the lightbox finished loading.
    LightboxImageLoaded {
        generation: u64,
        index: usize,
        url: String,
        result: Result<ImageData, Error>,
    },
    /// A neighbor of the current lightbox image was fetched ahead of time.
    Prefetched {
        generation: u64,
        url: String,
        result: Result<ImageData, Error>,
    },
    Grid(grid::Message),
    Lightbox(lightbox::Message),
    Chrome(chrome::Message),
    /// Vertical scroll offset of the page, in logical pixels.
    Scrolled(f32),
    WindowResized(Size),
    Tick(Instant), // Animation frame for spinners and fade-ins
    /// Start over from a fresh load after a render fault.
    Reload,
    ToggleFaultDetails,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional manifest URL or path; takes precedence over `settings.toml`.
    pub manifest: Option<String>,
}
