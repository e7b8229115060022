// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery, the
//! lightbox and the background loads.
//!
//! The `App` struct owns every piece of runtime state and translates messages
//! into side effects: the single manifest load at boot, a bounded window of
//! thumbnail loads, full-size loads for the lightbox and neighbor prefetching.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::error::ManifestError;
use crate::gallery::{layout, GalleryState, ItemTrackers, LightboxController};
use crate::i18n::fluent::I18n;
use crate::manifest::{self, FileManifestSource, ManifestLocation};
use crate::media::{self, ImageCache, LoadQueue};
use crate::ui::widgets::animated_spinner;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::{Duration, Instant};

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    /// Warning key when `settings.toml` could not be read.
    config_warning: Option<String>,
    manifest_location: ManifestLocation,
    /// Shared HTTP client; `None` when the TLS backend failed to initialize.
    client: Option<reqwest::Client>,
    gallery: GalleryState,
    trackers: ItemTrackers,
    /// Thumbnail loads waiting or in flight for the current generation.
    thumbnails: LoadQueue,
    lightbox: LightboxController,
    cache: ImageCache,
    /// Bumped on every reload; results tagged with an older value are stale.
    generation: u64,
    scroll_offset: f32,
    window_width: f32,
    started_at: Instant,
    now: Instant,
    spinner_rotation: f32,
    /// Why the gallery region cannot be rendered, checked after each update.
    fault: Option<String>,
    show_fault_details: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("manifest", &self.manifest_location.to_string())
            .field("loading", &self.gallery.is_loading())
            .field("images", &self.gallery.len())
            .field("lightbox_open", &self.lightbox.is_open())
            .field("generation", &self.generation)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Scrollable wrapping the whole page below the header.
pub(crate) const SCROLLABLE_ID: &str = "gallery-scroll";

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = Config::default();
        let now = Instant::now();
        Self {
            i18n: I18n::default(),
            manifest_location: ManifestLocation::from_raw(&config.manifest.source),
            cache: ImageCache::new(config.display.image_cache_bytes()),
            config,
            config_warning: None,
            client: None,
            gallery: GalleryState::loading(),
            trackers: ItemTrackers::default(),
            thumbnails: LoadQueue::default(),
            lightbox: LightboxController::new(),
            generation: 0,
            scroll_offset: 0.0,
            window_width: WINDOW_DEFAULT_WIDTH as f32,
            started_at: now,
            now,
            spinner_rotation: 0.0,
            fault: None,
            show_fault_details: false,
        }
    }
}

impl App {
    /// Loads settings, resolves the manifest location and starts the
    /// manifest load.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let raw_location = flags
            .manifest
            .as_deref()
            .unwrap_or(&config.manifest.source);
        let manifest_location = ManifestLocation::from_raw(raw_location);

        let client = match media::build_client(&config.manifest.user_agent) {
            Ok(client) => Some(client),
            Err(err) => {
                tracing::error!(error = %err, "HTTP client unavailable; remote images will fail");
                None
            }
        };

        tracing::info!(
            manifest = %manifest_location,
            locale = %i18n.current_locale(),
            "starting gallery"
        );

        let app = App {
            i18n,
            cache: ImageCache::new(config.display.image_cache_bytes()),
            config,
            config_warning,
            manifest_location,
            client,
            ..Self::default()
        };

        let task = app.load_manifest();
        (app, task)
    }

    fn title(&self) -> String {
        self.config.site.window_title.clone()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let reveal = self.reveal_duration();
        let animating = self.gallery.is_loading()
            || self.trackers.pending_count() > 0
            || self.trackers.any_revealing(self.now, reveal)
            || (self.lightbox.is_open() && !self.lightbox.image_loaded())
            || self.lightbox.is_revealing(self.now, reveal);

        Subscription::batch([
            subscription::create_event_subscription(self.lightbox.is_open()),
            subscription::create_tick_subscription(animating),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let task = self.dispatch(message);
        self.check_render_fault();
        task
    }

    fn dispatch(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ManifestSettled { generation, state } => {
                update::handle_manifest_settled(self, generation, state)
            }
            Message::ThumbnailLoaded {
                generation,
                index,
                url,
                result,
            } => update::handle_thumbnail_loaded(self, generation, index, &url, result),
            Message::LightboxImageLoaded {
                generation,
                index,
                url,
                result,
            } => update::handle_lightbox_image_loaded(self, generation, index, url, result),
            Message::Prefetched {
                generation,
                url,
                result,
            } => update::handle_prefetched(self, generation, url, result),
            Message::Grid(grid_message) => update::handle_grid_message(self, grid_message),
            Message::Lightbox(lightbox_message) => {
                update::handle_lightbox_message(self, lightbox_message)
            }
            Message::Chrome(chrome_message) => update::handle_chrome_message(chrome_message),
            Message::Scrolled(offset) => {
                self.scroll_offset = offset;
                Task::none()
            }
            Message::WindowResized(size) => {
                self.window_width = size.width;
                Task::none()
            }
            Message::Tick(now) => {
                self.now = now;
                self.spinner_rotation = animated_spinner::rotation_at(
                    now.saturating_duration_since(self.started_at).as_secs_f32(),
                );
                Task::none()
            }
            Message::Reload => update::handle_reload(self),
            Message::ToggleFaultDetails => {
                self.show_fault_details = !self.show_fault_details;
                Task::none()
            }
        }
    }

    /// Records a new render fault, logging it once when it first appears.
    fn check_render_fault(&mut self) {
        let fault = view::render_fault(&self.gallery, &self.trackers, &self.lightbox);
        if fault != self.fault {
            if let Some(details) = &fault {
                tracing::error!(%details, "render fault");
            }
            self.fault = fault;
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            site: &self.config.site,
            config_warning: self.config_warning.as_deref(),
            gallery: &self.gallery,
            trackers: &self.trackers,
            lightbox: &self.lightbox,
            columns: layout::column_count(self.window_width, self.config.display.max_columns()),
            back_to_top: layout::is_scrolled(
                self.scroll_offset,
                self.config.display.back_to_top_threshold(),
            ),
            now: self.now,
            reveal: self.reveal_duration(),
            spinner_rotation: self.spinner_rotation,
            fault: self.fault.as_deref(),
            show_fault_details: self.show_fault_details,
        })
    }

    fn reveal_duration(&self) -> Duration {
        self.config.display.reveal_duration()
    }

    /// Starts the one manifest load attempt for the current generation.
    fn load_manifest(&self) -> Task<Message> {
        let generation = self.generation;
        match (self.manifest_location.clone(), self.client.clone()) {
            (ManifestLocation::Local(path), _) => {
                let source = FileManifestSource::new(path);
                Task::perform(
                    async move { manifest::load(&source).await },
                    move |state| Message::ManifestSettled { generation, state },
                )
            }
            (location @ ManifestLocation::Remote(_), Some(client)) => {
                let source = location.into_source(client);
                Task::perform(
                    async move { manifest::load(&source).await },
                    move |state| Message::ManifestSettled { generation, state },
                )
            }
            (ManifestLocation::Remote(_), None) => {
                let state = manifest::loader::settle(Err(ManifestError::unavailable(
                    "HTTP client unavailable",
                )));
                Task::done(Message::ManifestSettled { generation, state })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::lightbox;
    use crate::manifest::ImageRecord;
    use crate::media::ImageData;
    use crate::ui::{chrome, grid};

    fn records(n: usize) -> Vec<ImageRecord> {
        (0..n)
            .map(|i| ImageRecord::new(format!("http://a.com/{i}.jpg"), Some(format!("Photo {i}"))))
            .collect()
    }

    fn pixel() -> ImageData {
        ImageData::from_rgba(1, 1, vec![255; 4])
    }

    fn settled_app(n: usize) -> App {
        let mut app = App::default();
        let _ = app.update(Message::ManifestSettled {
            generation: 0,
            state: GalleryState::settled(records(n), false),
        });
        app
    }

    #[test]
    fn default_app_is_loading_with_no_trackers() {
        let app = App::default();
        assert!(app.gallery.is_loading());
        assert!(app.trackers.is_empty());
        assert!(!app.lightbox.is_open());
        assert_eq!(app.title(), config::DEFAULT_WINDOW_TITLE);
    }

    #[test]
    fn settling_creates_one_pending_tracker_per_image() {
        let app = settled_app(3);
        assert!(!app.gallery.is_loading());
        assert_eq!(app.trackers.len(), 3);
        assert_eq!(app.trackers.pending_count(), 3);
    }

    #[test]
    fn settling_a_large_gallery_bounds_thumbnail_loads() {
        let mut app = settled_app(500);
        let limit = app.thumbnails.limit();
        assert_eq!(app.thumbnails.in_flight(), limit);
        assert_eq!(app.thumbnails.waiting(), 500 - limit);

        let _ = app.update(Message::ThumbnailLoaded {
            generation: 0,
            index: 0,
            url: "http://a.com/0.jpg".into(),
            result: Ok(pixel()),
        });
        assert_eq!(app.thumbnails.in_flight(), limit);
        assert_eq!(app.thumbnails.waiting(), 500 - limit - 1);
    }

    #[test]
    fn reload_drops_queued_thumbnails() {
        let mut app = settled_app(50);
        let _ = app.update(Message::Reload);
        assert!(app.thumbnails.is_idle());
    }

    #[test]
    fn second_settle_is_ignored() {
        let mut app = settled_app(3);
        let _ = app.update(Message::ManifestSettled {
            generation: 0,
            state: GalleryState::settled(records(5), true),
        });
        assert_eq!(app.gallery.len(), 3);
        assert!(!app.gallery.using_fallback());
    }

    #[test]
    fn thumbnail_results_resolve_their_own_item() {
        let mut app = settled_app(3);
        let _ = app.update(Message::ThumbnailLoaded {
            generation: 0,
            index: 1,
            url: "http://a.com/1.jpg".into(),
            result: Ok(pixel()),
        });
        let _ = app.update(Message::ThumbnailLoaded {
            generation: 0,
            index: 2,
            url: "http://a.com/2.jpg".into(),
            result: Err(crate::error::Error::Network("404".into())),
        });

        assert!(app.trackers.get(0).is_some_and(|t| t.is_pending()));
        assert_eq!(
            app.trackers.get(1).map(|t| t.state()),
            Some(crate::gallery::ItemLoadState::Loaded)
        );
        assert_eq!(
            app.trackers.get(2).map(|t| t.state()),
            Some(crate::gallery::ItemLoadState::Errored)
        );
    }

    #[test]
    fn stale_generation_results_are_dropped() {
        let mut app = settled_app(2);
        let _ = app.update(Message::ThumbnailLoaded {
            generation: 7,
            index: 0,
            url: "http://a.com/0.jpg".into(),
            result: Ok(pixel()),
        });
        assert!(app.trackers.get(0).is_some_and(|t| t.is_pending()));
    }

    #[test]
    fn grid_open_then_escape_closes() {
        let mut app = settled_app(3);
        let _ = app.update(Message::Grid(grid::Message::Open(2)));
        assert!(app.lightbox.is_open());
        assert_eq!(app.lightbox.current_index(), Some(2));

        let _ = app.update(Message::Lightbox(lightbox::Message::Key(
            lightbox::LightboxKey::Escape,
        )));
        assert!(!app.lightbox.is_open());
    }

    #[test]
    fn navigation_wraps_and_resets_caption() {
        let mut app = settled_app(3);
        let _ = app.update(Message::Grid(grid::Message::Open(2)));
        let _ = app.update(Message::LightboxImageLoaded {
            generation: 0,
            index: 2,
            url: "http://a.com/2.jpg".into(),
            result: Ok(pixel()),
        });
        assert_eq!(app.lightbox.caption(), Some("Photo 2"));

        let _ = app.update(Message::Lightbox(lightbox::Message::Next));
        assert_eq!(app.lightbox.current_index(), Some(0));
        // Index 0 is not cached yet, so its caption waits for the image.
        assert_eq!(app.lightbox.caption(), None);
    }

    #[test]
    fn cached_images_open_ready() {
        let mut app = settled_app(3);
        let _ = app.update(Message::Prefetched {
            generation: 0,
            url: "http://a.com/1.jpg".into(),
            result: Ok(pixel()),
        });
        let _ = app.update(Message::Grid(grid::Message::Open(1)));
        assert!(app.lightbox.image_loaded());
        assert_eq!(app.lightbox.caption(), Some("Photo 1"));
    }

    #[test]
    fn late_result_for_previous_image_is_cached_not_shown() {
        let mut app = settled_app(3);
        let _ = app.update(Message::Grid(grid::Message::Open(0)));
        let _ = app.update(Message::Lightbox(lightbox::Message::Next));
        let _ = app.update(Message::LightboxImageLoaded {
            generation: 0,
            index: 0,
            url: "http://a.com/0.jpg".into(),
            result: Ok(pixel()),
        });

        assert_eq!(app.lightbox.current_index(), Some(1));
        assert!(!app.lightbox.image_loaded());
        assert!(app.cache.contains("http://a.com/0.jpg"));
    }

    #[test]
    fn failed_lightbox_image_shows_localized_reason() {
        let mut app = settled_app(2);
        let _ = app.update(Message::Grid(grid::Message::Open(1)));
        let _ = app.update(Message::LightboxImageLoaded {
            generation: 0,
            index: 1,
            url: "http://a.com/1.jpg".into(),
            result: Err(crate::error::Error::Network("timed out".into())),
        });

        let expected = app.i18n.tr("error-image-network");
        assert!(matches!(
            app.lightbox.asset(),
            Some(lightbox::AssetState::Failed(reason)) if *reason == expected
        ));
        assert_eq!(app.lightbox.caption(), None);
    }

    #[test]
    fn content_press_keeps_lightbox_open() {
        let mut app = settled_app(2);
        let _ = app.update(Message::Grid(grid::Message::Open(0)));
        let _ = app.update(Message::Lightbox(lightbox::Message::ContentPressed));
        assert!(app.lightbox.is_open());
        let _ = app.update(Message::Lightbox(lightbox::Message::BackdropPressed));
        assert!(!app.lightbox.is_open());
    }

    #[test]
    fn reload_starts_a_new_generation() {
        let mut app = settled_app(2);
        let _ = app.update(Message::Grid(grid::Message::Open(0)));
        let _ = app.update(Message::Reload);

        assert_eq!(app.generation, 1);
        assert!(app.gallery.is_loading());
        assert!(app.trackers.is_empty());
        assert!(!app.lightbox.is_open());

        // The old load finishing late does not settle the new session.
        let _ = app.update(Message::ManifestSettled {
            generation: 0,
            state: GalleryState::settled(records(2), false),
        });
        assert!(app.gallery.is_loading());
    }

    #[test]
    fn scroll_and_resize_are_recorded() {
        let mut app = App::default();
        let _ = app.update(Message::Scrolled(512.0));
        let _ = app.update(Message::WindowResized(iced::Size::new(700.0, 500.0)));
        assert!(layout::is_scrolled(
            app.scroll_offset,
            app.config.display.back_to_top_threshold()
        ));
        assert_eq!(layout::column_count(app.window_width, 3), 1);

        let _ = app.update(Message::Chrome(chrome::Message::ScrollToTop));
    }

    #[test]
    fn inconsistent_state_raises_fault_until_reload() {
        let mut app = settled_app(3);
        assert!(app.fault.is_none());

        app.trackers = ItemTrackers::default();
        let _ = app.update(Message::Scrolled(10.0));
        assert_eq!(app.fault.as_deref(), Some("0 load trackers for 3 images"));

        let _ = app.update(Message::Scrolled(20.0));
        assert!(app.fault.is_some());

        let _ = app.update(Message::Reload);
        assert!(app.fault.is_none());
        assert!(app.gallery.is_loading());
    }

    #[test]
    fn fault_details_toggle() {
        let mut app = App::default();
        let _ = app.update(Message::ToggleFaultDetails);
        assert!(app.show_fault_details);
        let _ = app.update(Message::ToggleFaultDetails);
        assert!(!app.show_fault_details);
    }
}
