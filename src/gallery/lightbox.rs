// SPDX-License-Identifier: MPL-2.0
//! Full-screen navigable viewing session.
//!
//! The controller is closed until a gallery item is activated. An open
//! session reads the gallery's shared image list by index, wraps around at
//! both ends, and tracks the load state of the current image only. Every
//! index change starts a fresh pending load; completion signals for any other
//! index are dropped so `image_loaded` never reflects a stale image.
//!
//! Keyboard input reaches the controller only while a session is open (the
//! application unsubscribes on close). Pointer input arrives as [`Message`]s:
//! presses on the image or caption are contained and never reach the backdrop.

use crate::manifest::ImageRecord;
use crate::media::ImageData;
use iced::keyboard;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Load state of the image currently shown in the lightbox.
#[derive(Debug, Clone)]
pub enum AssetState {
    Pending,
    Ready { image: ImageData, ready_at: Instant },
    Failed(String),
}

#[derive(Debug, Clone)]
struct Session {
    images: Arc<[ImageRecord]>,
    current_index: usize,
    asset: AssetState,
}

impl Session {
    fn len(&self) -> usize {
        self.images.len()
    }

    fn go_to(&mut self, index: usize) -> usize {
        self.current_index = index;
        self.asset = AssetState::Pending;
        index
    }
}

/// 1-based "current of total" indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub current: usize,
    pub total: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.current, self.total)
    }
}

/// Keys the lightbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    ArrowRight,
    ArrowLeft,
}

impl LightboxKey {
    /// Maps a physical key press; anything else is not ours.
    #[must_use]
    pub fn from_key(key: &keyboard::Key) -> Option<Self> {
        match key {
            keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Self::Escape),
            keyboard::Key::Named(keyboard::key::Named::ArrowRight) => Some(Self::ArrowRight),
            keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => Some(Self::ArrowLeft),
            _ => None,
        }
    }
}

/// User input routed to an open lightbox.
#[derive(Debug, Clone)]
pub enum Message {
    Key(LightboxKey),
    Next,
    Previous,
    CloseRequested,
    BackdropPressed,
    /// Press on the image, caption or controls. Contained; does nothing.
    ContentPressed,
}

/// What the application has to do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Closed,
    /// The current index changed; its image has to be loaded.
    Navigated(usize),
}

#[derive(Debug, Clone, Default)]
pub struct LightboxController {
    session: Option<Session>,
}

impl LightboxController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session at `start_index`.
    ///
    /// Refuses (returns `false`) on an empty list or an out-of-range index.
    /// Opening while a session is already open replaces it.
    pub fn open(&mut self, images: Arc<[ImageRecord]>, start_index: usize) -> bool {
        if start_index >= images.len() {
            return false;
        }
        self.session = Some(Session {
            images,
            current_index: start_index,
            asset: AssetState::Pending,
        });
        true
    }

    /// Ends the session. Returns `false` if nothing was open.
    pub fn close(&mut self) -> bool {
        self.session.take().is_some()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Advances with wraparound. `None` while closed.
    pub fn next(&mut self) -> Option<usize> {
        let session = self.session.as_mut()?;
        let index = (session.current_index + 1) % session.len();
        Some(session.go_to(index))
    }

    /// Steps back with wraparound. `None` while closed.
    pub fn prev(&mut self) -> Option<usize> {
        let session = self.session.as_mut()?;
        let len = session.len();
        let index = (session.current_index + len - 1) % len;
        Some(session.go_to(index))
    }

    /// Success signal for the image at `index`.
    ///
    /// Ignored when closed, when `index` is not current, or when the current
    /// image already settled.
    pub fn on_asset_ready(&mut self, index: usize, image: ImageData, now: Instant) -> bool {
        match self.pending_session(index) {
            Some(session) => {
                session.asset = AssetState::Ready {
                    image,
                    ready_at: now,
                };
                true
            }
            None => false,
        }
    }

    /// Failure signal for the image at `index`. Same filtering as
    /// [`Self::on_asset_ready`].
    pub fn on_asset_failed(&mut self, index: usize, reason: impl Into<String>) -> bool {
        match self.pending_session(index) {
            Some(session) => {
                session.asset = AssetState::Failed(reason.into());
                true
            }
            None => false,
        }
    }

    fn pending_session(&mut self, index: usize) -> Option<&mut Session> {
        self.session.as_mut().filter(|session| {
            session.current_index == index && matches!(session.asset, AssetState::Pending)
        })
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.session.as_ref().map(|session| session.current_index)
    }

    #[must_use]
    pub fn current_record(&self) -> Option<&ImageRecord> {
        let session = self.session.as_ref()?;
        session.images.get(session.current_index)
    }

    #[must_use]
    pub fn asset(&self) -> Option<&AssetState> {
        self.session.as_ref().map(|session| &session.asset)
    }

    /// Whether the current image has resolved successfully.
    #[must_use]
    pub fn image_loaded(&self) -> bool {
        matches!(self.asset(), Some(AssetState::Ready { .. }))
    }

    /// Description of the current image, withheld until it has loaded.
    #[must_use]
    pub fn caption(&self) -> Option<&str> {
        if !self.image_loaded() {
            return None;
        }
        self.current_record().and_then(ImageRecord::description)
    }

    #[must_use]
    pub fn position(&self) -> Option<Position> {
        self.session.as_ref().map(|session| Position {
            current: session.current_index + 1,
            total: session.len(),
        })
    }

    /// Reveal opacity of the current image at `now`.
    #[must_use]
    pub fn reveal_progress(&self, now: Instant, duration: Duration) -> f32 {
        match self.asset() {
            Some(AssetState::Ready { ready_at, .. }) => {
                if duration.is_zero() {
                    return 1.0;
                }
                let elapsed = now.saturating_duration_since(*ready_at);
                (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }

    #[must_use]
    pub fn is_revealing(&self, now: Instant, duration: Duration) -> bool {
        self.image_loaded() && self.reveal_progress(now, duration) < 1.0
    }

    /// `false` when the session points outside its image list.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.session
            .as_ref()
            .is_none_or(|session| session.current_index < session.len())
    }

    /// Dispatches a key press.
    pub fn handle_key(&mut self, key: LightboxKey) -> Effect {
        match key {
            LightboxKey::Escape => self.close_effect(),
            LightboxKey::ArrowRight => self.next().map_or(Effect::None, Effect::Navigated),
            LightboxKey::ArrowLeft => self.prev().map_or(Effect::None, Effect::Navigated),
        }
    }

    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::Key(key) => self.handle_key(key),
            Message::Next => self.next().map_or(Effect::None, Effect::Navigated),
            Message::Previous => self.prev().map_or(Effect::None, Effect::Navigated),
            Message::CloseRequested | Message::BackdropPressed => self.close_effect(),
            Message::ContentPressed => Effect::None,
        }
    }

    fn close_effect(&mut self) -> Effect {
        if self.close() {
            Effect::Closed
        } else {
            Effect::None
        }
    }
}
