// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window resizes are always routed. Lightbox keys (Escape, ArrowRight,
//! ArrowLeft) are only routed while a lightbox session is open, so the
//! bindings do not exist otherwise.

use super::Message;
use crate::gallery::lightbox::{self, LightboxKey};
use iced::{event, keyboard, time, window, Subscription};
use std::time::Duration;

/// Frame interval for spinners and fade-ins (about 30 FPS).
pub const ANIMATION_FRAME: Duration = Duration::from_millis(33);

pub fn create_event_subscription(lightbox_open: bool) -> Subscription<Message> {
    if lightbox_open {
        event::listen_with(|event, _status, _window_id| match event {
            event::Event::Window(window::Event::Resized(size)) => {
                Some(Message::WindowResized(size))
            }
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                LightboxKey::from_key(&key)
                    .map(|key| Message::Lightbox(lightbox::Message::Key(key)))
            }
            _ => None,
        })
    } else {
        event::listen_with(|event, _status, _window_id| match event {
            event::Event::Window(window::Event::Resized(size)) => {
                Some(Message::WindowResized(size))
            }
            _ => None,
        })
    }
}

/// Ticks while something on screen is animating.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(ANIMATION_FRAME).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
