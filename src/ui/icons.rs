// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are monochrome SVGs embedded at compile time via `include_bytes!`.
//! Each function returns a fresh widget backed by a handle that is created
//! once on first access and cached in a `OnceLock`. Tint them with
//! [`styles::overlay::icon`](super::styles::overlay::icon).
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance, not the
//! action context (e.g., `close` not `close_lightbox`).

use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(camera, "camera.svg", "Camera body with lens.");
define_icon!(close, "close.svg", "Diagonal cross.");
define_icon!(chevron_left, "chevron_left.svg", "Chevron pointing left.");
define_icon!(chevron_right, "chevron_right.svg", "Chevron pointing right.");
define_icon!(chevron_up, "chevron_up.svg", "Chevron pointing up.");
define_icon!(image, "image.svg", "Framed landscape (image placeholder).");
define_icon!(alert_circle, "alert_circle.svg", "Exclamation mark in a circle.");
define_icon!(info, "info.svg", "Letter i in a circle.");

/// Sizes an icon to a square of `size` logical pixels.
pub fn sized(icon: Svg<'_>, size: f32) -> Svg<'_> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_are_constructible_repeatedly() {
        let _ = camera();
        let _ = camera();
        let _ = sized(close(), 16.0);
        let _ = chevron_left();
        let _ = chevron_right();
        let _ = chevron_up();
        let _ = image();
        let _ = alert_circle();
        let _ = info();
    }
}
