// SPDX-License-Identifier: MPL-2.0
//! Icon tinting for SVG icons drawn over photos and the lightbox backdrop.

use iced::widget::svg;
use iced::{Color, Theme};

/// Recolors a monochrome SVG icon.
pub fn icon(color: Color) -> impl Fn(&Theme, svg::Status) -> svg::Style {
    move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) }
}

/// Icon that brightens on hover.
pub fn hover_icon(normal: Color, hovered: Color) -> impl Fn(&Theme, svg::Status) -> svg::Style {
    move |_theme: &Theme, status: svg::Status| svg::Style {
        color: Some(match status {
            svg::Status::Hovered => hovered,
            svg::Status::Idle => normal,
        }),
    }
}
