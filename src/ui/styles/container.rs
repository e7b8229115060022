// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn hairline() -> Color {
    Color {
        a: opacity::OVERLAY_SUBTLE,
        ..WHITE
    }
}

/// Page background.
pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BLACK)),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Sticky header bar with a bottom hairline.
pub fn header(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..BLACK
        })),
        text_color: Some(WHITE),
        border: Border {
            color: hairline(),
            width: 1.0,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// White square behind the header camera icon.
pub fn brand_mark(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(WHITE)),
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Rounded chip ("OPEN FOR SUBMISSIONS") and the footer camera badge.
pub fn chip(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..WHITE
        })),
        text_color: Some(palette::NEUTRAL_400),
        border: Border {
            color: hairline(),
            width: 1.0,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Small status dot inside the chip.
pub fn status_dot(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SUCCESS_500)),
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Footer band.
pub fn footer(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::NEUTRAL_900)),
        text_color: Some(palette::NEUTRAL_500),
        border: Border {
            color: hairline(),
            width: 1.0,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Grid tile while its image is pending or failed.
pub fn tile(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::NEUTRAL_900)),
        text_color: Some(palette::NEUTRAL_600),
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Dark gradient-like strip carrying the hover caption of a grid item.
pub fn caption_strip(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..BLACK
        })),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Full-window lightbox backdrop.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..BLACK
        })),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Caption pill under the lightbox image.
pub fn caption_pill(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..BLACK
        })),
        text_color: Some(palette::NEUTRAL_200),
        border: Border {
            color: hairline(),
            width: 1.0,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}
