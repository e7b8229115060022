// SPDX-License-Identifier: MPL-2.0
//! Loading spinner drawn on a canvas.
//!
//! The widget holds no clock of its own: the caller advances the rotation
//! angle on every animation tick and rebuilds the spinner with it.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};

/// Radians the spinner turns per second.
pub const ANGULAR_SPEED: f32 = TAU;

/// Angle after `elapsed_secs` of rotation, kept within one turn.
#[must_use]
pub fn rotation_at(elapsed_secs: f32) -> f32 {
    (elapsed_secs * ANGULAR_SPEED).rem_euclid(TAU)
}

/// Three-quarter arc over a faint full ring.
pub struct AnimatedSpinner {
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            rotation,
            color,
            size: sizing::ICON_LG,
        }
    }

    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn into_element<Message: 'static>(self) -> Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let stroke_width = (self.size / 12.0).max(2.0);
        let radius = frame.width().min(frame.height()) / 2.0 - stroke_width;

        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default()
                .with_width(stroke_width)
                .with_color(Color {
                    a: 0.15,
                    ..self.color
                }),
        );

        let start = self.rotation - PI / 2.0;
        let sweep = PI * 1.5;
        let segments = 36u16;
        let arc = Path::new(|builder| {
            for i in 0..=segments {
                let angle = start + sweep * f32::from(i) / f32::from(segments);
                let point = Point::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                );
                if i == 0 {
                    builder.move_to(point);
                } else {
                    builder.line_to(point);
                }
            }
        });

        frame.stroke(
            &arc,
            Stroke::default()
                .with_width(stroke_width)
                .with_color(self.color)
                .with_line_cap(canvas::LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}
