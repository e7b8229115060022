// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay: backdrop, current image, caption, controls and the
//! position indicator.
//!
//! The backdrop is a mouse area that closes the session. The image and the
//! caption sit in their own mouse areas which capture the press, so a click
//! on them never reaches the backdrop. Buttons capture their presses too.

use crate::gallery::lightbox::{AssetState, LightboxController, Message};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::grid::alt_text;
use crate::ui::icons;
use crate::ui::styles::{button as button_styles, container as container_styles, overlay};
use crate::ui::widgets::AnimatedSpinner;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, image, mouse_area, Column, Container, Stack, Svg, Text};
use iced::{Color, ContentFit, Element, Length, Padding};
use std::time::{Duration, Instant};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub lightbox: &'a LightboxController,
    pub now: Instant,
    pub reveal: Duration,
    pub spinner_rotation: f32,
}

/// Text of the position indicator, e.g. `3 / 12 • ESC TO CLOSE`.
#[must_use]
pub fn position_label(i18n: &I18n, lightbox: &LightboxController) -> Option<String> {
    lightbox.position().map(|position| {
        i18n.tr_with_args(
            "lightbox-position",
            &[
                ("current", &position.current.to_string()),
                ("total", &position.total.to_string()),
            ],
        )
    })
}

/// Renders the open session, or nothing when closed.
pub fn view<'a>(ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    let record = ctx.lightbox.current_record()?;
    let index = ctx.lightbox.current_index()?;

    let stage: Element<'a, Message> = match ctx.lightbox.asset()? {
        AssetState::Pending => mouse_area(
            AnimatedSpinner::new(palette::WHITE, ctx.spinner_rotation).into_element(),
        )
        .on_press(Message::ContentPressed)
        .into(),
        AssetState::Ready { image: content, .. } => mouse_area(
            image(content.handle.clone())
                .content_fit(ContentFit::Contain)
                .opacity(ctx.lightbox.reveal_progress(ctx.now, ctx.reveal)),
        )
        .on_press(Message::ContentPressed)
        .into(),
        AssetState::Failed(reason) => mouse_area(
            Column::new()
                .spacing(spacing::SM)
                .align_x(Horizontal::Center)
                .push(
                    icons::sized(icons::image(), sizing::ICON_XL)
                        .style(overlay::icon(palette::NEUTRAL_500)),
                )
                .push(Text::new(ctx.i18n.tr("lightbox-image-error")).size(typography::BODY))
                .push(
                    Text::new(reason.clone())
                        .size(typography::CAPTION)
                        .color(palette::NEUTRAL_400),
                )
                .push(
                    Text::new(alt_text(ctx.i18n, record, index))
                        .size(typography::CAPTION)
                        .color(palette::NEUTRAL_500),
                ),
        )
        .on_press(Message::ContentPressed)
        .into(),
    };

    let mut content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(
            Container::new(stage)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        );

    if let Some(caption) = ctx.lightbox.caption() {
        content = content.push(
            mouse_area(
                Container::new(Text::new(caption.to_string()).size(typography::BODY))
                    .padding([spacing::SM, spacing::LG])
                    .style(container_styles::caption_pill),
            )
            .on_press(Message::ContentPressed),
        );
    }

    let backdrop = mouse_area(
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(Padding {
                top: spacing::SECTION * 0.8,
                bottom: spacing::SECTION * 0.8,
                left: spacing::SECTION,
                right: spacing::SECTION,
            })
            .style(container_styles::backdrop),
    )
    .on_press(Message::BackdropPressed);

    let close = Container::new(control(icons::close(), Message::CloseRequested))
        .width(Length::Fill)
        .padding(spacing::LG)
        .align_x(Horizontal::Right);

    let previous = Container::new(control(icons::chevron_left(), Message::Previous))
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_y(Vertical::Center);

    let next = Container::new(control(icons::chevron_right(), Message::Next))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Center);

    let position = position_label(ctx.i18n, ctx.lightbox).unwrap_or_default();
    let indicator = Container::new(
        Text::new(position)
            .size(typography::CAPTION)
            .color(Color {
                a: 0.3,
                ..palette::WHITE
            }),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::MD)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Bottom);

    Some(
        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(backdrop)
            .push(indicator)
            .push(previous)
            .push(next)
            .push(close)
            .into(),
    )
}

fn control<'a>(icon: Svg<'a>, message: Message) -> Element<'a, Message> {
    button(
        icons::sized(icon, sizing::ICON_LG).style(overlay::hover_icon(
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::WHITE
            },
            palette::WHITE,
        )),
    )
    .padding(spacing::XS)
    .width(Length::Fixed(sizing::NAV_BUTTON))
    .height(Length::Fixed(sizing::NAV_BUTTON))
    .style(button_styles::overlay(
        palette::WHITE,
        opacity::TRANSPARENT,
        opacity::OVERLAY_SUBTLE,
    ))
    .on_press(message)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::manifest::ImageRecord;
    use crate::media::ImageData;
    use std::sync::Arc;

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    fn images(n: usize) -> Arc<[ImageRecord]> {
        (0..n)
            .map(|i| ImageRecord::new(format!("http://a.com/{i}.jpg"), None))
            .collect()
    }

    #[test]
    fn position_label_is_one_based_with_hint() {
        let i18n = english();
        let mut lightbox = LightboxController::new();
        assert_eq!(position_label(&i18n, &lightbox), None);

        lightbox.open(images(12), 0);
        assert_eq!(
            position_label(&i18n, &lightbox).as_deref(),
            Some("1 / 12 • ESC TO CLOSE")
        );
    }

    #[test]
    fn closed_lightbox_renders_nothing() {
        let i18n = english();
        let lightbox = LightboxController::new();
        let rendered = view(ViewContext {
            i18n: &i18n,
            lightbox: &lightbox,
            now: Instant::now(),
            reveal: Duration::ZERO,
            spinner_rotation: 0.0,
        });
        assert!(rendered.is_none());
    }

    #[test]
    fn open_lightbox_renders_each_asset_state() {
        let i18n = english();
        let mut lightbox = LightboxController::new();
        lightbox.open(images(3), 0);
        fn ctx<'a>(i18n: &'a I18n, lightbox: &'a LightboxController) -> ViewContext<'a> {
            ViewContext {
                i18n,
                lightbox,
                now: Instant::now(),
                reveal: Duration::ZERO,
                spinner_rotation: 0.0,
            }
        }

        assert!(view(ctx(&i18n, &lightbox)).is_some());

        lightbox.on_asset_ready(0, ImageData::from_rgba(1, 1, vec![0; 4]), Instant::now());
        assert!(view(ctx(&i18n, &lightbox)).is_some());

        lightbox.next();
        lightbox.on_asset_failed(1, "404");
        assert!(view(ctx(&i18n, &lightbox)).is_some());
    }
}
