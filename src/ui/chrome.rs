// SPDX-License-Identifier: MPL-2.0
//! Page chrome around the grid: header, hero, footer and the floating
//! back-to-top button.

use crate::config::SiteConfig;
use crate::gallery::Summary;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles::{button as button_styles, container as container_styles, overlay};
use crate::ui::widgets::AnimatedSpinner;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ScrollToTop,
}

/// Footer summary line for the current load outcome.
#[must_use]
pub fn summary_text(i18n: &I18n, summary: Summary) -> String {
    match summary {
        Summary::Loading => i18n.tr("gallery-loading"),
        Summary::Demo => i18n.tr("footer-demo"),
        Summary::Live { count } => i18n.tr_count("footer-live", count),
    }
}

/// Fixed header. Pressing the brand scrolls the page back to the top.
pub fn header<'a>(site: &'a SiteConfig) -> Element<'a, Message> {
    let mark = Container::new(
        icons::sized(icons::camera(), sizing::ICON_MD).style(overlay::icon(palette::BLACK)),
    )
    .padding(spacing::XS)
    .style(container_styles::brand_mark);

    let title = Column::new()
        .push(Text::new(site.brand()).size(typography::TITLE_MD))
        .push(
            Text::new(&site.subtitle)
                .size(typography::CAPTION)
                .color(palette::NEUTRAL_500),
        );

    let brand = button(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(mark)
            .push(title),
    )
    .padding(0)
    .style(button_styles::bare)
    .on_press(Message::ScrollToTop);

    Container::new(brand)
        .width(Length::Fill)
        .padding([spacing::MD, spacing::LG])
        .style(container_styles::header)
        .into()
}

pub fn hero<'a>(site: &'a SiteConfig) -> Element<'a, Message> {
    let badge = Container::new(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(
                Container::new(Space::new())
                    .width(Length::Fixed(spacing::XS))
                    .height(Length::Fixed(spacing::XS))
                    .style(container_styles::status_dot),
            )
            .push(Text::new(&site.badge).size(typography::CAPTION)),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(container_styles::chip);

    let content = Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::HERO_MAX_WIDTH)
        .push(badge)
        .push(Text::new(&site.tagline).size(typography::DISPLAY))
        .push(
            Text::new(&site.description)
                .size(typography::BODY_LG)
                .color(palette::NEUTRAL_400),
        );

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::SECTION, spacing::LG])
        .into()
}

pub fn footer<'a>(i18n: &I18n, site: &'a SiteConfig, summary: Summary) -> Element<'a, Message> {
    let mark = Container::new(
        icons::sized(icons::camera(), sizing::ICON_LG).style(overlay::icon(palette::NEUTRAL_500)),
    )
    .padding(spacing::MD)
    .style(container_styles::chip);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(mark)
        .push(Text::new(summary_text(i18n, summary)).size(typography::BODY))
        .push(
            Text::new(&site.footer_text)
                .size(typography::CAPTION)
                .color(palette::NEUTRAL_600),
        );

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::XXL)
        .align_x(Horizontal::Center)
        .style(container_styles::footer)
        .into()
}

/// Floating button in the bottom-right corner; `None` when not scrolled.
pub fn back_to_top<'a>(visible: bool) -> Option<Element<'a, Message>> {
    if !visible {
        return None;
    }

    let control = button(
        icons::sized(icons::chevron_up(), sizing::ICON_MD).style(overlay::icon(palette::BLACK)),
    )
    .padding(spacing::SM)
    .style(button_styles::floating)
    .on_press(Message::ScrollToTop);

    Some(
        Container::new(control)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::XL)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Bottom)
            .into(),
    )
}

/// Full-width placeholder shown while the manifest is loading.
pub fn loading<'a>(i18n: &I18n, spinner_rotation: f32) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(AnimatedSpinner::new(palette::WHITE, spinner_rotation).into_element())
            .push(
                Text::new(i18n.tr("gallery-loading"))
                    .size(typography::BODY)
                    .color(palette::NEUTRAL_500),
            ),
    )
    .width(Length::Fill)
    .padding(spacing::SECTION)
    .align_x(Horizontal::Center)
    .into()
}
