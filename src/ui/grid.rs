// SPDX-License-Identifier: MPL-2.0
//! Masonry grid of gallery items.
//!
//! Each item picks its affordance from its own tracker: a spinner tile while
//! pending, a failure tile once errored, and the photo fading in once loaded.
//! Hovering an item reveals its caption strip.

use crate::gallery::item_load::{ItemLoadState, ItemLoadTracker};
use crate::gallery::{layout, ItemTrackers};
use crate::i18n::fluent::I18n;
use crate::manifest::ImageRecord;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles::{button as button_styles, container as container_styles, overlay};
use crate::ui::widgets::AnimatedSpinner;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, hover, image, Column, Container, Row, Text};
use iced::{ContentFit, Element, Length};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// An item was activated; open the lightbox at this index.
    Open(usize),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a [ImageRecord],
    pub trackers: &'a ItemTrackers,
    pub columns: usize,
    pub now: Instant,
    pub reveal: Duration,
    pub spinner_rotation: f32,
}

/// Accessible label for an item: its description, or its 1-based position.
#[must_use]
pub fn alt_text(i18n: &I18n, record: &ImageRecord, index: usize) -> String {
    match record.description() {
        Some(description) => description.to_string(),
        None => i18n.tr_with_args(
            "gallery-item-fallback-label",
            &[("index", &(index + 1).to_string())],
        ),
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    if ctx.images.is_empty() {
        return Container::new(Text::new(ctx.i18n.tr("gallery-empty")).size(typography::BODY))
            .width(Length::Fill)
            .padding(spacing::XXL)
            .align_x(Horizontal::Center)
            .into();
    }

    let runs = layout::distribute(ctx.images.len(), ctx.columns);
    let columns = runs.into_iter().map(|run| {
        run.fold(
            Column::new().spacing(spacing::LG).width(Length::FillPortion(1)),
            |column, index| column.push(item(&ctx, index)),
        )
        .into()
    });

    Row::with_children(columns)
        .spacing(spacing::LG)
        .width(Length::Fill)
        .into()
}

fn item<'a>(ctx: &ViewContext<'a>, index: usize) -> Element<'a, Message> {
    let Some(record) = ctx.images.get(index) else {
        return Row::new().into();
    };
    let tracker = ctx.trackers.get(index);

    let base: Element<'a, Message> = match tracker.map(ItemLoadTracker::state) {
        Some(ItemLoadState::Loaded) => match tracker.and_then(ItemLoadTracker::content) {
            Some(content) => image(content.handle.clone())
                .width(Length::Fill)
                .content_fit(ContentFit::Cover)
                .opacity(tracker.map_or(1.0, |t| t.reveal_progress(ctx.now, ctx.reveal)))
                .into(),
            None => failed_tile(ctx, record, index),
        },
        Some(ItemLoadState::Errored) => failed_tile(ctx, record, index),
        Some(ItemLoadState::Pending) | None => pending_tile(ctx.spinner_rotation),
    };

    let caption = caption_strip(ctx.i18n, record);

    button(hover(base, caption))
        .padding(0)
        .width(Length::Fill)
        .style(button_styles::bare)
        .on_press(Message::Open(index))
        .into()
}

fn pending_tile<'a>(rotation: f32) -> Element<'a, Message> {
    Container::new(
        AnimatedSpinner::new(palette::NEUTRAL_600, rotation)
            .size(sizing::ICON_MD + spacing::XXS)
            .into_element(),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::PLACEHOLDER_HEIGHT))
    .center_x(Length::Fill)
    .center_y(Length::Fixed(sizing::PLACEHOLDER_HEIGHT))
    .style(container_styles::tile)
    .into()
}

fn failed_tile<'a>(ctx: &ViewContext<'a>, record: &ImageRecord, index: usize) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(
            icons::sized(icons::image(), sizing::ICON_LG)
                .style(overlay::icon(palette::NEUTRAL_600)),
        )
        .push(Text::new(ctx.i18n.tr("gallery-item-error")).size(typography::CAPTION))
        .push(
            Text::new(alt_text(ctx.i18n, record, index))
                .size(typography::CAPTION)
                .color(palette::NEUTRAL_700),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PLACEHOLDER_HEIGHT - spacing::XXL))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(container_styles::tile)
        .into()
}

fn caption_strip<'a>(i18n: &I18n, record: &ImageRecord) -> Element<'a, Message> {
    let line: Element<'a, Message> = match record.description() {
        Some(description) => Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(icons::sized(icons::info(), sizing::ICON_SM - 2.0).style(overlay::icon(palette::WHITE)))
            .push(Text::new(description.to_string()).size(typography::CAPTION))
            .into(),
        None => Text::new(i18n.tr("gallery-item-view"))
            .size(typography::CAPTION)
            .into(),
    };

    Container::new(
        Container::new(line)
            .width(Length::Fill)
            .padding(spacing::MD)
            .style(container_styles::caption_strip),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_y(Vertical::Bottom)
    .into()
}
