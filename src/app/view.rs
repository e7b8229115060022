// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Composes the page (header, hero, grid, footer), the back-to-top button and
//! the lightbox overlay. While a render fault is recorded, the gallery region
//! shows the fault panel offering a reload and the lightbox is not drawn.

use super::{Message, SCROLLABLE_ID};
use crate::config::SiteConfig;
use crate::gallery::{GalleryState, ItemTrackers, LightboxController};
use crate::i18n::fluent::I18n;
use crate::ui::components::error_display::{FaultLabels, FaultPanel};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::container as container_styles;
use crate::ui::{chrome, grid, lightbox};
use iced::alignment::Horizontal;
use iced::widget::scrollable::Viewport;
use iced::widget::{Column, Container, Id, Scrollable, Stack, Text};
use iced::{Element, Length};
use std::time::{Duration, Instant};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub site: &'a SiteConfig,
    pub config_warning: Option<&'a str>,
    pub gallery: &'a GalleryState,
    pub trackers: &'a ItemTrackers,
    pub lightbox: &'a LightboxController,
    pub columns: usize,
    pub back_to_top: bool,
    pub now: Instant,
    pub reveal: Duration,
    pub spinner_rotation: f32,
    pub fault: Option<&'a str>,
    pub show_fault_details: bool,
}

/// Describes why the current state cannot be rendered, if it cannot.
pub(super) fn render_fault(
    gallery: &GalleryState,
    trackers: &ItemTrackers,
    lightbox: &LightboxController,
) -> Option<String> {
    if !lightbox.is_consistent() {
        return Some(format!(
            "lightbox index {:?} outside its image list",
            lightbox.current_index()
        ));
    }
    if !gallery.is_loading() && trackers.len() != gallery.len() {
        return Some(format!(
            "{} load trackers for {} images",
            trackers.len(),
            gallery.len()
        ));
    }
    None
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content: Element<'_, Message> = if let Some(details) = ctx.fault {
        view_fault(ctx.i18n, details.to_string(), ctx.show_fault_details)
    } else if ctx.gallery.is_loading() {
        chrome::loading(ctx.i18n, ctx.spinner_rotation).map(Message::Chrome)
    } else {
        grid::view(grid::ViewContext {
            i18n: ctx.i18n,
            images: ctx.gallery.images(),
            trackers: ctx.trackers,
            columns: ctx.columns,
            now: ctx.now,
            reveal: ctx.reveal,
            spinner_rotation: ctx.spinner_rotation,
        })
        .map(Message::Grid)
    };

    let mut page = Column::new()
        .width(Length::Fill)
        .push(chrome::hero(ctx.site).map(Message::Chrome))
        .push(
            Container::new(content)
                .max_width(sizing::CONTENT_MAX_WIDTH)
                .padding([0.0, spacing::LG]),
        )
        .push(chrome::footer(ctx.i18n, ctx.site, ctx.gallery.summary()).map(Message::Chrome));

    if let Some(key) = ctx.config_warning {
        page = page.push(
            Container::new(
                Text::new(ctx.i18n.tr(key))
                    .size(typography::CAPTION)
                    .color(palette::WARNING_500),
            )
            .width(Length::Fill)
            .padding(spacing::SM)
            .align_x(Horizontal::Center),
        );
    }

    let scrollable = Scrollable::new(
        Container::new(page.align_x(Horizontal::Center)).center_x(Length::Fill),
    )
    .id(Id::new(SCROLLABLE_ID))
    .width(Length::Fill)
    .height(Length::Fill)
    .on_scroll(|viewport: Viewport| Message::Scrolled(viewport.absolute_offset().y));

    let mut body = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(scrollable);
    if let Some(button) = chrome::back_to_top(ctx.back_to_top) {
        body = body.push(button.map(Message::Chrome));
    }

    let page = Container::new(
        Column::new()
            .push(chrome::header(ctx.site).map(Message::Chrome))
            .push(body),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(container_styles::page);

    if ctx.fault.is_some() {
        return page.into();
    }

    let overlay = lightbox::view(lightbox::ViewContext {
        i18n: ctx.i18n,
        lightbox: ctx.lightbox,
        now: ctx.now,
        reveal: ctx.reveal,
        spinner_rotation: ctx.spinner_rotation,
    });

    match overlay {
        Some(overlay) => Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(page)
            .push(overlay.map(Message::Lightbox))
            .into(),
        None => page.into(),
    }
}

fn view_fault<'a>(i18n: &I18n, details: String, show_details: bool) -> Element<'a, Message> {
    FaultPanel {
        labels: FaultLabels {
            title: i18n.tr("render-fault-title"),
            message: i18n.tr("render-fault-message"),
            reload: i18n.tr("render-fault-reload"),
            show_details: i18n.tr("error-details-show"),
            hide_details: i18n.tr("error-details-hide"),
            details_heading: i18n.tr("error-details-technical-heading"),
        },
        details,
        details_visible: show_details,
        on_reload: Message::Reload,
        on_toggle_details: Message::ToggleFaultDetails,
    }
    .view()
}
