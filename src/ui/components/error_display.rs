// SPDX-License-Identifier: MPL-2.0
//! Failure panel shown in place of the gallery when it cannot be rendered.
//!
//! A red alert icon sits above the heading and explanation. Below them are a
//! white pill reload button and a link that expands the technical details.

use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles::{button as button_styles, overlay};
use iced::alignment::Horizontal;
use iced::widget::{button, rule, Column, Container, Text};
use iced::{Element, Length};

const PANEL_MAX_WIDTH: f32 = 500.0;

/// Localized strings for the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaultLabels {
    pub title: String,
    pub message: String,
    pub reload: String,
    pub show_details: String,
    pub hide_details: String,
    pub details_heading: String,
}

/// The reason and the messages the panel emits.
#[derive(Debug, Clone)]
pub struct FaultPanel<Message> {
    pub labels: FaultLabels,
    pub details: String,
    pub details_visible: bool,
    pub on_reload: Message,
    pub on_toggle_details: Message,
}

impl<Message: Clone + 'static> FaultPanel<Message> {
    /// Label of the details link for the current expansion state.
    #[must_use]
    pub fn toggle_label(&self) -> &str {
        if self.details_visible {
            &self.labels.hide_details
        } else {
            &self.labels.show_details
        }
    }

    /// Renders the panel centered horizontally, sized to its content.
    pub fn view(self) -> Element<'static, Message> {
        let toggle_label = self.toggle_label().to_string();
        let FaultPanel {
            labels,
            details,
            details_visible,
            on_reload,
            on_toggle_details,
        } = self;

        let mut content = Column::new()
            .spacing(spacing::SM)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .push(
                icons::sized(icons::alert_circle(), sizing::ICON_XL)
                    .style(overlay::icon(palette::ERROR_500)),
            )
            .push(
                Text::new(labels.title)
                    .size(typography::TITLE_MD)
                    .color(palette::WHITE),
            )
            .push(
                Text::new(labels.message)
                    .size(typography::BODY)
                    .color(palette::NEUTRAL_400),
            )
            .push(
                Container::new(
                    button(Text::new(labels.reload).size(typography::BODY))
                        .padding([spacing::XS, spacing::MD])
                        .style(button_styles::primary)
                        .on_press(on_reload),
                )
                .padding([spacing::LG, 0.0]),
            )
            .push(
                button(Text::new(toggle_label).size(typography::CAPTION))
                    .style(button_styles::link)
                    .on_press(on_toggle_details),
            );

        if details_visible {
            content = content.push(
                Column::new()
                    .spacing(spacing::XS)
                    .width(Length::Fill)
                    .push(rule::horizontal(1))
                    .push(
                        Text::new(labels.details_heading)
                            .size(typography::BODY)
                            .color(palette::NEUTRAL_500),
                    )
                    .push(
                        Text::new(details)
                            .size(typography::CAPTION)
                            .color(palette::NEUTRAL_500),
                    ),
            );
        }

        Container::new(
            Container::new(content)
                .width(Length::Fill)
                .max_width(PANEL_MAX_WIDTH)
                .padding(spacing::LG),
        )
        .width(Length::Fill)
        .padding([spacing::SECTION, 0.0])
        .align_x(Horizontal::Center)
        .into()
    }
}
