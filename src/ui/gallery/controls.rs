// SPDX-License-Identifier: MPL-2.0
//! Previous/next buttons and the position indicator.

use super::Message;
use crate::application::projection::NavigationControls;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

fn nav_button<'a>(label: String, message: Message) -> Element<'a, Message> {
    let label = Container::new(
        Text::new(label)
            .size(typography::BUTTON)
            .font(typography::MEDIUM),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center);

    button(label)
        .on_press(message)
        .width(Length::FillPortion(1))
        .height(Length::Fixed(sizing::NAV_BUTTON_HEIGHT))
        .style(styles::button::navigation)
        .into()
}

fn position_text(navigation: NavigationControls) -> Option<String> {
    navigation.position.map(|position| position.to_string())
}

pub fn view<'a>(navigation: NavigationControls, i18n: &I18n) -> Element<'a, Message> {
    let buttons = Row::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .push(nav_button(
            i18n.tr("gallery-previous-button"),
            Message::Previous,
        ))
        .push(nav_button(i18n.tr("gallery-next-button"), Message::Next));

    let mut controls = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(buttons);

    if let Some(position) = position_text(navigation) {
        controls = controls.push(Text::new(position).size(typography::CAPTION));
    }

    controls.into()
}
