// SPDX-License-Identifier: MPL-2.0
//! Info panel: title, maker and year, and the collapsible description.

use super::Message;
use crate::application::projection::{DescriptionSection, InfoPanel};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::Horizontal,
    widget::{button, text, Column, Container, Text},
    Element, Length, Theme,
};

fn secondary_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_secondary),
    }
}

fn toggle_text(section: &DescriptionSection<'_>, i18n: &I18n) -> String {
    i18n.tr(section.toggle.i18n_key())
}

pub fn view<'a>(info: InfoPanel<'a>, i18n: &I18n) -> Element<'a, Message> {
    let title = Text::new(info.title)
        .size(typography::TITLE)
        .font(typography::BOLD);

    let byline = Text::new(info.byline)
        .size(typography::BODY)
        .font(typography::MEDIUM)
        .style(secondary_text);

    let mut column = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(title)
        .push(byline);

    if let Some(section) = info.description {
        let label = Text::new(toggle_text(&section, i18n)).size(typography::CAPTION);
        let toggle = button(label)
            .on_press(Message::ToggleDescription)
            .padding([spacing::XXS, spacing::MD])
            .style(styles::button::text_link);
        column = column.push(toggle);

        if let Some(description) = section.text {
            let body = Container::new(Text::new(description).size(typography::CAPTION))
                .padding(spacing::XS)
                .width(Length::Fill)
                .style(styles::container::description);
            column = column.push(body);
        }
    }

    Container::new(column)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::info_panel)
        .into()
}
