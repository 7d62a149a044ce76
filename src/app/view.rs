// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application: the banner above the gallery.

use super::Message;
use crate::application::projection::GalleryView;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::gallery::{self, ImageHandles};
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::Horizontal,
    widget::{text, Column, Container, Text},
    Element, Length, Theme,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: GalleryView<'a>,
    pub handles: &'a ImageHandles,
}

fn banner_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).brand_primary),
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let banner = Text::new(ctx.i18n.tr("gallery-banner"))
        .size(typography::BANNER)
        .font(typography::BOLD)
        .style(banner_text);

    let gallery = gallery::view(gallery::ViewContext {
        i18n: ctx.i18n,
        view: ctx.gallery,
        handles: ctx.handles,
    })
    .map(Message::Gallery);

    let column = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .push(banner)
        .push(gallery);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
