// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: artwork, info panel and navigation controls.
//!
//! Rendering reads a [`GalleryView`] projection; `update` forwards user
//! intents to the [`GalleryStore`].

mod artwork;
mod controls;
mod handles;
mod info_panel;

pub use handles::ImageHandles;

use crate::application::projection::GalleryView;
use crate::application::store::GalleryStore;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use iced::{
    alignment::Horizontal,
    widget::{Column, Container},
    Element, Length,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Previous,
    Next,
    ToggleDescription,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub view: GalleryView<'a>,
    pub handles: &'a ImageHandles,
}

/// Applies a gallery message to the store.
///
/// `ToggleDescription` is ignored for items without a description: the
/// button is absent for them, and the keyboard shortcut follows the button.
pub fn update(store: &mut GalleryStore, message: Message) {
    match message {
        Message::Previous => store.previous(),
        Message::Next => store.next(),
        Message::ToggleDescription => {
            if store.current_item().has_description() {
                store.toggle_description();
            }
        }
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let GalleryView {
        display,
        info,
        navigation,
    } = ctx.view;

    let artwork = artwork::view(&display, ctx.handles, ctx.i18n);

    let details = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(info_panel::view(info, ctx.i18n))
        .push(controls::view(navigation, ctx.i18n));

    let content = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .push(artwork)
        .push(details);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
