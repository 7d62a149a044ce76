// SPDX-License-Identifier: MPL-2.0
//! Display area: the car illustration on its white "wall".

use super::{ImageHandles, Message};
use crate::application::projection::{DisplayArea, ImageFit};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{svg, Container, Svg, Text},
    ContentFit, Element, Length,
};

fn content_fit(fit: ImageFit) -> ContentFit {
    match fit {
        ImageFit::Contain => ContentFit::Contain,
    }
}

/// What the display area shows: the image, or a text naming what is missing.
#[derive(Debug, Clone, PartialEq)]
enum Content<'a> {
    Image(&'a svg::Handle),
    Placeholder(String),
}

fn content<'a>(display: &DisplayArea<'_>, handles: &'a ImageHandles, i18n: &I18n) -> Content<'a> {
    match handles.get(display.image_ref) {
        Some(handle) => Content::Image(handle),
        None => Content::Placeholder(format!(
            "{}: {}",
            i18n.tr("gallery-image-missing"),
            display.alt_text
        )),
    }
}

pub fn view<'a>(
    display: &DisplayArea<'_>,
    handles: &'a ImageHandles,
    i18n: &I18n,
) -> Element<'a, Message> {
    let body: Element<'a, Message> = match content(display, handles, i18n) {
        Content::Image(handle) => Svg::new(handle.clone())
            .content_fit(content_fit(display.fit))
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Content::Placeholder(placeholder) => {
            Container::new(Text::new(placeholder).size(typography::BODY))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .into()
        }
    };

    let bordered = Container::new(body)
        .padding(border::WIDTH_MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::artwork_border);

    Container::new(bordered)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::artwork_frame)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::{catalog, ImageRef};
    use crate::infrastructure::EmbeddedAssets;

    #[test]
    fn contain_maps_to_iced_contain() {
        assert_eq!(content_fit(ImageFit::Contain), ContentFit::Contain);
    }

    #[test]
    fn missing_handle_shows_placeholder_naming_the_item() {
        let i18n = I18n::default();
        let handles = ImageHandles::default();
        let image_ref = ImageRef::from_static("missing.svg");
        let display = DisplayArea {
            image_ref: &image_ref,
            alt_text: "Nissan GT-R",
            fit: ImageFit::Contain,
        };

        assert_eq!(
            content(&display, &handles, &i18n),
            Content::Placeholder("Image indisponible: Nissan GT-R".to_string())
        );
        let _element = view(&display, &handles, &i18n);
    }

    #[test]
    fn preloaded_handle_shows_image() {
        let i18n = I18n::default();
        let collection = catalog::cars().unwrap();
        let handles = ImageHandles::preload(&collection, &EmbeddedAssets);
        let image_ref = catalog::GTR_35;
        let display = DisplayArea {
            image_ref: &image_ref,
            alt_text: "Nissan GT-R",
            fit: ImageFit::Contain,
        };

        assert!(matches!(
            content(&display, &handles, &i18n),
            Content::Image(_)
        ));
    }
}
