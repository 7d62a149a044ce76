// SPDX-License-Identifier: MPL-2.0
//! View projection: a pure function from gallery state to a render
//! description.
//!
//! The projection decides *what* is on screen (which image, which texts,
//! which controls). The `ui::gallery` module decides *how* it looks.

use crate::application::store::ViewState;
use crate::domain::gallery::{Collection, ImageRef};
use std::fmt;

/// Presentation switches read from the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionOptions {
    /// Whether the `"{n}/{total}"` indicator is part of the navigation controls.
    pub show_position: bool,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            show_position: true,
        }
    }
}

/// How the image is scaled into the display area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFit {
    /// Fit inside the area, preserving aspect ratio.
    Contain,
}

/// Label shown on the description toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleLabel {
    Show,
    Hide,
}

impl ToggleLabel {
    #[must_use]
    pub fn for_visibility(visible: bool) -> Self {
        if visible {
            ToggleLabel::Hide
        } else {
            ToggleLabel::Show
        }
    }

    /// Returns the i18n message key for this label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ToggleLabel::Show => "gallery-description-show",
            ToggleLabel::Hide => "gallery-description-hide",
        }
    }
}

/// 1-based position out of the total count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub current: usize,
    pub total: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.total)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayArea<'a> {
    pub image_ref: &'a ImageRef,
    /// Accessible description of the image (the item title).
    pub alt_text: &'a str,
    pub fit: ImageFit,
}

/// Toggle plus the optional text, present only for items with a description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionSection<'a> {
    pub toggle: ToggleLabel,
    /// `Some` only while the description is visible.
    pub text: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoPanel<'a> {
    pub title: &'a str,
    pub byline: String,
    pub description: Option<DescriptionSection<'a>>,
}

/// Previous/next are always enabled, so only the indicator varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationControls {
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryView<'a> {
    pub display: DisplayArea<'a>,
    pub info: InfoPanel<'a>,
    pub navigation: NavigationControls,
}

impl GalleryView<'_> {
    /// Whether the description toggle is offered.
    #[must_use]
    pub fn has_description_toggle(&self) -> bool {
        self.info.description.is_some()
    }
}

/// Projects the collection and the view state into a [`GalleryView`].
///
/// Assumes `state.current_index()` is valid for `collection`, which
/// [`GalleryStore`](crate::application::store::GalleryStore) guarantees.
#[must_use]
pub fn project<'a>(
    collection: &'a Collection,
    state: &ViewState,
    options: &ProjectionOptions,
) -> GalleryView<'a> {
    let item = &collection[state.current_index()];

    let description = item.description().map(|text| DescriptionSection {
        toggle: ToggleLabel::for_visibility(state.description_visible()),
        text: state.description_visible().then_some(text),
    });

    let position = options.show_position.then(|| Position {
        current: state.current_index() + 1,
        total: collection.len(),
    });

    GalleryView {
        display: DisplayArea {
            image_ref: item.image_ref(),
            alt_text: item.title(),
            fit: ImageFit::Contain,
        },
        info: InfoPanel {
            title: item.title(),
            byline: item.byline(),
            description,
        },
        navigation: NavigationControls { position },
    }
}
