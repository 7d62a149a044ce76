// SPDX-License-Identifier: MPL-2.0
//! Gallery item record and its identifier newtypes.

use std::borrow::Cow;
use std::fmt;

/// Unique identifier of a gallery item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u32);

impl ItemId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque handle to a visual asset.
///
/// The gallery never interprets the reference; it is handed to an
/// [`AssetSource`](crate::application::port::AssetSource) for resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(Cow<'static, str>);

impl ImageRef {
    #[must_use]
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One gallery entry. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    image_ref: ImageRef,
    title: String,
    subtitle: String,
    year: String,
    description: Option<String>,
}

impl Item {
    #[must_use]
    pub fn new(
        id: ItemId,
        image_ref: ImageRef,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            id,
            image_ref,
            title: title.into(),
            subtitle: subtitle.into(),
            year: year.into(),
            description: None,
        }
    }

    /// Attaches the optional extended text.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[must_use]
    pub fn image_ref(&self) -> &ImageRef {
        &self.image_ref
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Maker name, shown next to the year.
    #[must_use]
    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    #[must_use]
    pub fn year(&self) -> &str {
        &self.year
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn has_description(&self) -> bool {
        self.description.is_some()
    }

    /// `"{subtitle} ({year})"`, as shown under the title.
    #[must_use]
    pub fn byline(&self) -> String {
        format!("{} ({})", self.subtitle, self.year)
    }
}
