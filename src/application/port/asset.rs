// SPDX-License-Identifier: MPL-2.0
//! Asset resolution port.
//!
//! Maps an [`ImageRef`] to the raw bytes of a displayable image. Adapters
//! live in `crate::infrastructure`.

use crate::domain::gallery::ImageRef;
use crate::error::Result;
use std::borrow::Cow;

/// Resolves image references to encoded image bytes (SVG for the bundled
/// catalog).
pub trait AssetSource: Send + Sync {
    /// Returns the bytes behind `image_ref`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Asset`](crate::error::Error::Asset) when the reference
    /// is unknown to this source.
    fn resolve(&self, image_ref: &ImageRef) -> Result<Cow<'static, [u8]>>;
}
