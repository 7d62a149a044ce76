// SPDX-License-Identifier: MPL-2.0
//! Asset source backed by files compiled into the binary.

use crate::application::port::AssetSource;
use crate::domain::gallery::ImageRef;
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use std::borrow::Cow;

#[derive(RustEmbed)]
#[folder = "assets/gallery/"]
struct GalleryAssets;

/// Serves the gallery illustrations bundled under `assets/gallery/`.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedAssets;

impl AssetSource for EmbeddedAssets {
    fn resolve(&self, image_ref: &ImageRef) -> Result<Cow<'static, [u8]>> {
        GalleryAssets::get(image_ref.as_str())
            .map(|file| file.data)
            .ok_or_else(|| Error::Asset(format!("no embedded asset named '{image_ref}'")))
    }
}
