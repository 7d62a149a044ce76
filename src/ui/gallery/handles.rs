// SPDX-License-Identifier: MPL-2.0
//! Pre-resolved SVG handles, one per catalog image.

use crate::application::port::AssetSource;
use crate::domain::gallery::{Collection, ImageRef};
use iced::widget::svg;
use std::collections::HashMap;

/// SVG handles keyed by image reference.
///
/// Built once at startup so `view` never touches the asset source.
#[derive(Debug, Clone, Default)]
pub struct ImageHandles {
    handles: HashMap<ImageRef, svg::Handle>,
}

impl ImageHandles {
    /// Resolves every image of the collection.
    ///
    /// Unresolvable images are logged and skipped; the view renders a
    /// placeholder for them.
    pub fn preload(collection: &Collection, source: &dyn AssetSource) -> Self {
        let mut handles = HashMap::with_capacity(collection.len());

        for item in collection {
            let image_ref = item.image_ref();
            if handles.contains_key(image_ref) {
                continue;
            }
            match source.resolve(image_ref) {
                Ok(bytes) => {
                    handles.insert(image_ref.clone(), svg::Handle::from_memory(bytes));
                }
                Err(err) => {
                    tracing::warn!(image = %image_ref, item = %item.id(), "{err}");
                }
            }
        }

        Self { handles }
    }

    #[must_use]
    pub fn get(&self, image_ref: &ImageRef) -> Option<&svg::Handle> {
        self.handles.get(image_ref)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
