// SPDX-License-Identifier: MPL-2.0
//! Built-in car catalog shipped with the application.

use super::{Collection, ImageRef, Item, ItemId};
use crate::error::Result;

pub const GLS_600: ImageRef = ImageRef::from_static("gls_600.svg");
pub const GTR_35: ImageRef = ImageRef::from_static("gtr_35.svg");
pub const URUS_PERFORMANTE: ImageRef = ImageRef::from_static("urus_performante2.svg");
pub const LEXUS_RX_350: ImageRef = ImageRef::from_static("lexus_rx_350.svg");

/// The four cars presented by the gallery.
///
/// # Errors
///
/// Only fails if the catalog below is edited into an invalid collection.
pub fn cars() -> Result<Collection> {
    Collection::new(vec![
        Item::new(
            ItemId::new(1),
            GLS_600,
            "Mercedes-Maybach GLS",
            "Mercedes-Benz",
            "2024",
        )
        .with_description(
            "SUV de luxe ultime combinant élégance et performance dans un design imposant",
        ),
        Item::new(ItemId::new(2), GTR_35, "Nissan GT-R", "Nissan", "2024").with_description(
            "Supercar japonaise légendaire, symbole de performance et d'innovation technologique",
        ),
        Item::new(
            ItemId::new(3),
            URUS_PERFORMANTE,
            "Lamborghini Urus",
            "Lamborghini",
            "2024",
        )
        .with_description("Le super SUV italien qui redéfinit les codes du luxe sportif automobile"),
        Item::new(ItemId::new(4), LEXUS_RX_350, "Lexus NX", "Lexus", "2024").with_description(
            "SUV compact premium alliant raffinement japonais et design contemporain",
        ),
    ])
}
