// SPDX-License-Identifier: MPL-2.0
//! Gallery domain: items and the fixed collection they live in.

pub mod catalog;
mod collection;
mod item;

pub use collection::Collection;
pub use item::{ImageRef, Item, ItemId};
