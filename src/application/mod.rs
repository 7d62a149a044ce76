// SPDX-License-Identifier: MPL-2.0
//! Application layer - gallery state and the projection derived from it.
//!
//! - [`store`]: the [`GalleryStore`] owning navigation state and notifying
//!   subscribers
//! - [`projection`]: pure render description built from the store
//! - [`port`]: traits implemented by infrastructure adapters
//!
//! The application layer depends on the domain layer only; the presentation
//! layer (`ui`) consumes [`GalleryView`] and drives [`GalleryStore`].

pub mod port;
pub mod projection;
pub mod store;

pub use projection::{GalleryView, ProjectionOptions};
pub use store::{Change, GalleryStore, SubscriptionId, ViewState};
