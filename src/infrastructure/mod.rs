// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer - adapters implementing application ports.
//!
//! - [`embedded`]: [`AssetSource`](crate::application::port::AssetSource)
//!   over files compiled into the binary with `rust-embed`

pub mod embedded;

pub use embedded::EmbeddedAssets;
