// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! - [`asset`]: image reference resolution
//!
//! Traits use domain types only (no Iced handles), and return the crate
//! [`Result`](crate::error::Result).

pub mod asset;

pub use asset::AssetSource;
