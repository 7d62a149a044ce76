// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure gallery types.
//!
//! Nothing here depends on Iced, the filesystem, or localization. The
//! application and presentation layers build on these types.

pub mod gallery;
