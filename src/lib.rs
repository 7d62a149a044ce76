// SPDX-License-Identifier: MPL-2.0
//! `car_gallery` is a small car image gallery built with the Iced GUI framework.
//!
//! One car is shown at a time with its maker, year and an optional
//! description. Previous/next navigation wraps around the collection.
//!
//! # Layers
//!
//! - [`domain`] - Items, the collection and the built-in catalog
//! - [`application`] - The gallery store, its view projection and ports
//! - [`infrastructure`] - Embedded SVG assets
//! - [`app`] - Iced application shell, configuration and paths
//! - [`ui`] - Widgets, styles and theming
//! - [`i18n`] - Fluent localization

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
