// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::gallery;
use crate::ui::theming::ThemeMode;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed from the CLI.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Overrides `[general] theme_mode` for this run only.
    pub theme: Option<ThemeMode>,
}
