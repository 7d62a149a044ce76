// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and window geometry.

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Whether the `"{n}/{total}"` indicator is shown under the navigation buttons.
pub const DEFAULT_SHOW_POSITION_INDICATOR: bool = true;

/// Whether arrow keys and `d` drive the gallery.
pub const DEFAULT_KEYBOARD_NAVIGATION: bool = true;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_WINDOW_WIDTH <= WINDOW_DEFAULT_WIDTH);
    assert!(MIN_WINDOW_HEIGHT <= WINDOW_DEFAULT_HEIGHT);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_defaults_enable_indicator_and_keyboard() {
        assert!(DEFAULT_SHOW_POSITION_INDICATOR);
        assert!(DEFAULT_KEYBOARD_NAVIGATION);
    }
}
