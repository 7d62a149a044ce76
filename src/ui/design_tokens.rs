// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Centralized visual constants for the gallery screen.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Elevation shadows

## Examples

```
use car_gallery::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let border = Color {
    a: opacity::BORDER_SUBTLE,
    ..palette::GRAY_400
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.5, 0.5, 0.5);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.9, 0.9, 0.92);

    // Brand colors (indigo scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.6, 0.56, 0.9);
    pub const PRIMARY_500: Color = Color::from_rgb(0.4, 0.31, 0.64);
    pub const PRIMARY_600: Color = Color::from_rgb(0.32, 0.24, 0.54);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Hairline border around the artwork.
    pub const BORDER_SUBTLE: f32 = 0.3;
    pub const SHADOW: f32 = 0.25;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const NAV_BUTTON_HEIGHT: f32 = 48.0;
    /// Widest the info panel and controls grow on large windows.
    pub const CONTENT_MAX_WIDTH: f32 = 720.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font sizes, largest first, and the weights used with them.

    use iced::font::{Font, Weight};

    pub const BOLD: Font = Font {
        weight: Weight::Bold,
        ..Font::DEFAULT
    };

    pub const MEDIUM: Font = Font {
        weight: Weight::Medium,
        ..Font::DEFAULT
    };

    /// "Car Gallery" banner.
    pub const BANNER: f32 = 24.0;

    /// Item title in the info panel.
    pub const TITLE: f32 = 20.0;

    /// Navigation button labels.
    pub const BUTTON: f32 = 16.0;

    /// Maker and year.
    pub const BODY: f32 = 14.0;

    /// Description text, toggle label, position indicator.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    /// Pill-shaped navigation buttons (half the button height).
    pub const PILL: f32 = 24.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    const COLOR: Color = Color {
        a: opacity::SHADOW,
        ..palette::BLACK
    };

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Elevation of the info panel.
    pub const SM: Shadow = Shadow {
        color: COLOR,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    /// Elevation of the artwork frame.
    pub const MD: Shadow = Shadow {
        color: COLOR,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::MD > spacing::XS);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::BORDER_SUBTLE > 0.0 && opacity::BORDER_SUBTLE < 1.0);

    assert!(typography::BANNER > typography::TITLE);
    assert!(typography::TITLE > typography::BUTTON);
    assert!(typography::BUTTON > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > 0.0);
    assert!(radius::PILL * 2.0 == sizing::NAV_BUTTON_HEIGHT);
};
