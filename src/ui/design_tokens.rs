// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Colors, spacing and font sizes shared by the gallery and the zoom layer.

## Organization

- **Palette**: Base colors
- **Spacing**: Spacing scale (8px grid)
- **Typography**: Font size scale

## Examples

```
use pinch_lens::ui::design_tokens::{palette, spacing};
use iced::Color;

// Backdrop color at 40% dimming
let backdrop = Color {
    a: 0.4,
    ..palette::BACKDROP
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

    pub const BLACK: Color = Color::BLACK;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    /// Dimming layer behind a zoomed picture; alpha comes from the zoom scale.
    pub const BACKDROP: Color = BLACK;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    /// Empty-state headline.
    pub const TITLE_SM: f32 = 18.0;

    /// Captions under thumbnails.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(typography::TITLE_SM > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn backdrop_is_opaque_black_before_dimming() {
        assert_eq!(palette::BACKDROP, Color::BLACK);
    }
}
