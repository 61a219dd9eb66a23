//! UI Theme - Shared colors and color helpers
//!
//! The menu and game screens use the classic light look: off-white
//! background, black buttons that go dark gray on hover.

use macroquad::prelude::Color;

// =============================================================================
// Base Colors
// =============================================================================

/// Screen background (raylib's RAYWHITE)
pub const BG_COLOR: Color = Color::new(0.961, 0.961, 0.961, 1.0);

/// Button fill when idle
pub const BUTTON_COLOR: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Button fill when hovered (raylib's DARKGRAY)
pub const BUTTON_HOVER_COLOR: Color = Color::new(0.314, 0.314, 0.314, 1.0);

/// Player fill
pub const PLAYER_COLOR: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Default wall fill (raylib's GRAY)
pub const WALL_COLOR: Color = Color::new(0.51, 0.51, 0.51, 1.0);

/// HUD text
pub const HUD_TEXT: Color = Color::new(0.2, 0.2, 0.2, 1.0);

/// Debug overlay lines
pub const DEBUG_COLOR: Color = Color::new(0.9, 0.16, 0.22, 1.0);

// =============================================================================
// Font Sizes
// =============================================================================

/// Button label size
pub const FONT_SIZE_BUTTON: f32 = 20.0;

/// HUD text size
pub const FONT_SIZE_HUD: f32 = 20.0;

/// Title text size
pub const FONT_SIZE_TITLE: f32 = 40.0;

// =============================================================================
// Color helpers
// =============================================================================

fn to_u8(channel: f32) -> i16 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as i16
}

fn from_u8(channel: i16) -> f32 {
    channel.clamp(0, 255) as f32 / 255.0
}

/// Shift every RGB channel by `delta` (in 0..255 space), clamped; alpha untouched
pub fn brightness(color: Color, delta: i8) -> Color {
    let d = delta as i16;
    Color::new(
        from_u8(to_u8(color.r) + d),
        from_u8(to_u8(color.g) + d),
        from_u8(to_u8(color.b) + d),
        color.a,
    )
}

pub fn darken(color: Color) -> Color {
    brightness(color, -30)
}

pub fn lighten(color: Color) -> Color {
    brightness(color, 30)
}

/// RGB negative, alpha untouched
pub fn invert(color: Color) -> Color {
    Color::new(
        from_u8(255 - to_u8(color.r)),
        from_u8(255 - to_u8(color.g)),
        from_u8(255 - to_u8(color.b)),
        color.a,
    )
}

/// Build a color from a serialized `[r, g, b, a]`
pub fn rgba(c: [u8; 4]) -> Color {
    Color::from_rgba(c[0], c[1], c[2], c[3])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes(c: Color) -> [u8; 4] {
        [c.r, c.g, c.b, c.a].map(|v| (v * 255.0).round() as u8)
    }

    #[test]
    fn test_brightness_clamps() {
        let c = Color::from_rgba(250, 10, 128, 200);
        assert_eq!(bytes(lighten(c)), [255, 40, 158, 200]);
        assert_eq!(bytes(darken(c)), [220, 0, 98, 200]);
    }

    #[test]
    fn test_darken_black_stays_black() {
        assert_eq!(bytes(darken(BUTTON_COLOR)), [0, 0, 0, 255]);
    }

    #[test]
    fn test_invert() {
        let c = Color::from_rgba(0, 80, 255, 128);
        assert_eq!(bytes(invert(c)), [255, 175, 0, 128]);
        // Black buttons get white labels
        assert_eq!(bytes(invert(BUTTON_COLOR)), [255, 255, 255, 255]);
    }
}
