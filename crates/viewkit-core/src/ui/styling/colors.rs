//! Color definitions
//!
//! All colors are RGB565 for 16-bit embedded displays.
//!
//! # RGB565 Format
//! - Red: 5 bits (0-31)
//! - Green: 6 bits (0-63)
//! - Blue: 5 bits (0-31)
//!
//! To convert from 8-bit RGB: R>>3, G>>2, B>>3

use embedded_graphics::pixelcolor::Rgb565;

// ============================================================================
// Hex defaults (0xRRGGBB)
// ============================================================================

/// Circle indicator fill - pure green
pub const INDICATOR_GREEN_HEX: u32 = 0x00FF00;

/// Clock face background - deep blue
pub const CLOCK_BACKGROUND_HEX: u32 = 0x237EAD;

/// Clock light color - white, used for the minute and second hands
pub const CLOCK_LIGHT_HEX: u32 = 0xFFFFFF;

/// Clock dark color - 50% white over the clock background
///
/// RGB565 has no alpha channel, so the translucent white is pre-blended.
pub const CLOCK_DARK_HEX: u32 = 0x91BED6;

// ============================================================================
// Conversion
// ============================================================================

/// Convert `0xRRGGBB` to RGB565, dropping the low bits of each channel.
pub const fn rgb565_from_hex(hex: u32) -> Rgb565 {
    let r = ((hex >> 16) & 0xFF) as u8;
    let g = ((hex >> 8) & 0xFF) as u8;
    let b = (hex & 0xFF) as u8;
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

/// Linear blend between two RGB565 colors.
///
/// `t = 0.0` returns `from`, `t = 1.0` returns `to`; values outside are clamped.
pub fn lerp_rgb565(from: Rgb565, to: Rgb565, t: f32) -> Rgb565 {
    use embedded_graphics::pixelcolor::RgbColor;

    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| -> u8 { (a as f32 + (b as f32 - a as f32) * t + 0.5) as u8 };

    Rgb565::new(
        mix(from.r(), to.r()),
        mix(from.g(), to.g()),
        mix(from.b(), to.b()),
    )
}

// ============================================================================
// Clock Palette
// ============================================================================

/// Colors used by the clock face
///
/// - `dark`: outer arcs, hour labels, hour hand, start of the sweep gradient
/// - `light`: minute and second hands, end of the sweep gradient
/// - `background`: face fill and the tick marks cut into the scale ring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockPalette {
    pub dark: Rgb565,
    pub light: Rgb565,
    pub background: Rgb565,
}

impl Default for ClockPalette {
    fn default() -> Self {
        Self {
            dark: rgb565_from_hex(CLOCK_DARK_HEX),
            light: rgb565_from_hex(CLOCK_LIGHT_HEX),
            background: rgb565_from_hex(CLOCK_BACKGROUND_HEX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::pixelcolor::RgbColor;

    #[test]
    fn test_hex_conversion() {
        assert_eq!(rgb565_from_hex(0xFFFFFF), Rgb565::WHITE);
        assert_eq!(rgb565_from_hex(0x000000), Rgb565::BLACK);
        assert_eq!(rgb565_from_hex(0x00FF00), Rgb565::GREEN);
    }

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp_rgb565(Rgb565::BLACK, Rgb565::WHITE, 0.0), Rgb565::BLACK);
        assert_eq!(lerp_rgb565(Rgb565::BLACK, Rgb565::WHITE, 1.0), Rgb565::WHITE);
        assert_eq!(lerp_rgb565(Rgb565::BLACK, Rgb565::WHITE, 7.0), Rgb565::WHITE);

        let mid = lerp_rgb565(Rgb565::BLACK, Rgb565::WHITE, 0.5);
        assert_eq!(mid.r(), 16);
        assert_eq!(mid.g(), 32);
    }
}
