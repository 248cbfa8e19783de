//! View configuration
//!
//! Default sizes and colors for the built-in views. The configuration is a
//! plain serde struct so hosts can persist it as a compact `postcard` blob and
//! load it back at startup.

extern crate alloc;

use alloc::vec::Vec;
use embedded_graphics::pixelcolor::Rgb565;
use serde::{Deserialize, Serialize};
use thiserror_no_std::Error;

use crate::ui::styling::colors::{
    ClockPalette, rgb565_from_hex, CLOCK_BACKGROUND_HEX, CLOCK_DARK_HEX, CLOCK_LIGHT_HEX,
    INDICATOR_GREEN_HEX,
};

/// Fallback edge length of the circle indicator when the parent gives no size
pub const DEFAULT_CIRCLE_SIZE_PX: u32 = 100;

/// Fallback and `AtMost` cap for each clock face axis
pub const DEFAULT_CLOCK_SIZE_PX: u32 = 800;

/// Hour label size in pixels
pub const DEFAULT_CLOCK_TEXT_SIZE_PX: u32 = 14;

/// Errors from encoding or decoding a persisted configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to encode view config: {0:?}")]
    Encode(postcard::Error),

    #[error("Failed to decode view config: {0:?}")]
    Decode(postcard::Error),
}

/// Defaults consumed by the views before any constraint is applied.
///
/// Colors are stored as `0xRRGGBB` so the blob does not depend on the
/// display's pixel format.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewConfig {
    pub circle_default_size: u32,
    pub circle_color: u32,
    pub clock_default_size: u32,
    pub clock_dark_color: u32,
    pub clock_light_color: u32,
    pub clock_background_color: u32,
    pub clock_text_size: u32,
    /// Offset of local time from UTC, used when converting Unix time
    pub utc_offset_minutes: i32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            circle_default_size: DEFAULT_CIRCLE_SIZE_PX,
            circle_color: INDICATOR_GREEN_HEX,
            clock_default_size: DEFAULT_CLOCK_SIZE_PX,
            clock_dark_color: CLOCK_DARK_HEX,
            clock_light_color: CLOCK_LIGHT_HEX,
            clock_background_color: CLOCK_BACKGROUND_HEX,
            clock_text_size: DEFAULT_CLOCK_TEXT_SIZE_PX,
            utc_offset_minutes: 0,
        }
    }
}

impl ViewConfig {
    pub fn circle_color(&self) -> Rgb565 {
        rgb565_from_hex(self.circle_color)
    }

    pub fn clock_palette(&self) -> ClockPalette {
        ClockPalette {
            dark: rgb565_from_hex(self.clock_dark_color),
            light: rgb565_from_hex(self.clock_light_color),
            background: rgb565_from_hex(self.clock_background_color),
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ConfigError> {
        postcard::to_allocvec(self).map_err(ConfigError::Encode)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        postcard::from_bytes(bytes).map_err(ConfigError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::pixelcolor::RgbColor;

    #[test]
    fn test_config_survives_postcard() {
        let config = ViewConfig {
            circle_default_size: 64,
            utc_offset_minutes: -300,
            ..ViewConfig::default()
        };

        let bytes = config.to_bytes().unwrap();
        let decoded = ViewConfig::from_bytes(&bytes).unwrap();

        assert_eq!(decoded, config);
    }

    #[test]
    fn test_truncated_blob_is_rejected() {
        let bytes = ViewConfig::default().to_bytes().unwrap();
        let result = ViewConfig::from_bytes(&bytes[..bytes.len() / 2]);

        assert!(matches!(result, Err(ConfigError::Decode(_))));
    }

    #[test]
    fn test_default_palette() {
        let palette = ViewConfig::default().clock_palette();
        assert_eq!(palette.light, Rgb565::WHITE);
        assert_eq!(palette.background, Rgb565::new(0x23 >> 3, 0x7E >> 2, 0xAD >> 3));
    }
}
