//! Styling for the built-in views
//!
//! - [`colors`] - RGB565 constants, hex conversion and the clock palette
//! - [`layout`] - Padding

pub mod colors;
pub mod layout;

pub use colors::{ClockPalette, lerp_rgb565, rgb565_from_hex};
pub use layout::Padding;
