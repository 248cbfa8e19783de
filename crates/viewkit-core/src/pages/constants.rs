//! Shared constants for pages

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Number of circle indicators on the stack page
pub const STACK_PAGE_CIRCLE_COUNT: usize = 3;

/// Stack page background color
pub const STACK_PAGE_BACKGROUND: Rgb565 = Rgb565::BLACK;

/// Stack page title
pub const STACK_PAGE_TITLE: &str = "Stack";

/// Clock page title
pub const CLOCK_PAGE_TITLE: &str = "Clock";
