//! Sweep gradient for the scale ring
//!
//! Colors around a circle depend only on the angle. The gradient starts at
//! `start_deg` (clockwise from 3 o'clock), holds the dark color for the first
//! [`GRADIENT_DARK_STOP`] of the turn, then blends to the light color. With
//! the start set to `second - 90` the brightest part of the ring trails just
//! behind the second hand, like a radar sweep.

use embedded_graphics::pixelcolor::Rgb565;

use super::constants::GRADIENT_DARK_STOP;
use crate::ui::styling::lerp_rgb565;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepGradient {
    pub dark: Rgb565,
    pub light: Rgb565,
    pub start_deg: f32,
}

impl SweepGradient {
    pub fn new(dark: Rgb565, light: Rgb565) -> Self {
        Self {
            dark,
            light,
            start_deg: 0.0,
        }
    }

    /// Rotate the gradient so it ends at the second hand.
    ///
    /// The hand angle is measured from 12 o'clock, the gradient from 3 o'clock.
    pub fn following_second_hand(mut self, second_deg: f32) -> Self {
        self.start_deg = second_deg - 90.0;
        self
    }

    /// Position in `[0, 1)` of `angle_deg` along the sweep.
    pub fn position(&self, angle_deg: f32) -> f32 {
        let mut offset = (angle_deg - self.start_deg) % 360.0;
        if offset < 0.0 {
            offset += 360.0;
        }
        offset / 360.0
    }

    pub fn color_at(&self, angle_deg: f32) -> Rgb565 {
        let t = self.position(angle_deg);
        if t < GRADIENT_DARK_STOP {
            self.dark
        } else {
            lerp_rgb565(
                self.dark,
                self.light,
                (t - GRADIENT_DARK_STOP) / (1.0 - GRADIENT_DARK_STOP),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::pixelcolor::RgbColor;

    fn gradient() -> SweepGradient {
        SweepGradient::new(Rgb565::BLACK, Rgb565::WHITE)
    }

    #[test]
    fn test_dark_at_start() {
        let g = gradient();
        assert_eq!(g.color_at(0.0), Rgb565::BLACK);
        assert_eq!(g.color_at(200.0), Rgb565::BLACK);
    }

    #[test]
    fn test_light_just_before_sweep_closes() {
        let g = gradient();
        let end = g.color_at(359.9);
        assert!(end.r() >= 30 && end.g() >= 62, "got {end:?}");
    }

    #[test]
    fn test_follows_second_hand() {
        // Second hand at 12 o'clock: the sweep starts at 9 o'clock (270 deg from 3)
        let g = gradient().following_second_hand(0.0);
        assert_eq!(g.position(-90.0), 0.0);
        assert_eq!(g.position(270.0), 0.0);
        assert_eq!(g.position(0.0), 0.25);
        // Just counter-clockwise of 12 o'clock is the bright tail
        assert!(g.position(269.0) > 0.99);
    }
}
