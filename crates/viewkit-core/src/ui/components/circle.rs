// src/ui/components/circle.rs
//! Circle indicator: a filled disc that always measures square

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle};

use crate::config::ViewConfig;
use crate::ui::core::View;
use crate::ui::measure::{AxisConstraint, resolve_or_default};

/// Filled circle indicator
///
/// Each axis resolves to the constrained size (or the configured default when
/// unconstrained); the smaller of the two becomes both width and height. The
/// disc is drawn with a radius of half the measured height, anchored at the
/// top-left corner of the bounds.
///
/// # Examples
/// ```ignore
/// let mut dot = CircleView::new(&ViewConfig::default()).with_color(Rgb565::RED);
/// let size = dot.measure(AxisConstraint::AtMost(80), AxisConstraint::AtMost(120));
/// assert_eq!(size, Size::new(80, 80));
/// ```
pub struct CircleView {
    bounds: Rectangle,
    measured: Size,
    default_size: u32,
    color: Rgb565,
    dirty: bool,
}

impl CircleView {
    pub fn new(config: &ViewConfig) -> Self {
        Self {
            bounds: Rectangle::zero(),
            measured: Size::zero(),
            default_size: config.circle_default_size,
            color: config.circle_color(),
            dirty: true,
        }
    }

    pub fn with_color(mut self, color: Rgb565) -> Self {
        self.color = color;
        self
    }

    pub fn set_color(&mut self, color: Rgb565) {
        if self.color != color {
            self.color = color;
            self.dirty = true;
        }
    }

    pub fn radius(&self) -> u32 {
        self.measured.height / 2
    }
}

impl View for CircleView {
    fn measure(&mut self, width: AxisConstraint, height: AxisConstraint) -> Size {
        let w = resolve_or_default(self.default_size, width);
        let h = resolve_or_default(self.default_size, height);
        let side = w.min(h);

        self.measured = Size::new(side, side);
        self.measured
    }

    fn measured_size(&self) -> Size {
        self.measured
    }

    fn set_bounds(&mut self, bounds: Rectangle) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.dirty = true;
        }
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let r = self.radius();
        if r == 0 {
            return Ok(());
        }

        let center = self.bounds.top_left + Point::new(r as i32, r as i32);
        Circle::with_center(center, r * 2)
            .into_styled(PrimitiveStyle::with_fill(self.color))
            .draw(display)?;

        Ok(())
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
