// src/ui/elements.rs
//! Concrete UI element enum.
//!
//! Layout containers own heterogeneous child views *without* trait objects.
//! `DrawTarget` is generic, which makes [`View`] not object-safe; this enum is
//! the pragmatic alternative and grows with the built-in views.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::config::ViewConfig;
use crate::ui::components::{CircleView, ClockView};
use crate::ui::core::{DirtyRegion, View};
use crate::ui::measure::AxisConstraint;

/// A concrete, layout-friendly view.
pub enum Element {
    Circle(CircleView),
    Clock(ClockView),
}

impl Element {
    /// Convenience constructor: circle indicator.
    pub fn circle(config: &ViewConfig) -> Self {
        Self::Circle(CircleView::new(config))
    }

    /// Convenience constructor: clock face.
    pub fn clock(config: &ViewConfig) -> Self {
        Self::Clock(ClockView::new(config))
    }

    pub fn as_circle_mut(&mut self) -> Option<&mut CircleView> {
        match self {
            Element::Circle(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_clock_mut(&mut self) -> Option<&mut ClockView> {
        match self {
            Element::Clock(c) => Some(c),
            _ => None,
        }
    }
}

impl From<CircleView> for Element {
    fn from(view: CircleView) -> Self {
        Element::Circle(view)
    }
}

impl From<ClockView> for Element {
    fn from(view: ClockView) -> Self {
        Element::Clock(view)
    }
}

impl View for Element {
    fn measure(&mut self, width: AxisConstraint, height: AxisConstraint) -> Size {
        match self {
            Element::Circle(c) => c.measure(width, height),
            Element::Clock(c) => c.measure(width, height),
        }
    }

    fn measured_size(&self) -> Size {
        match self {
            Element::Circle(c) => c.measured_size(),
            Element::Clock(c) => c.measured_size(),
        }
    }

    fn set_bounds(&mut self, bounds: Rectangle) {
        match self {
            Element::Circle(c) => c.set_bounds(bounds),
            Element::Clock(c) => c.set_bounds(bounds),
        }
    }

    fn bounds(&self) -> Rectangle {
        match self {
            Element::Circle(c) => c.bounds(),
            Element::Clock(c) => c.bounds(),
        }
    }

    fn update(&mut self) {
        match self {
            Element::Circle(c) => c.update(),
            Element::Clock(c) => c.update(),
        }
    }

    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        match self {
            Element::Circle(c) => c.draw(display),
            Element::Clock(c) => c.draw(display),
        }
    }

    fn is_dirty(&self) -> bool {
        match self {
            Element::Circle(c) => c.is_dirty(),
            Element::Clock(c) => c.is_dirty(),
        }
    }

    fn mark_clean(&mut self) {
        match self {
            Element::Circle(c) => c.mark_clean(),
            Element::Clock(c) => c.mark_clean(),
        }
    }

    fn mark_dirty(&mut self) {
        match self {
            Element::Circle(c) => c.mark_dirty(),
            Element::Clock(c) => c.mark_dirty(),
        }
    }

    fn dirty_region(&self) -> Option<DirtyRegion> {
        match self {
            Element::Circle(c) => c.dirty_region(),
            Element::Clock(c) => c.dirty_region(),
        }
    }
}
