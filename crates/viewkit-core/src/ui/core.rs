// src/ui/core.rs
//! Core view traits and types for the viewkit UI system

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::ui::measure::AxisConstraint;

/// Dirty region tracking for efficient rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirtyRegion {
    pub bounds: Rectangle,
    pub is_dirty: bool,
}

impl DirtyRegion {
    pub fn new(bounds: Rectangle) -> Self {
        Self {
            bounds,
            is_dirty: true,
        }
    }

    pub fn mark_clean(&mut self) {
        self.is_dirty = false;
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    /// Expand this dirty region to include another region
    pub fn expand_to_include(&mut self, other: Rectangle) {
        if !self.is_dirty {
            self.bounds = other;
            self.is_dirty = true;
        } else {
            let min_x = self.bounds.top_left.x.min(other.top_left.x);
            let min_y = self.bounds.top_left.y.min(other.top_left.y);

            let max_x = (self.bounds.top_left.x + self.bounds.size.width as i32)
                .max(other.top_left.x + other.size.width as i32);
            let max_y = (self.bounds.top_left.y + self.bounds.size.height as i32)
                .max(other.top_left.y + other.size.height as i32);

            self.bounds = Rectangle::new(
                Point::new(min_x, min_y),
                Size::new((max_x - min_x) as u32, (max_y - min_y) as u32),
            );
        }
    }
}

/// Contract between a view and the container hosting it.
///
/// A layout pass calls [`measure`](View::measure) and then
/// [`set_bounds`](View::set_bounds); a render tick calls
/// [`update`](View::update) and, when dirty, [`draw`](View::draw).
pub trait View {
    /// Compute and remember this view's size under the given constraints.
    fn measure(&mut self, width: AxisConstraint, height: AxisConstraint) -> Size;

    /// Size recorded by the last [`measure`](View::measure) call.
    fn measured_size(&self) -> Size;

    /// Place the view. Marks it dirty when the bounds actually change.
    fn set_bounds(&mut self, bounds: Rectangle);

    /// Bounds assigned by the last [`set_bounds`](View::set_bounds) call.
    fn bounds(&self) -> Rectangle;

    /// Advance per-tick state (animations, clocks).
    fn update(&mut self) {}

    /// Draw the view inside its bounds.
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error>;

    /// Check if this view needs to be redrawn
    fn is_dirty(&self) -> bool;

    /// Mark this view as clean (already drawn)
    fn mark_clean(&mut self);

    /// Mark this view as dirty (needs redraw)
    fn mark_dirty(&mut self);

    /// Get the dirty region for partial updates
    fn dirty_region(&self) -> Option<DirtyRegion> {
        if self.is_dirty() {
            Some(DirtyRegion::new(self.bounds()))
        } else {
            None
        }
    }
}
