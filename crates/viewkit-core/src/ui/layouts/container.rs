// src/ui/layouts/container.rs
//! Vertical stack container owning its child views

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::Vec;
use thiserror_no_std::Error;

use super::stack::{ChildBox, StackLayoutEngine};
use crate::ui::core::{DirtyRegion, View};
use crate::ui::elements::Element;
use crate::ui::measure::AxisConstraint;

/// Error types for view containers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ViewError {
    /// Child capacity exceeded
    #[error("Container full (capacity: {capacity})")]
    ContainerFull {
        /// Maximum number of children
        capacity: usize,
    },
}

/// Container that stacks its children top-to-bottom
///
/// Every child is measured with the container's own constraints, then the
/// [`StackLayoutEngine`] decides the container size and the child rectangles.
/// Children are drawn in insertion order.
///
/// # Type Parameters
/// - `N`: Maximum number of child elements (compile-time constant)
///
/// # Examples
/// ```ignore
/// let config = ViewConfig::default();
/// let mut stack = StackContainer::<4>::new();
/// stack.add_child(Element::circle(&config))?;
/// stack.add_child(Element::circle(&config))?;
///
/// let size = stack.layout(
///     AxisConstraint::AtMost(320),
///     AxisConstraint::AtMost(240),
///     Point::zero(),
/// );
/// ```
pub struct StackContainer<const N: usize> {
    bounds: Rectangle,
    measured: Size,
    children: Vec<Element, N>,
    dirty: bool,
}

impl<const N: usize> Default for StackContainer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> StackContainer<N> {
    pub fn new() -> Self {
        Self {
            bounds: Rectangle::zero(),
            measured: Size::zero(),
            children: Vec::new(),
            dirty: true,
        }
    }

    /// Append a child below the existing ones.
    ///
    /// # Returns
    /// - `Ok(index)`: Index of the added child
    /// - `Err(ViewError::ContainerFull)`: Container reached capacity `N`
    ///
    /// The new child has no bounds until the next layout pass.
    pub fn add_child(&mut self, child: impl Into<Element>) -> Result<usize, ViewError> {
        self.children
            .push(child.into())
            .map_err(|_| ViewError::ContainerFull { capacity: N })?;
        self.dirty = true;
        Ok(self.children.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Bounds assigned to the child at `index` by the last layout pass.
    pub fn child_bounds(&self, index: usize) -> Option<Rectangle> {
        self.children.get(index).map(|c| c.bounds())
    }

    /// Measure under the given constraints, then place at `origin`.
    pub fn layout(&mut self, width: AxisConstraint, height: AxisConstraint, origin: Point) -> Size {
        let size = self.measure(width, height);
        self.set_bounds(Rectangle::new(origin, size));
        size
    }

    fn child_boxes(&self) -> Vec<ChildBox, N> {
        self.children
            .iter()
            .map(|c| ChildBox::from(c.measured_size()))
            .collect()
    }
}

impl<const N: usize> View for StackContainer<N> {
    fn measure(&mut self, width: AxisConstraint, height: AxisConstraint) -> Size {
        for child in &mut self.children {
            child.measure(width, height);
        }

        self.measured = StackLayoutEngine::measure(&self.child_boxes(), width, height);
        self.measured
    }

    fn measured_size(&self) -> Size {
        self.measured
    }

    /// Children are re-placed on every call; only a change of the
    /// container's own bounds marks the container dirty.
    fn set_bounds(&mut self, bounds: Rectangle) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.dirty = true;
        }

        let placements =
            StackLayoutEngine::place(&self.child_boxes(), bounds.top_left.x, bounds.top_left.y);

        for (child, placement) in self.children.iter_mut().zip(placements.iter()) {
            child.set_bounds(placement.to_rectangle());
        }
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn update(&mut self) {
        for child in &mut self.children {
            child.update();
        }
    }

    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        for child in &self.children {
            child.draw(display)?;
        }
        Ok(())
    }

    fn is_dirty(&self) -> bool {
        self.dirty || self.children.iter().any(|c| c.is_dirty())
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
        for child in &mut self.children {
            child.mark_clean();
        }
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn dirty_region(&self) -> Option<DirtyRegion> {
        if self.dirty {
            return Some(DirtyRegion::new(self.bounds));
        }

        let mut region: Option<DirtyRegion> = None;
        for child in self.children.iter().filter(|c| c.is_dirty()) {
            if let Some(ref mut r) = region {
                r.expand_to_include(child.bounds());
            } else {
                region = Some(DirtyRegion::new(child.bounds()));
            }
        }
        region
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewConfig;
    use crate::framebuffer::FrameBuffer;
    use crate::ui::components::{CircleView, ClockView};

    fn circle_and_clock() -> StackContainer<2> {
        let config = ViewConfig::default();
        let mut stack = StackContainer::<2>::new();
        stack.add_child(CircleView::new(&config)).unwrap();
        stack.add_child(ClockView::new(&config)).unwrap();
        stack
    }

    #[test]
    fn test_add_child_past_capacity() {
        let config = ViewConfig::default();
        let mut stack = StackContainer::<1>::new();

        assert_eq!(stack.add_child(Element::circle(&config)), Ok(0));
        assert_eq!(
            stack.add_child(Element::circle(&config)),
            Err(ViewError::ContainerFull { capacity: 1 })
        );
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_measure_stacks_children() {
        let mut stack = circle_and_clock();

        // Circle squares to 60x60, clock takes 60x200
        let size = stack.measure(AxisConstraint::AtMost(60), AxisConstraint::AtMost(200));
        assert_eq!(size, Size::new(60, 260));
    }

    #[test]
    fn test_set_bounds_places_children_at_stacked_offsets() {
        let mut stack = circle_and_clock();
        let size = stack.layout(
            AxisConstraint::AtMost(60),
            AxisConstraint::AtMost(200),
            Point::new(5, 7),
        );

        assert_eq!(stack.bounds(), Rectangle::new(Point::new(5, 7), size));
        assert_eq!(
            stack.child_bounds(0),
            Some(Rectangle::new(Point::new(5, 7), Size::new(60, 60)))
        );
        assert_eq!(
            stack.child_bounds(1),
            Some(Rectangle::new(Point::new(5, 67), Size::new(60, 200)))
        );
    }

    #[test]
    fn test_empty_container_collapses() {
        let mut stack = StackContainer::<4>::new();
        let size = stack.layout(
            AxisConstraint::Exact(100),
            AxisConstraint::Exact(100),
            Point::zero(),
        );

        assert!(stack.is_empty());
        assert_eq!(size, Size::zero());
    }

    #[test]
    fn test_dirty_tracking_follows_children() {
        let mut stack = circle_and_clock();
        stack.layout(
            AxisConstraint::AtMost(60),
            AxisConstraint::AtMost(200),
            Point::zero(),
        );
        assert!(stack.is_dirty());

        stack.mark_clean();
        assert!(!stack.is_dirty());
        assert!(stack.dirty_region().is_none());

        // The clock redraws every tick
        stack.update();
        assert!(stack.is_dirty());
        let region = stack.dirty_region().unwrap();
        assert_eq!(region.bounds, stack.child_bounds(1).unwrap());
    }

    #[test]
    fn test_draw_children_in_order() {
        let config = ViewConfig::default();
        let mut stack = StackContainer::<2>::new();
        stack
            .add_child(CircleView::new(&config).with_color(Rgb565::RED))
            .unwrap();
        stack
            .add_child(CircleView::new(&config).with_color(Rgb565::BLUE))
            .unwrap();
        stack.layout(
            AxisConstraint::AtMost(20),
            AxisConstraint::AtMost(20),
            Point::zero(),
        );

        let mut fb = FrameBuffer::new(Size::new(20, 40));
        stack.draw(&mut fb).unwrap();

        assert_eq!(fb.pixel(Point::new(10, 10)), Some(Rgb565::RED));
        assert_eq!(fb.pixel(Point::new(10, 30)), Some(Rgb565::BLUE));
    }
}
