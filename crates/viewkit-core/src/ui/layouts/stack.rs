// src/ui/layouts/stack.rs
//! Vertical stacking layout engine
//!
//! Given the already-measured sizes of a container's children and the two axis
//! constraints of the container itself, decides the container's size and the
//! rectangle of every child. Children are stacked top-to-bottom in input order
//! with no gaps and are always left-aligned.
//!
//! The engine is a pure function of its inputs: it keeps no state between
//! passes and never measures children itself.

extern crate alloc;

use alloc::vec::Vec;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::debug;

use crate::ui::measure::AxisConstraint;

/// Intrinsic size of one child, as reported by the child after measuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChildBox {
    pub width: u32,
    pub height: u32,
}

impl ChildBox {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl From<Size> for ChildBox {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}

/// Placement of one child in the parent's coordinate space.
///
/// `right` and `bottom` are exclusive edges, so `right - left` is the width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl PlacementRect {
    pub fn width(&self) -> u32 {
        self.right.abs_diff(self.left)
    }

    pub fn height(&self) -> u32 {
        self.bottom.abs_diff(self.top)
    }

    pub fn to_rectangle(&self) -> Rectangle {
        Rectangle::new(
            Point::new(self.left, self.top),
            Size::new(self.width(), self.height()),
        )
    }
}

/// Result of one full layout pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerDecision {
    pub size: Size,
    pub placements: Vec<PlacementRect>,
}

/// Stateless top-to-bottom stacking policy.
pub struct StackLayoutEngine;

impl StackLayoutEngine {
    /// Decide the container size.
    ///
    /// Precedence:
    /// 1. No children: `(0, 0)` whatever the constraints say.
    /// 2. Both axes `AtMost`: widest child by the sum of child heights.
    /// 3. Only width `AtMost`: widest child; height passes the constraint through.
    /// 4. Only height `AtMost`: sum of heights; width passes the constraint through.
    /// 5. Anything else: an `Exact` axis passes its size through and an
    ///    `Unspecified` axis is sized to content like `AtMost`.
    ///
    /// `AtMost` bounds are not applied as a clamp; content wins.
    pub fn measure(children: &[ChildBox], width: AxisConstraint, height: AxisConstraint) -> Size {
        if children.is_empty() {
            debug!("stack measure: no children, collapsing to 0x0");
            return Size::zero();
        }

        let size = match (width, height) {
            (AxisConstraint::AtMost(_), AxisConstraint::AtMost(_)) => {
                Size::new(max_child_width(children), total_height(children))
            }
            (AxisConstraint::AtMost(_), _) => Size::new(
                max_child_width(children),
                pass_through(height, || total_height(children)),
            ),
            (_, AxisConstraint::AtMost(_)) => Size::new(
                pass_through(width, || max_child_width(children)),
                total_height(children),
            ),
            _ => Size::new(
                pass_through(width, || max_child_width(children)),
                pass_through(height, || total_height(children)),
            ),
        };

        debug!(
            "stack measure: {} children under ({:?}, {:?}) -> {}x{}",
            children.len(),
            width,
            height,
            size.width,
            size.height
        );

        size
    }

    /// Stack children below each other starting at `(left, top)`.
    ///
    /// Edges saturate at `i32::MAX`, like the summed height in
    /// [`measure`](Self::measure), so rectangles never overlap.
    pub fn place(children: &[ChildBox], left: i32, top: i32) -> Vec<PlacementRect> {
        let mut cursor = top;

        children
            .iter()
            .map(|child| {
                let bottom = cursor.saturating_add_unsigned(child.height);
                let rect = PlacementRect {
                    left,
                    top: cursor,
                    right: left.saturating_add_unsigned(child.width),
                    bottom,
                };
                cursor = bottom;
                rect
            })
            .collect()
    }

    /// Run [`measure`](Self::measure) then [`place`](Self::place) in one pass.
    pub fn layout(
        children: &[ChildBox],
        width: AxisConstraint,
        height: AxisConstraint,
        origin: Point,
    ) -> ContainerDecision {
        ContainerDecision {
            size: Self::measure(children, width, height),
            placements: Self::place(children, origin.x, origin.y),
        }
    }
}

/// Widest child, or 0 for an empty slice.
fn max_child_width(children: &[ChildBox]) -> u32 {
    children.iter().map(|c| c.width).max().unwrap_or(0)
}

fn total_height(children: &[ChildBox]) -> u32 {
    children
        .iter()
        .fold(0u32, |acc, c| acc.saturating_add(c.height))
}

/// Exact sizes are taken as given; anything else falls back to content.
fn pass_through(constraint: AxisConstraint, content: impl FnOnce() -> u32) -> u32 {
    match constraint {
        AxisConstraint::Exact(size) | AxisConstraint::AtMost(size) => size,
        AxisConstraint::Unspecified => content(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    use AxisConstraint::{AtMost, Exact, Unspecified};

    fn sample_children() -> Vec<ChildBox> {
        vec![
            ChildBox::new(20, 10),
            ChildBox::new(30, 15),
            ChildBox::new(40, 5),
        ]
    }

    #[test]
    fn test_wrap_content_both_axes() {
        let size = StackLayoutEngine::measure(&sample_children(), AtMost(500), AtMost(500));
        assert_eq!(size, Size::new(40, 30));
    }

    #[test]
    fn test_wrap_content_ignores_at_most_bound() {
        let size = StackLayoutEngine::measure(&sample_children(), AtMost(10), AtMost(10));
        assert_eq!(size, Size::new(40, 30));
    }

    #[test]
    fn test_empty_collapses_to_zero() {
        for (w, h) in [
            (Exact(500), Exact(500)),
            (AtMost(500), AtMost(500)),
            (Unspecified, Unspecified),
            (Exact(10), AtMost(20)),
        ] {
            assert_eq!(StackLayoutEngine::measure(&[], w, h), Size::zero());
        }
    }

    #[test]
    fn test_only_width_wraps_content() {
        let size = StackLayoutEngine::measure(&sample_children(), AtMost(500), Exact(120));
        assert_eq!(size, Size::new(40, 120));
    }

    #[test]
    fn test_only_height_wraps_content() {
        let size = StackLayoutEngine::measure(&sample_children(), Exact(200), AtMost(500));
        assert_eq!(size, Size::new(200, 30));
    }

    #[test]
    fn test_both_exact_passes_through() {
        let size = StackLayoutEngine::measure(&sample_children(), Exact(320), Exact(240));
        assert_eq!(size, Size::new(320, 240));
    }

    #[test]
    fn test_unspecified_sizes_to_content() {
        let children = sample_children();
        assert_eq!(
            StackLayoutEngine::measure(&children, Unspecified, Unspecified),
            Size::new(40, 30)
        );
        assert_eq!(
            StackLayoutEngine::measure(&children, Exact(100), Unspecified),
            Size::new(100, 30)
        );
        assert_eq!(
            StackLayoutEngine::measure(&children, Unspecified, Exact(90)),
            Size::new(40, 90)
        );
        assert_eq!(
            StackLayoutEngine::measure(&children, AtMost(7), Unspecified),
            Size::new(40, 30)
        );
        assert_eq!(
            StackLayoutEngine::measure(&children, Unspecified, AtMost(7)),
            Size::new(40, 30)
        );
    }

    #[test]
    fn test_single_child() {
        let children = [ChildBox::new(33, 21)];
        assert_eq!(
            StackLayoutEngine::measure(&children, AtMost(100), AtMost(100)),
            Size::new(33, 21)
        );
        assert_eq!(
            StackLayoutEngine::place(&children, 4, 9),
            vec![PlacementRect {
                left: 4,
                top: 9,
                right: 37,
                bottom: 30
            }]
        );
    }

    #[test]
    fn test_place_stacks_in_order_without_gaps() {
        let children = sample_children();
        let rects = StackLayoutEngine::place(&children, 10, 50);

        assert_eq!(rects.len(), children.len());

        let mut expected_top = 50;
        for (rect, child) in rects.iter().zip(children.iter()) {
            assert_eq!(rect.left, 10);
            assert_eq!(rect.top, expected_top);
            assert_eq!(rect.width(), child.width);
            assert_eq!(rect.height(), child.height);
            expected_top += child.height as i32;
        }

        for pair in rects.windows(2) {
            assert_eq!(pair[0].bottom, pair[1].top, "children must touch");
        }

        let total: u32 = rects.iter().map(|r| r.height()).sum();
        assert_eq!(total, 30);
        assert_eq!(rects.last().map(|r| r.bottom), Some(80));
    }

    #[test]
    fn test_place_saturates_on_huge_heights() {
        let children = [
            ChildBox::new(10, 2_000_000_000),
            ChildBox::new(10, 2_000_000_000),
        ];
        let rects = StackLayoutEngine::place(&children, 0, 0);

        assert_eq!(rects[0].bottom, 2_000_000_000);
        assert_eq!(rects[1].top, rects[0].bottom);
        assert_eq!(rects[1].bottom, i32::MAX);
        for rect in &rects {
            assert!(rect.bottom >= rect.top);
        }

        let wide = StackLayoutEngine::place(&[ChildBox::new(u32::MAX, 1)], -5, 0);
        assert_eq!(wide[0].right, i32::MAX);
        assert_eq!(wide[0].width(), i32::MAX as u32 + 5);
    }

    #[test]
    fn test_zero_height_child_takes_no_space() {
        let children = [
            ChildBox::new(10, 10),
            ChildBox::new(10, 0),
            ChildBox::new(10, 10),
        ];
        let rects = StackLayoutEngine::place(&children, 0, 0);
        assert_eq!(rects[1].top, 10);
        assert_eq!(rects[1].bottom, 10);
        assert_eq!(rects[2].top, 10);
    }

    #[test]
    fn test_layout_is_repeatable() {
        let children = sample_children();
        let first = StackLayoutEngine::layout(&children, AtMost(80), Exact(60), Point::new(3, 4));
        let second = StackLayoutEngine::layout(&children, AtMost(80), Exact(60), Point::new(3, 4));
        assert_eq!(first, second);
        assert_eq!(first.size, Size::new(40, 60));
        assert_eq!(first.placements[2].to_rectangle().top_left, Point::new(3, 29));
    }
}
