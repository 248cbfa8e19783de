//! Hand outlines
//!
//! A [`HandPath`] is built with the usual path verbs, flattened to a polygon
//! as it goes, then rotated about the clock centre and filled as a triangle
//! fan. Every hand outline is convex, which is what makes the fan valid.

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Triangle};
use heapless::Vec;

use super::constants::{MAX_HAND_POINTS, QUAD_SEGMENTS};
use super::geometry::PointF;

/// Flattened, closed polygon outline
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HandPath {
    points: Vec<PointF, MAX_HAND_POINTS>,
    closed: bool,
}

impl HandPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new outline, discarding any previous points.
    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.points.clear();
        self.closed = false;
        self.push(PointF::new(x, y));
        self
    }

    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.push(PointF::new(x, y));
        self
    }

    /// Quadratic Bézier from the current point through control `(cx, cy)`
    /// to `(x, y)`, flattened into [`QUAD_SEGMENTS`] lines.
    pub fn quad_to(mut self, cx: f32, cy: f32, x: f32, y: f32) -> Self {
        let Some(&start) = self.points.last() else {
            return self.line_to(x, y);
        };

        for step in 1..=QUAD_SEGMENTS {
            let t = step as f32 / QUAD_SEGMENTS as f32;
            let u = 1.0 - t;
            self.push(PointF::new(
                u * u * start.x + 2.0 * u * t * cx + t * t * x,
                u * u * start.y + 2.0 * u * t * cy + t * t * y,
            ));
        }
        self
    }

    /// Close the outline back to its first point.
    pub fn close(mut self) -> Self {
        self.closed = true;
        self
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn points(&self) -> &[PointF] {
        &self.points
    }

    /// The same outline rotated clockwise by `degrees` about `pivot`.
    pub fn rotated(&self, pivot: PointF, degrees: f32) -> Self {
        Self {
            points: self
                .points
                .iter()
                .map(|p| p.rotate_about(pivot, degrees))
                .collect(),
            closed: self.closed,
        }
    }

    /// Fill the outline, shifted by `origin`, as a triangle fan.
    pub fn fill<D: DrawTarget<Color = Rgb565>>(
        &self,
        origin: Point,
        color: Rgb565,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let Some((first, rest)) = self.points.split_first() else {
            return Ok(());
        };

        let style = PrimitiveStyle::with_fill(color);
        let anchor = first.to_point(origin);

        for pair in rest.windows(2) {
            Triangle::new(anchor, pair[0].to_point(origin), pair[1].to_point(origin))
                .into_styled(style)
                .draw(display)?;
        }

        Ok(())
    }

    /// Extra points are dropped; outlines are sized well under the capacity.
    fn push(&mut self, point: PointF) {
        if self.points.push(point).is_err() {
            log::warn!("hand outline exceeds {} points", MAX_HAND_POINTS);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBuffer;

    #[test]
    fn test_quad_flattening_hits_endpoints() {
        let path = HandPath::new()
            .move_to(0.0, 10.0)
            .quad_to(5.0, 0.0, 10.0, 10.0)
            .close();

        let points = path.points();
        assert_eq!(points.len(), 1 + QUAD_SEGMENTS);
        assert_eq!(points[QUAD_SEGMENTS], PointF::new(10.0, 10.0));
        // Midpoint of the curve lies halfway to the control point
        assert_eq!(points[QUAD_SEGMENTS / 2], PointF::new(5.0, 5.0));
        assert!(path.is_closed());
    }

    #[test]
    fn test_move_to_restarts_outline() {
        let path = HandPath::new()
            .move_to(0.0, 0.0)
            .line_to(1.0, 1.0)
            .move_to(4.0, 4.0);

        assert_eq!(path.points(), &[PointF::new(4.0, 4.0)]);
    }

    #[test]
    fn test_fill_triangle() {
        let path = HandPath::new()
            .move_to(10.0, 2.0)
            .line_to(2.0, 18.0)
            .line_to(18.0, 18.0)
            .close();

        let mut fb = FrameBuffer::new(Size::new(20, 20));
        path.fill(Point::zero(), Rgb565::WHITE, &mut fb).unwrap();

        assert_eq!(fb.pixel(Point::new(10, 14)), Some(Rgb565::WHITE));
        assert_eq!(fb.pixel(Point::new(2, 2)), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_rotated_half_turn_flips_vertically() {
        let path = HandPath::new().move_to(10.0, 0.0).line_to(10.0, 5.0);
        let rotated = path.rotated(PointF::new(10.0, 10.0), 180.0);

        let tip = rotated.points()[0].to_point(Point::zero());
        assert_eq!(tip, Point::new(10, 20));
    }
}
