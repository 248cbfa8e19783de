//! Clock face geometry
//!
//! Everything here is in floating point and relative to the view's own
//! top-left corner. [`ClockGeometry`] is recomputed whenever the view size
//! changes; the rectangles that depend on label metrics are derived on demand.

use core::f32::consts::PI;

use embedded_graphics::prelude::*;
use micromath::F32Ext;

use super::constants::{
    DEFAULT_PADDING_RATIO, LABEL_CIRCLE_STROKE_PX, SCALE_LINE_LEN_RATIO, SCALE_LINE_STROKE_RATIO,
    SCALE_RING_INSET_FACTOR,
};
use crate::ui::styling::Padding;

/// Point with sub-pixel precision
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Rotate clockwise (on a y-down screen) by `degrees` about `pivot`.
    pub fn rotate_about(self, pivot: PointF, degrees: f32) -> PointF {
        let radians = degrees * PI / 180.0;
        let (sin, cos) = (radians.sin(), radians.cos());
        let dx = self.x - pivot.x;
        let dy = self.y - pivot.y;

        PointF::new(
            pivot.x + dx * cos - dy * sin,
            pivot.y + dx * sin + dy * cos,
        )
    }

    /// Nearest pixel after shifting by `origin`.
    pub fn to_point(self, origin: Point) -> Point {
        Point::new(
            origin.x + self.x.round() as i32,
            origin.y + self.y.round() as i32,
        )
    }
}

/// Rectangle given by its four edges
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> PointF {
        PointF::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Diameter of the largest circle centred in this rectangle.
    pub fn inscribed_diameter(&self) -> f32 {
        self.width().min(self.height()).max(0.0)
    }
}

/// Size-dependent measurements of the clock face
///
/// The face is a circle of [`radius`](Self::radius) centred in the view. The
/// effective paddings locate that circle's bounding square (plus the default
/// inset) inside the possibly non-square view.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClockGeometry {
    pub width: f32,
    pub height: f32,
    pub radius: f32,
    pub padding_left: f32,
    pub padding_top: f32,
    pub padding_right: f32,
    pub padding_bottom: f32,
    pub scale_line_len: f32,
    pub scale_line_stroke: f32,
}

impl ClockGeometry {
    pub fn new(size: Size, padding: Padding) -> Self {
        let width = size.width as f32;
        let height = size.height as f32;

        let inner_w = width - padding.horizontal() as f32;
        let inner_h = height - padding.vertical() as f32;
        let radius = (inner_w.min(inner_h) / 2.0).max(0.0);
        let default_padding = DEFAULT_PADDING_RATIO * radius;

        let half_w = width / 2.0;
        let half_h = height / 2.0;

        Self {
            width,
            height,
            radius,
            padding_left: default_padding + half_w - radius + padding.left as f32,
            padding_top: default_padding + half_h - radius + padding.top as f32,
            padding_right: default_padding + half_w - radius + padding.right as f32,
            padding_bottom: default_padding + half_h - radius + padding.bottom as f32,
            scale_line_len: SCALE_LINE_LEN_RATIO * radius,
            scale_line_stroke: SCALE_LINE_STROKE_RATIO * radius,
        }
    }

    pub fn center(&self) -> PointF {
        PointF::new(self.width / 2.0, self.height / 2.0)
    }

    /// Circle carrying the hour labels and the four label arcs.
    ///
    /// Inset by half a label so the labels stay inside the face, and by half
    /// the arc stroke so the stroke does too.
    pub fn label_circle(&self, label: Size) -> RectF {
        let inset_x = label.width as f32 / 2.0 + LABEL_CIRCLE_STROKE_PX / 2.0;
        let inset_y = label.height as f32 / 2.0 + LABEL_CIRCLE_STROKE_PX / 2.0;

        RectF::new(
            self.padding_left + inset_x,
            self.padding_top + inset_y,
            self.width - self.padding_right - inset_x,
            self.height - self.padding_bottom - inset_y,
        )
    }

    /// Circle carrying the gradient ring under the scale ticks.
    pub fn scale_ring(&self, label: Size) -> RectF {
        let inset = label.height as f32 / 2.0 + self.scale_line_len * SCALE_RING_INSET_FACTOR;

        RectF::new(
            self.padding_left + inset,
            self.padding_top + inset,
            self.width - self.padding_right - inset,
            self.height - self.padding_bottom - inset,
        )
    }

    /// Y coordinate hand tips are measured from: the top of the label ring.
    pub fn hand_origin_y(&self, label: Size) -> f32 {
        self.padding_top + label.height as f32 / 2.0
    }

    /// End points of the tick at 12 o'clock, before rotation.
    pub fn scale_tick(&self, label: Size) -> (PointF, PointF) {
        let x = self.width / 2.0;
        let top = self.hand_origin_y(label) + self.scale_line_len;

        (
            PointF::new(x, top),
            PointF::new(x, top + self.scale_line_len),
        )
    }
}

/// Round a length to whole pixels, never below one.
pub fn stroke_px(length: f32) -> u32 {
    (length.round() as u32).max(1)
}
