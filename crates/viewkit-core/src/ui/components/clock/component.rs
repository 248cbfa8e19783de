//! Clock view component
//!
//! Draw order each frame: face background, hour labels and label arcs, the
//! gradient scale ring with its ticks, then the hour, minute and second hands.
//! Later layers paint over earlier ones, so the ticks are cut into the ring by
//! drawing them in the background color.

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle, ascii};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Arc, Circle, Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Text};

use super::constants::*;
use super::geometry::{ClockGeometry, PointF, RectF, stroke_px};
use super::gradient::SweepGradient;
use super::path::HandPath;
use super::time::{ClockTime, HandAngles};
use crate::config::ViewConfig;
use crate::ui::core::View;
use crate::ui::measure::{AxisConstraint, resolve_capped};
use crate::ui::styling::{ClockPalette, Padding};

/// The three clock hands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Hour,
    Minute,
    Second,
}

/// Pick the built-in monospace font closest to a pixel text size.
pub fn label_font(text_size: u32) -> &'static MonoFont<'static> {
    match text_size {
        0..=8 => &ascii::FONT_5X8,
        9..=10 => &ascii::FONT_6X10,
        11..=13 => &ascii::FONT_8X13,
        14..=15 => &ascii::FONT_9X15,
        16..=18 => &ascii::FONT_9X18,
        _ => &ascii::FONT_10X20,
    }
}

/// Unrotated outline of `hand`, pointing at 12 o'clock.
///
/// Tip distances are measured down from the top of the label ring, so the
/// hands shorten together with the face.
pub fn hand_outline(hand: Hand, geometry: &ClockGeometry, label: Size) -> HandPath {
    let center = geometry.center();
    let r = geometry.radius;
    let origin_y = geometry.hand_origin_y(label);
    let base_y = center.y - HAND_BASE_ABOVE_PIVOT_RATIO * r;

    match hand {
        // Measured from the top like the minute hand, not from the left padding
        Hand::Hour => tapered_hand(
            center.x,
            base_y,
            HOUR_HAND_BASE_HALF_WIDTH_RATIO * r,
            HOUR_HAND_TIP_HALF_WIDTH_RATIO * r,
            origin_y + HOUR_HAND_TIP_RATIO * r,
            origin_y + HOUR_HAND_APEX_RATIO * r,
        ),
        Hand::Minute => tapered_hand(
            center.x,
            base_y,
            MINUTE_HAND_BASE_HALF_WIDTH_RATIO * r,
            MINUTE_HAND_TIP_HALF_WIDTH_RATIO * r,
            origin_y + MINUTE_HAND_TIP_RATIO * r,
            origin_y + MINUTE_HAND_APEX_RATIO * r,
        ),
        Hand::Second => {
            let base = origin_y + SECOND_HAND_BASE_RATIO * r;
            let half_width = SECOND_HAND_HALF_WIDTH_RATIO * r;

            HandPath::new()
                .move_to(center.x, origin_y + SECOND_HAND_APEX_RATIO * r)
                .line_to(center.x - half_width, base)
                .line_to(center.x + half_width, base)
                .close()
        }
    }
}

/// Trapezoid from the pivot to a rounded tip.
fn tapered_hand(
    cx: f32,
    base_y: f32,
    base_half_width: f32,
    tip_half_width: f32,
    tip_y: f32,
    apex_y: f32,
) -> HandPath {
    HandPath::new()
        .move_to(cx - base_half_width, base_y)
        .line_to(cx - tip_half_width, tip_y)
        .quad_to(cx, apex_y, cx + tip_half_width, tip_y)
        .line_to(cx + base_half_width, base_y)
        .close()
}

/// Analog clock face
///
/// The view keeps the last time it was given and redraws from it. Call
/// [`set_time`](ClockView::set_time) and [`update`](View::update) once per
/// render tick; the view reports itself dirty after every update, so the host
/// loop repaints it continuously.
///
/// # Examples
/// ```ignore
/// let mut clock = ClockView::new(&ViewConfig::default());
/// let size = clock.measure(AxisConstraint::AtMost(240), AxisConstraint::AtMost(240));
/// clock.set_bounds(Rectangle::new(Point::zero(), size));
///
/// clock.set_time(ClockTime::new(10, 8, 42, 0));
/// clock.update();
/// clock.draw(&mut display)?;
/// ```
pub struct ClockView {
    bounds: Rectangle,
    measured: Size,
    default_size: u32,
    padding: Padding,
    palette: ClockPalette,
    font: &'static MonoFont<'static>,
    geometry: ClockGeometry,
    angles: HandAngles,
    dirty: bool,
}

impl ClockView {
    pub fn new(config: &ViewConfig) -> Self {
        Self {
            bounds: Rectangle::zero(),
            measured: Size::zero(),
            default_size: config.clock_default_size,
            padding: Padding::default(),
            palette: config.clock_palette(),
            font: label_font(config.clock_text_size),
            geometry: ClockGeometry::default(),
            angles: HandAngles::default(),
            dirty: true,
        }
    }

    /// Padding inside the bounds, on top of the face's own default inset.
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self.geometry = ClockGeometry::new(self.bounds.size, padding);
        self
    }

    pub fn with_palette(mut self, palette: ClockPalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn set_time(&mut self, time: ClockTime) {
        self.angles = HandAngles::from_time(time);
        self.dirty = true;
    }

    pub fn angles(&self) -> HandAngles {
        self.angles
    }

    pub fn geometry(&self) -> &ClockGeometry {
        &self.geometry
    }

    /// Size of one hour label glyph, used to inset the rings.
    pub fn label_size(&self) -> Size {
        self.font.character_size
    }

    fn draw_labels_and_arcs<D: DrawTarget<Color = Rgb565>>(
        &self,
        origin: Point,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let label = self.label_size();
        let circle = self.geometry.label_circle(label);
        let half_label_h = label.height as f32 / 2.0;
        let mid_x = self.geometry.width / 2.0;
        let mid_y = self.geometry.height / 2.0;

        // Baselines sit half a label below the anchor so glyphs centre on it
        let anchors = [
            PointF::new(mid_x, circle.top + half_label_h),
            PointF::new(circle.right, mid_y + half_label_h),
            PointF::new(mid_x, circle.bottom + half_label_h),
            PointF::new(circle.left, mid_y + half_label_h),
        ];

        let text_style = MonoTextStyle::new(self.font, self.palette.dark);
        for (text, anchor) in HOUR_LABELS.iter().zip(anchors) {
            Text::with_alignment(text, anchor.to_point(origin), text_style, Alignment::Center)
                .draw(display)?;
        }

        let arc_style =
            PrimitiveStyle::with_stroke(self.palette.dark, stroke_px(LABEL_CIRCLE_STROKE_PX));
        for i in 0..4 {
            ring_arc(
                &circle,
                origin,
                LABEL_ARC_START_DEG + 90.0 * i as f32,
                LABEL_ARC_SWEEP_DEG,
            )
            .into_styled(arc_style)
            .draw(display)?;
        }

        Ok(())
    }

    fn draw_scale<D: DrawTarget<Color = Rgb565>>(
        &self,
        origin: Point,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let label = self.label_size();
        let ring = self.geometry.scale_ring(label);
        let ring_stroke = stroke_px(self.geometry.scale_line_len);

        let gradient = SweepGradient::new(self.palette.dark, self.palette.light)
            .following_second_hand(self.angles.second);
        let step = 360.0 / GRADIENT_SEGMENTS as f32;

        for i in 0..GRADIENT_SEGMENTS {
            let start = step * i as f32;
            let color = gradient.color_at(start + step / 2.0);
            ring_arc(&ring, origin, start, step)
                .into_styled(PrimitiveStyle::with_stroke(color, ring_stroke))
                .draw(display)?;
        }

        let center = self.geometry.center();
        let (tick_start, tick_end) = self.geometry.scale_tick(label);
        let tick_style = PrimitiveStyle::with_stroke(
            self.palette.background,
            stroke_px(self.geometry.scale_line_stroke),
        );

        for i in 0..SCALE_TICK_COUNT {
            let degrees = SCALE_TICK_STEP_DEG * i as f32;
            Line::new(
                tick_start.rotate_about(center, degrees).to_point(origin),
                tick_end.rotate_about(center, degrees).to_point(origin),
            )
            .into_styled(tick_style)
            .draw(display)?;
        }

        Ok(())
    }

    fn draw_hand<D: DrawTarget<Color = Rgb565>>(
        &self,
        hand: Hand,
        origin: Point,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let (degrees, color) = match hand {
            Hand::Hour => (self.angles.hour, self.palette.dark),
            Hand::Minute => (self.angles.minute, self.palette.light),
            Hand::Second => (self.angles.second, self.palette.light),
        };

        let center = self.geometry.center();
        hand_outline(hand, &self.geometry, self.label_size())
            .rotated(center, degrees)
            .fill(origin, color, display)?;

        if hand != Hand::Second {
            let r = self.geometry.radius;
            Circle::with_center(
                center.to_point(origin),
                stroke_px(2.0 * PIVOT_RING_RADIUS_RATIO * r),
            )
            .into_styled(PrimitiveStyle::with_stroke(
                color,
                stroke_px(PIVOT_RING_STROKE_RATIO * r),
            ))
            .draw(display)?;
        }

        Ok(())
    }
}

/// Arc on the circle inscribed in `rect`, angles clockwise from 3 o'clock.
fn ring_arc(rect: &RectF, origin: Point, start_deg: f32, sweep_deg: f32) -> Arc {
    Arc::with_center(
        rect.center().to_point(origin),
        rect.inscribed_diameter() as u32,
        start_deg.deg(),
        sweep_deg.deg(),
    )
}

impl View for ClockView {
    fn measure(&mut self, width: AxisConstraint, height: AxisConstraint) -> Size {
        self.measured = Size::new(
            resolve_capped(self.default_size, width),
            resolve_capped(self.default_size, height),
        );
        self.measured
    }

    fn measured_size(&self) -> Size {
        self.measured
    }

    fn set_bounds(&mut self, bounds: Rectangle) {
        if self.bounds != bounds {
            if self.bounds.size != bounds.size {
                self.geometry = ClockGeometry::new(bounds.size, self.padding);
            }
            self.bounds = bounds;
            self.dirty = true;
        }
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn update(&mut self) {
        self.dirty = true;
    }

    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        display.fill_solid(&self.bounds, self.palette.background)?;

        if self.geometry.radius <= 0.0 {
            return Ok(());
        }

        let origin = self.bounds.top_left;
        self.draw_labels_and_arcs(origin, display)?;
        self.draw_scale(origin, display)?;
        self.draw_hand(Hand::Hour, origin, display)?;
        self.draw_hand(Hand::Minute, origin, display)?;
        self.draw_hand(Hand::Second, origin, display)?;

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBuffer;
    use AxisConstraint::{AtMost, Exact, Unspecified};

    fn clock() -> ClockView {
        ClockView::new(&ViewConfig::default())
    }

    fn placed_clock(size: u32) -> ClockView {
        let mut view = clock();
        let measured = view.measure(Exact(size), Exact(size));
        view.set_bounds(Rectangle::new(Point::zero(), measured));
        view
    }

    #[test]
    fn test_measure_caps_at_default() {
        let mut view = clock();
        assert_eq!(view.measure(Unspecified, Unspecified), Size::new(800, 800));
        assert_eq!(view.measure(AtMost(320), AtMost(1000)), Size::new(320, 800));
        assert_eq!(view.measure(Exact(1000), AtMost(240)), Size::new(1000, 240));
    }

    #[test]
    fn test_set_bounds_recomputes_geometry() {
        let view = placed_clock(200);
        assert_eq!(view.geometry().radius, 100.0);

        let mut padded = clock().with_padding(Padding::all(20));
        padded.set_bounds(Rectangle::new(Point::zero(), Size::new(200, 200)));
        assert_eq!(padded.geometry().radius, 80.0);
    }

    #[test]
    fn test_update_always_dirties() {
        let mut view = placed_clock(100);
        view.mark_clean();
        assert!(!view.is_dirty());

        view.update();
        assert!(view.is_dirty());
    }

    #[test]
    fn test_second_hand_outline_points_up() {
        let view = placed_clock(200);
        let outline = hand_outline(Hand::Second, view.geometry(), view.label_size());
        let apex = outline.points()[0];

        assert_eq!(apex.x, 100.0);
        assert!(apex.y < 100.0, "apex must be above the centre");
    }

    #[test]
    fn test_minute_hand_reaches_further_than_hour_hand() {
        // Tip distances are measured from the top, so a larger ratio is a shorter hand
        let view = placed_clock(200);
        let label = view.label_size();
        let hour = hand_outline(Hand::Hour, view.geometry(), label);
        let minute = hand_outline(Hand::Minute, view.geometry(), label);

        assert!(minute.points()[1].y < hour.points()[1].y);
    }

    #[test]
    fn test_draw_paints_background_and_minute_hand() {
        let mut view = placed_clock(200);
        // 00:15 puts the minute hand at 3 o'clock and the hour hand near 12
        view.set_time(ClockTime::new(0, 15, 0, 0));

        let mut fb = FrameBuffer::new(Size::new(200, 200));
        view.draw(&mut fb).unwrap();

        let palette = ClockPalette::default();
        assert_eq!(fb.pixel(Point::new(1, 1)), Some(palette.background));
        // Halfway along the minute hand, right of centre; the hand is ~2px thick
        assert!((99..=101).any(|y| fb.pixel(Point::new(130, y)) == Some(palette.light)));
        // Nothing points down at 6 o'clock
        assert_eq!(fb.pixel(Point::new(100, 130)), Some(palette.background));
    }

    #[test]
    fn test_custom_palette_paints_background() {
        let palette = ClockPalette {
            background: Rgb565::BLACK,
            ..ClockPalette::default()
        };
        let mut view = clock().with_palette(palette);
        view.set_bounds(Rectangle::new(Point::zero(), Size::new(100, 100)));

        let mut fb = FrameBuffer::new(Size::new(100, 100));
        fb.clear(Rgb565::WHITE).unwrap();
        view.draw(&mut fb).unwrap();

        assert_eq!(fb.pixel(Point::new(1, 1)), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_zero_size_draws_only_background() {
        let mut view = clock();
        view.set_bounds(Rectangle::new(Point::new(2, 2), Size::new(0, 0)));

        let mut fb = FrameBuffer::new(Size::new(4, 4));
        view.draw(&mut fb).unwrap();
        assert_eq!(fb.dirty_area(), None);
    }

    #[test]
    fn test_label_font_selection() {
        assert_eq!(label_font(14).character_size, Size::new(9, 15));
        assert_eq!(label_font(6).character_size, Size::new(5, 8));
        assert_eq!(label_font(40).character_size, Size::new(10, 20));
    }
}
