//! Constants for clock face rendering
//!
//! Every length is a fraction of the clock radius unless its name ends in
//! `_PX`, so the face scales with its bounds.

/// Extra inset on every side, so the face never touches its bounds
pub const DEFAULT_PADDING_RATIO: f32 = 0.12;

/// Length of a scale tick and stroke width of the gradient ring
pub const SCALE_LINE_LEN_RATIO: f32 = 0.12;

/// Stroke width of a scale tick
pub const SCALE_LINE_STROKE_RATIO: f32 = 0.012;

/// Number of ticks cut into the scale ring
pub const SCALE_TICK_COUNT: usize = 200;

/// Angle between consecutive ticks (360 / 200)
pub const SCALE_TICK_STEP_DEG: f32 = 1.8;

/// Distance of the gradient ring from the label circle, in scale line lengths
pub const SCALE_RING_INSET_FACTOR: f32 = 1.5;

/// Stroke width of the label circle arcs in pixels
pub const LABEL_CIRCLE_STROKE_PX: f32 = 4.0;

/// Start of the first label arc, in degrees clockwise from 3 o'clock
pub const LABEL_ARC_START_DEG: f32 = 5.0;

/// Sweep of each label arc; the 10 degree gaps frame the hour labels
pub const LABEL_ARC_SWEEP_DEG: f32 = 80.0;

/// Labels drawn at 12, 3, 6 and 9 o'clock, in that order
pub const HOUR_LABELS: [&str; 4] = ["12", "3", "6", "9"];

/// Fraction of the sweep gradient that stays at the dark color
pub const GRADIENT_DARK_STOP: f32 = 0.75;

/// Number of arc segments used to approximate the sweep gradient
pub const GRADIENT_SEGMENTS: usize = 200;

/// Distance of the hour and minute hand bases above the pivot
pub const HAND_BASE_ABOVE_PIVOT_RATIO: f32 = 0.03;

/// Hour hand half-width at the pivot
pub const HOUR_HAND_BASE_HALF_WIDTH_RATIO: f32 = 0.018;

/// Hour hand half-width at the tip
pub const HOUR_HAND_TIP_HALF_WIDTH_RATIO: f32 = 0.009;

/// Hour hand tip corners, measured down from the top of the label ring
pub const HOUR_HAND_TIP_RATIO: f32 = 0.48;

/// Hour hand rounded tip apex
pub const HOUR_HAND_APEX_RATIO: f32 = 0.46;

/// Minute hand half-width at the pivot
pub const MINUTE_HAND_BASE_HALF_WIDTH_RATIO: f32 = 0.01;

/// Minute hand half-width at the tip
pub const MINUTE_HAND_TIP_HALF_WIDTH_RATIO: f32 = 0.008;

/// Minute hand tip corners
pub const MINUTE_HAND_TIP_RATIO: f32 = 0.365;

/// Minute hand rounded tip apex
pub const MINUTE_HAND_APEX_RATIO: f32 = 0.345;

/// Second hand pointer apex
pub const SECOND_HAND_APEX_RATIO: f32 = 0.26;

/// Second hand pointer base
pub const SECOND_HAND_BASE_RATIO: f32 = 0.34;

/// Second hand pointer half-width at its base
pub const SECOND_HAND_HALF_WIDTH_RATIO: f32 = 0.05;

/// Radius of the ring drawn around the pivot
pub const PIVOT_RING_RADIUS_RATIO: f32 = 0.03;

/// Stroke width of the pivot ring
pub const PIVOT_RING_STROKE_RATIO: f32 = 0.02;

/// Line segments used to flatten each quadratic curve in a hand outline
pub const QUAD_SEGMENTS: usize = 4;

/// Maximum outline points of a single hand
pub const MAX_HAND_POINTS: usize = 16;
