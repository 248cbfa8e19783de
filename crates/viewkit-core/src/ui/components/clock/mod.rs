//! Analog clock face
//!
//! Split the way the graph component is: constants, pure geometry and time
//! maths in their own modules, and the [`ClockView`] widget tying them
//! together.

pub mod constants;

mod component;
mod geometry;
mod gradient;
mod path;
mod time;

pub use component::{ClockView, Hand, hand_outline, label_font};
pub use geometry::{ClockGeometry, PointF, RectF, stroke_px};
pub use gradient::SweepGradient;
pub use path::HandPath;
pub use time::{ClockTime, HandAngles};
