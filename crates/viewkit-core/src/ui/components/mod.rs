// src/ui/components/mod.rs
//! UI components library

pub mod circle;
pub mod clock;

pub use circle::CircleView;
pub use clock::{ClockTime, ClockView};
