// src/ui/mod.rs
//! Viewkit UI system: measured views for embedded displays
//!
//! This module provides:
//! - The [`View`] trait every widget implements (measure, place, draw)
//! - Axis constraints and the resolution rules views share
//! - A vertical stack layout engine and the container built on it
//! - Built-in views: a circle indicator and an analog clock
//! - Dirty region tracking for efficient rendering

pub mod components;
pub mod core;
pub mod elements;
pub mod layouts;
pub mod measure;
pub mod styling;

/// Width of the target display in pixels
pub const DISPLAY_WIDTH_PX: u16 = 320;

/// Height of the target display in pixels
pub const DISPLAY_HEIGHT_PX: u16 = 240;

// Re-export commonly used items
pub use components::{CircleView, ClockTime, ClockView};
pub use core::{DirtyRegion, View};
pub use elements::Element;
pub use layouts::{
    ChildBox, ContainerDecision, PlacementRect, StackContainer, StackLayoutEngine, ViewError,
};
pub use measure::{AxisConstraint, resolve_capped, resolve_or_default};
pub use styling::{ClockPalette, Padding};
