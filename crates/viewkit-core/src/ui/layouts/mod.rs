// src/ui/layouts/mod.rs
//! Layout components for arranging UI elements

pub mod container;
pub mod stack;

pub use container::{StackContainer, ViewError};
pub use stack::{ChildBox, ContainerDecision, PlacementRect, StackLayoutEngine};
