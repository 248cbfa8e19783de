//! Hardware-independent core library for viewkit
//!
//! This crate contains the platform-agnostic view system: axis constraints,
//! the vertical stack layout engine, the circle and clock views, pages, and
//! an in-memory framebuffer.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on both
//! embedded targets and desktop hosts (for the simulator and tests).

#![no_std]

extern crate alloc;

pub mod config;
pub mod framebuffer;
pub mod pages;
pub mod ui;
