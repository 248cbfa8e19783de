// src/pages/page.rs
//! Core page abstraction and type-erased wrapper for the page system.
//!
//! This module defines the [`Page`] trait that every screen implements,
//! along with [`PageWrapper`], an enum-based wrapper that enables
//! heterogeneous storage of concrete page types without dynamic dispatch
//! (`dyn`).
//!
//! # Page Trait
//!
//! [`Page`] defines the lifecycle and rendering contract for every screen.
//! Implementors handle their own layout, dirty tracking, and drawing.
//!
//! # PageWrapper
//!
//! Because embedded targets often avoid trait objects, [`PageWrapper`]
//! provides a concrete enum that delegates every [`Page`] method to the inner
//! page type. Hosts hold a `PageWrapper` and route calls through it.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

extern crate alloc;
use alloc::boxed::Box;

use super::clock::ClockPage;
use super::stack::StackPage;

/// Page identifier for navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    Stack,
    Clock,
}

// ---------------------------------------------------------------------------
// Page trait
// ---------------------------------------------------------------------------

/// Trait that all navigable pages must implement.
///
/// The host calls these methods in a well-defined order each frame:
///
/// 1. **`on_activate`**: once, when the page becomes the active page.
/// 2. **`update`**: once per frame to advance internal state.
/// 3. **`draw_page`**: when `is_dirty()` is true.
/// 4. **`on_deactivate`**: once, when navigating away from the page.
pub trait Page {
    /// Unique identifier used for navigation and lookup.
    fn id(&self) -> PageId;

    /// Human-readable title (may appear in window titles or debug logs).
    fn title(&self) -> &str;

    /// Called once when this page becomes the active page.
    fn on_activate(&mut self) {}

    /// Called once when this page is no longer the active page.
    fn on_deactivate(&mut self) {}

    /// Advance per-frame state (clocks, animations).
    fn update(&mut self);

    /// Render the entire page to the given display target.
    fn draw_page<D: DrawTarget<Color = Rgb565>>(&mut self, display: &mut D)
    -> Result<(), D::Error>;

    /// Bounding rectangle of this page (typically the full screen).
    fn bounds(&self) -> Rectangle;

    /// Whether the page has regions that need redrawing.
    fn is_dirty(&self) -> bool;

    /// Clear the dirty flag after a successful draw.
    fn mark_clean(&mut self);

    /// Force the page to be redrawn on the next frame.
    fn mark_dirty(&mut self);
}

// ---------------------------------------------------------------------------
// PageWrapper
// ---------------------------------------------------------------------------

/// Enum-based wrapper that stores one of the concrete page types.
///
/// Each variant wraps its page in a [`Box`] to keep the enum size uniform
/// regardless of the underlying page's footprint.
///
/// When adding a new page, add a variant here and implement the delegation
/// in the [`Page`] impl below.
pub enum PageWrapper {
    Stack(Box<StackPage>),
    Clock(Box<ClockPage>),
}

impl Page for PageWrapper {
    fn id(&self) -> PageId {
        match self {
            PageWrapper::Stack(page) => page.id(),
            PageWrapper::Clock(page) => page.id(),
        }
    }

    fn title(&self) -> &str {
        match self {
            PageWrapper::Stack(page) => page.title(),
            PageWrapper::Clock(page) => page.title(),
        }
    }

    fn on_activate(&mut self) {
        match self {
            PageWrapper::Stack(page) => page.on_activate(),
            PageWrapper::Clock(page) => page.on_activate(),
        }
    }

    fn on_deactivate(&mut self) {
        match self {
            PageWrapper::Stack(page) => page.on_deactivate(),
            PageWrapper::Clock(page) => page.on_deactivate(),
        }
    }

    fn update(&mut self) {
        match self {
            PageWrapper::Stack(page) => page.update(),
            PageWrapper::Clock(page) => page.update(),
        }
    }

    fn draw_page<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        match self {
            PageWrapper::Stack(page) => page.draw_page(display),
            PageWrapper::Clock(page) => page.draw_page(display),
        }
    }

    fn bounds(&self) -> Rectangle {
        match self {
            PageWrapper::Stack(page) => Page::bounds(page.as_ref()),
            PageWrapper::Clock(page) => Page::bounds(page.as_ref()),
        }
    }

    fn is_dirty(&self) -> bool {
        match self {
            PageWrapper::Stack(page) => Page::is_dirty(page.as_ref()),
            PageWrapper::Clock(page) => Page::is_dirty(page.as_ref()),
        }
    }

    fn mark_clean(&mut self) {
        match self {
            PageWrapper::Stack(page) => Page::mark_clean(page.as_mut()),
            PageWrapper::Clock(page) => Page::mark_clean(page.as_mut()),
        }
    }

    fn mark_dirty(&mut self) {
        match self {
            PageWrapper::Stack(page) => Page::mark_dirty(page.as_mut()),
            PageWrapper::Clock(page) => Page::mark_dirty(page.as_mut()),
        }
    }
}

impl From<StackPage> for PageWrapper {
    fn from(page: StackPage) -> Self {
        PageWrapper::Stack(Box::new(page))
    }
}

impl From<ClockPage> for PageWrapper {
    fn from(page: ClockPage) -> Self {
        PageWrapper::Clock(Box::new(page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewConfig;
    use crate::pages::clock::FixedTime;
    use crate::ui::ClockTime;

    fn screen() -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(320, 240))
    }

    #[test]
    fn test_wrapper_delegates_identity() {
        let config = ViewConfig::default();
        let stack: PageWrapper = StackPage::new(screen(), &config).into();
        let clock: PageWrapper =
            ClockPage::new(screen(), &config, FixedTime(ClockTime::new(1, 2, 3, 0))).into();

        assert_eq!(stack.id(), PageId::Stack);
        assert_eq!(clock.id(), PageId::Clock);
        assert_eq!(Page::bounds(&clock), screen());
        assert!(!stack.title().is_empty());
    }

    #[test]
    fn test_wrapper_dirty_flags() {
        let config = ViewConfig::default();
        let mut page: PageWrapper = StackPage::new(screen(), &config).into();

        assert!(page.is_dirty());
        page.mark_clean();
        assert!(!page.is_dirty());
        page.mark_dirty();
        assert!(page.is_dirty());
    }
}
