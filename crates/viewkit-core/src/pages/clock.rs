// src/pages/clock.rs
//! Full-screen analog clock

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::debug;

extern crate alloc;
use alloc::boxed::Box;

use super::constants::CLOCK_PAGE_TITLE;
use super::page::{Page, PageId};
use crate::config::ViewConfig;
use crate::ui::components::{ClockTime, ClockView};
use crate::ui::core::View;
use crate::ui::measure::AxisConstraint;

/// Where the clock page reads the time of day from.
///
/// The core crate has no clock of its own; hosts provide one (the simulator
/// reads the system clock, tests use [`FixedTime`]).
pub trait TimeSource {
    fn now(&self) -> ClockTime;
}

/// A time source that always reports the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedTime(pub ClockTime);

impl TimeSource for FixedTime {
    fn now(&self) -> ClockTime {
        self.0
    }
}

/// Page hosting one [`ClockView`] that fills the page
pub struct ClockPage {
    bounds: Rectangle,
    clock: ClockView,
    time_source: Box<dyn TimeSource>,
}

impl ClockPage {
    pub fn new(
        bounds: Rectangle,
        config: &ViewConfig,
        time_source: impl TimeSource + 'static,
    ) -> Self {
        let mut clock = ClockView::new(config);
        let size = clock.measure(
            AxisConstraint::Exact(bounds.size.width),
            AxisConstraint::Exact(bounds.size.height),
        );
        clock.set_bounds(Rectangle::new(bounds.top_left, size));
        clock.set_time(time_source.now());

        debug!("clock page: face radius {}", clock.geometry().radius);

        Self {
            bounds,
            clock,
            time_source: Box::new(time_source),
        }
    }

    pub fn clock(&self) -> &ClockView {
        &self.clock
    }
}

impl Page for ClockPage {
    fn id(&self) -> PageId {
        PageId::Clock
    }

    fn title(&self) -> &str {
        CLOCK_PAGE_TITLE
    }

    fn on_activate(&mut self) {
        self.clock.mark_dirty();
    }

    fn update(&mut self) {
        self.clock.set_time(self.time_source.now());
        self.clock.update();
    }

    fn draw_page<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        self.clock.draw(display)
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.clock.is_dirty()
    }

    fn mark_clean(&mut self) {
        self.clock.mark_clean();
    }

    fn mark_dirty(&mut self) {
        self.clock.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBuffer;

    fn screen() -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(320, 240))
    }

    #[test]
    fn test_clock_fills_page() {
        let page = ClockPage::new(screen(), &ViewConfig::default(), FixedTime::default());
        assert_eq!(page.clock().bounds(), screen());
        // min(320, 240) / 2
        assert_eq!(page.clock().geometry().radius, 120.0);
    }

    #[test]
    fn test_update_reads_time_source() {
        let time = ClockTime::new(3, 0, 0, 0);
        let mut page = ClockPage::new(screen(), &ViewConfig::default(), FixedTime(time));
        page.mark_clean();
        assert!(!page.is_dirty());

        page.update();

        assert!(page.is_dirty());
        assert_eq!(page.clock().angles().hour, 90.0);
        assert_eq!(page.clock().angles().minute, 0.0);
    }

    #[test]
    fn test_draw_page_fills_background() {
        let config = ViewConfig::default();
        let mut page = ClockPage::new(screen(), &config, FixedTime::default());
        let mut fb = FrameBuffer::new(Size::new(320, 240));

        page.draw_page(&mut fb).unwrap();

        assert_eq!(
            fb.pixel(Point::new(2, 2)),
            Some(config.clock_palette().background)
        );
    }
}
