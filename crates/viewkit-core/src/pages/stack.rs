// src/pages/stack.rs
//! Circle indicators stacked down the left edge of the screen

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::{debug, warn};

use super::constants::{STACK_PAGE_BACKGROUND, STACK_PAGE_CIRCLE_COUNT, STACK_PAGE_TITLE};
use super::page::{Page, PageId};
use crate::config::ViewConfig;
use crate::ui::components::CircleView;
use crate::ui::core::View;
use crate::ui::layouts::StackContainer;
use crate::ui::measure::AxisConstraint;
use crate::ui::styling::lerp_rgb565;

/// Page hosting a [`StackContainer`] of circle indicators
///
/// The container is measured with `AtMost` on both axes: the full page width,
/// and an equal share of the page height per circle so the column fits on
/// screen. Each circle fades a little further into the background.
pub struct StackPage {
    bounds: Rectangle,
    stack: StackContainer<STACK_PAGE_CIRCLE_COUNT>,
    dirty: bool,
}

impl StackPage {
    pub fn new(bounds: Rectangle, config: &ViewConfig) -> Self {
        let mut stack = StackContainer::new();
        let base = config.circle_color();

        for i in 0..STACK_PAGE_CIRCLE_COUNT {
            let fade = i as f32 / STACK_PAGE_CIRCLE_COUNT as f32;
            let circle = CircleView::new(config)
                .with_color(lerp_rgb565(base, STACK_PAGE_BACKGROUND, fade));

            if let Err(e) = stack.add_child(circle) {
                warn!("stack page: {}", e);
            }
        }

        let mut page = Self {
            bounds,
            stack,
            dirty: true,
        };
        page.layout();
        page
    }

    pub fn stack(&self) -> &StackContainer<STACK_PAGE_CIRCLE_COUNT> {
        &self.stack
    }

    /// Run one layout pass against the page bounds.
    fn layout(&mut self) {
        let share = self.bounds.size.height / STACK_PAGE_CIRCLE_COUNT as u32;
        let size = self.stack.layout(
            AxisConstraint::AtMost(self.bounds.size.width),
            AxisConstraint::AtMost(share),
            self.bounds.top_left,
        );

        debug!(
            "stack page: {} circles laid out in {}x{}",
            self.stack.len(),
            size.width,
            size.height
        );
    }
}

impl Page for StackPage {
    fn id(&self) -> PageId {
        PageId::Stack
    }

    fn title(&self) -> &str {
        STACK_PAGE_TITLE
    }

    fn on_activate(&mut self) {
        self.dirty = true;
    }

    fn update(&mut self) {
        self.stack.update();
    }

    fn draw_page<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        display.fill_solid(&self.bounds, STACK_PAGE_BACKGROUND)?;
        self.stack.draw(display)
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty || self.stack.is_dirty()
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
        self.stack.mark_clean();
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
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
    fn test_circles_fill_the_column() {
        let page = StackPage::new(screen(), &ViewConfig::default());
        let stack = page.stack();

        assert_eq!(stack.len(), STACK_PAGE_CIRCLE_COUNT);
        assert_eq!(stack.measured_size(), Size::new(80, 240));

        for i in 0..STACK_PAGE_CIRCLE_COUNT {
            assert_eq!(
                stack.child_bounds(i),
                Some(Rectangle::new(
                    Point::new(0, 80 * i as i32),
                    Size::new(80, 80)
                ))
            );
        }
    }

    #[test]
    fn test_draw_page_paints_first_circle() {
        let config = ViewConfig::default();
        let mut page = StackPage::new(screen(), &config);
        let mut fb = FrameBuffer::new(Size::new(320, 240));

        page.draw_page(&mut fb).unwrap();

        assert_eq!(fb.pixel(Point::new(40, 40)), Some(config.circle_color()));
        assert_eq!(fb.pixel(Point::new(200, 40)), Some(STACK_PAGE_BACKGROUND));
    }

    #[test]
    fn test_stays_clean_between_ticks() {
        let mut page = StackPage::new(screen(), &ViewConfig::default());
        page.mark_clean();

        page.update();
        assert!(!page.is_dirty());

        page.on_activate();
        assert!(page.is_dirty());
    }
}
