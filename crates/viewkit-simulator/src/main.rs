//! Desktop simulator for the viewkit widgets.
//!
//! Renders viewkit-core pages in an SDL2 window via
//! `embedded-graphics-simulator`. Pages draw into a [`FrameBuffer`] and only
//! the changed region is flushed to the window each frame.
//!
//! # Key bindings
//!
//! | Key     | Action              |
//! |---------|---------------------|
//! | 1       | Stacked circles     |
//! | 2       | Analog clock        |
//! | Q / Esc | Quit                |
//!
//! # Configuration
//!
//! Set `VIEWKIT_CONFIG` to the path of a postcard-encoded `ViewConfig` to
//! override the default colors, sizes, and UTC offset.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode,
};
use log::{error, info, warn};

use viewkit_core::config::ViewConfig;
use viewkit_core::framebuffer::FrameBuffer;
use viewkit_core::pages::{ClockPage, Page, PageId, PageWrapper, StackPage, TimeSource};
use viewkit_core::ui::{ClockTime, DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX};

// ---------------------------------------------------------------------------
// Display constants
// ---------------------------------------------------------------------------

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 2;

/// Target frame duration (~30 FPS).
const FRAME_DURATION: Duration = Duration::from_millis(33);

/// Environment variable naming an encoded config file.
const CONFIG_ENV_VAR: &str = "VIEWKIT_CONFIG";

// ---------------------------------------------------------------------------
// Time source
// ---------------------------------------------------------------------------

/// Reads the host's wall clock, shifted to the configured zone.
struct SystemClock {
    utc_offset_minutes: i32,
}

impl TimeSource for SystemClock {
    fn now(&self) -> ClockTime {
        let unix_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64;

        ClockTime::from_unix_millis(unix_ms, self.utc_offset_minutes)
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Load the config named by [`CONFIG_ENV_VAR`], falling back to defaults.
fn load_config() -> ViewConfig {
    let Ok(path) = std::env::var(CONFIG_ENV_VAR) else {
        return ViewConfig::default();
    };

    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Failed to read {}: {}", path, e);
            return ViewConfig::default();
        }
    };

    match ViewConfig::from_bytes(&bytes) {
        Ok(config) => {
            info!("Loaded config from {}", path);
            config
        }
        Err(e) => {
            warn!("Ignoring {}: {}", path, e);
            ViewConfig::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Page helpers
// ---------------------------------------------------------------------------

/// Full-screen bounding rectangle.
fn screen_bounds() -> Rectangle {
    Rectangle::new(
        Point::zero(),
        Size::new(DISPLAY_WIDTH_PX as u32, DISPLAY_HEIGHT_PX as u32),
    )
}

/// Create a new page of the given kind.
fn create_page(page_id: PageId, config: &ViewConfig) -> PageWrapper {
    let bounds = screen_bounds();

    let mut page: PageWrapper = match page_id {
        PageId::Stack => StackPage::new(bounds, config).into(),
        PageId::Clock => ClockPage::new(
            bounds,
            config,
            SystemClock {
                utc_offset_minutes: config.utc_offset_minutes,
            },
        )
        .into(),
    };

    page.on_activate();
    page
}

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

/// Map an SDL keycode to a page navigation request.
fn keycode_to_page(keycode: Keycode) -> Option<PageId> {
    match keycode {
        Keycode::Num1 | Keycode::Kp1 => Some(PageId::Stack),
        Keycode::Num2 | Keycode::Kp2 => Some(PageId::Clock),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();
    info!("Starting viewkit simulator");
    info!(
        "Display: {}×{} (scale {}×)",
        DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX, WINDOW_SCALE
    );
    info!("Keys: 1=Stack  2=Clock  Q=Quit");

    let config = load_config();

    // SDL2 display and window
    let size = Size::new(DISPLAY_WIDTH_PX as u32, DISPLAY_HEIGHT_PX as u32);
    let mut display = SimulatorDisplay::<Rgb565>::new(size);
    let mut framebuffer = FrameBuffer::new(size);

    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Viewkit Simulator", &output_settings);

    // Start on the clock page
    let mut current_page = create_page(PageId::Clock, &config);
    info!("Showing {}", current_page.title());

    // The SDL window is lazily initialized on the first `update()` call.
    // We must call `update()` once before `events()` or it will panic.
    let _ = display.clear(Rgb565::BLACK);
    let _ = current_page.draw_page(&mut framebuffer);
    let _ = framebuffer.flush(&mut display);
    current_page.mark_clean();
    window.update(&display);

    // -----------------------------------------------------------------------
    // Main loop
    // -----------------------------------------------------------------------
    'running: loop {
        let frame_start = Instant::now();

        // --- SDL events ---------------------------------------------------
        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,

                SimulatorEvent::KeyDown { keycode, .. } => {
                    if keycode == Keycode::Q || keycode == Keycode::Escape {
                        break 'running;
                    }

                    if let Some(target) = keycode_to_page(keycode) {
                        if target != current_page.id() {
                            info!("Navigating to {:?}", target);
                            current_page.on_deactivate();
                            current_page = create_page(target, &config);
                        }
                    }
                }

                _ => {}
            }
        }

        // --- Page update tick ---------------------------------------------
        current_page.update();

        // --- Render -------------------------------------------------------
        if current_page.is_dirty() {
            if let Err(e) = current_page.draw_page(&mut framebuffer) {
                error!("Draw error: {:?}", e);
            }
            current_page.mark_clean();

            if let Err(e) = framebuffer.flush(&mut display) {
                error!("Flush error: {:?}", e);
            }
        }

        window.update(&display);

        // --- Frame pacing -------------------------------------------------
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }

    info!("Simulator exiting");
}
