//! Application configuration constants.
//!
//! Layout is fixed at compile time. The plot rectangle is 351 px square so
//! the 35 dB axis span maps to exactly 10 px per dB (inclusive end pixels).

use std::time::Duration;

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use handover_common::plot::{PlotArea, PlotBounds};

// =============================================================================
// Display Configuration
// =============================================================================

/// Window width in pixels.
pub const SCREEN_WIDTH: u32 = 720;

/// Window height in pixels.
pub const SCREEN_HEIGHT: u32 = 576;

/// Pixel scale used when no `--scale` is given.
pub const DEFAULT_SCALE: u32 = 1;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (~50 FPS). The main loop sleeps if frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Duration that popups remain visible on screen.
pub const POPUP_DURATION: Duration = Duration::from_secs(2);

// =============================================================================
// Layout Constants
// =============================================================================

/// Header bar height in pixels.
pub const HEADER_HEIGHT: u32 = 30;

/// Width of the slider sidebar on the left.
pub const SIDEBAR_WIDTH: u32 = 210;

/// Vertical distance between slider rows in the sidebar.
pub const SLIDER_ROW_HEIGHT: i32 = 64;

/// Baseline of the first slider label.
pub const SLIDER_TOP: i32 = 76;

/// Left edge of the plot rectangle.
pub const PLOT_LEFT: i32 = 290;

/// Top edge of the plot rectangle.
pub const PLOT_TOP: i32 = 76;

/// Plot rectangle edge length (350 px span + 1 end pixel).
pub const PLOT_SIZE: u32 = 351;

/// Plot rectangle and the fixed [-110, -75] window it shows.
pub const PLOT_AREA: PlotArea = PlotArea::new(
    Rectangle::new(Point::new(PLOT_LEFT, PLOT_TOP), Size::new(PLOT_SIZE, PLOT_SIZE)),
    PlotBounds::HANDOVER,
);

/// Center column of the plot, used for titles.
pub const PLOT_CENTER_X: i32 = PLOT_LEFT + (PLOT_SIZE / 2) as i32;

/// Bottom pixel row of the plot.
pub const PLOT_BOTTOM: i32 = PLOT_TOP + PLOT_SIZE as i32 - 1;

/// Baseline of the first instruction line under the plot.
pub const INSTRUCTIONS_TOP: i32 = PLOT_BOTTOM + 58;

/// Left edge of the instruction block.
pub const INSTRUCTIONS_LEFT: i32 = SIDEBAR_WIDTH as i32 + 16;

const _: () = assert!(PLOT_LEFT > SIDEBAR_WIDTH as i32);
const _: () = assert!(PLOT_LEFT + (PLOT_SIZE as i32) < SCREEN_WIDTH as i32);
const _: () = assert!(INSTRUCTIONS_TOP + 6 * 11 < SCREEN_HEIGHT as i32);
