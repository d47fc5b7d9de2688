//! Color constants for the visualizer.
//!
//! Chart colors approximate a white-background plotting style. The region
//! fill is pre-blended (30% green over white) because the display has no
//! alpha channel.
//!
//! ## Rgb565 Color Format
//!
//! 5 bits red (0-31), 6 bits green (0-63), 5 bits blue (0-31).

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors
// =============================================================================

pub const BLACK: Rgb565 = Rgb565::BLACK;

pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Header bar and popup background.
pub const RED: Rgb565 = Rgb565::RED;

// =============================================================================
// Chart Colors
// =============================================================================

/// Handover region fill: green (0, 128, 0) at 30% over white, about (179, 217, 179).
pub const REGION_GREEN: Rgb565 = Rgb565::new(22, 54, 22);

/// Legend swatch border for the region entry, same green at full opacity.
pub const DARK_GREEN: Rgb565 = Rgb565::new(0, 32, 0);

/// A1 threshold line.
pub const A1_GREEN: Rgb565 = Rgb565::new(0, 32, 0);

/// A2 threshold line (olive yellow, readable on white).
pub const A2_YELLOW: Rgb565 = Rgb565::new(24, 48, 0);

/// A5-1 threshold line.
pub const A5_1_RED: Rgb565 = Rgb565::new(31, 0, 0);

/// A5-2 threshold line (255, 165, 0).
pub const A5_2_ORANGE: Rgb565 = Rgb565::new(31, 41, 0);

/// Grid lines (176, 176, 176).
pub const GRID_GRAY: Rgb565 = Rgb565::new(22, 44, 22);

/// Legend frame and axis ticks.
pub const FRAME_GRAY: Rgb565 = Rgb565::new(12, 24, 12);

// =============================================================================
// UI Colors
// =============================================================================

/// Sidebar background (240, 242, 246).
pub const SIDEBAR_BG: Rgb565 = Rgb565::new(30, 60, 30);

/// Selected slider highlight (225, 228, 235).
pub const SELECTED_BG: Rgb565 = Rgb565::new(28, 57, 29);

/// Body text (49, 51, 63).
pub const TEXT_DARK: Rgb565 = Rgb565::new(6, 12, 7);

/// Secondary text (120, 124, 135).
pub const TEXT_MUTED: Rgb565 = Rgb565::new(15, 31, 16);

/// Slider fill and knob (255, 75, 75).
pub const ACCENT: Rgb565 = Rgb565::new(31, 18, 9);

/// Unfilled slider track (200, 202, 210).
pub const TRACK_GRAY: Rgb565 = Rgb565::new(25, 50, 26);

/// Log level colors on the log page.
pub const LOG_INFO: Rgb565 = Rgb565::new(0, 40, 0);
pub const LOG_WARN: Rgb565 = Rgb565::new(26, 40, 0);
pub const LOG_ERROR: Rgb565 = Rgb565::new(28, 0, 0);
