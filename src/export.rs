//! Headless output: PNG snapshots and the CSV region table.
//!
//! The chart page is drawn into an off-screen [`SimulatorDisplay`] with the
//! same widgets the window uses, so exported images match the screen.
//!
//! # Region Table
//!
//! One row per serving sample:
//!
//! ```text
//! serving_dbm,in_region,lower_dbm,upper_dbm,clipped_lower_dbm
//! -110.0,true,-107.0,-75.0,-95.0
//! -89.5,false,,,
//! ```
//!
//! `lower_dbm`/`upper_dbm` are the extent before the A5-2 condition,
//! `clipped_lower_dbm` the lower bound once A5-2 applies. `in_region` is true
//! when the clipped extent is non-empty. Empty bounds are left blank.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay};
use handover_common::HandoverRegion;
use handover_common::region::Extent;

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::{AppError, AppResult};
use crate::screens::draw_chart_page;
use crate::state::ControlState;

/// CSV header line (without newline).
pub const REGION_TABLE_HEADER: &str = "serving_dbm,in_region,lower_dbm,upper_dbm,clipped_lower_dbm";

/// Draw the chart page for `state` into a new off-screen display.
pub fn render_frame(state: &ControlState) -> SimulatorDisplay<Rgb565> {
    let mut display = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    draw_chart_page(&mut display, state, None);
    display
}

/// Render the chart for `state` and write it to `path` as PNG.
pub fn export_png(
    path: &Path,
    state: &ControlState,
    scale: u32,
) -> AppResult<()> {
    let display = render_frame(state);
    let settings = OutputSettingsBuilder::new().scale(scale).build();

    display
        .to_rgb_output_image(&settings)
        .save_png(path)
        .map_err(|e| AppError::Export {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    tracing::info!(path = %path.display(), scale, "chart exported");
    Ok(())
}

/// Snapshot path for `state` inside `dir`.
pub fn snapshot_path(
    dir: &Path,
    state: &ControlState,
) -> PathBuf {
    dir.join(state.snapshot_filename())
}

/// Write the region table for `region` as CSV.
pub fn write_region_table<W: Write>(
    writer: &mut W,
    region: &HandoverRegion,
) -> io::Result<()> {
    writeln!(writer, "{REGION_TABLE_HEADER}")?;

    for (i, serving) in region.serving().iter().enumerate() {
        let extent = region.extent(i);
        let clipped = region.clipped_extent(i);
        writeln!(
            writer,
            "{serving:.1},{},{},{},{}",
            clipped.is_some(),
            bound(extent, |e| e.lower),
            bound(extent, |e| e.upper),
            bound(clipped, |e| e.lower),
        )?;
    }
    Ok(())
}

fn bound(
    extent: Option<Extent>,
    pick: fn(&Extent) -> f32,
) -> String {
    extent.map(|e| format!("{:.1}", pick(&e))).unwrap_or_default()
}

// =============================================================================
// Unit Tests
// =============================================================================
