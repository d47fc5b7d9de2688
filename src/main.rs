// Crate-level lints: Allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32, u32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32/i32->f32 in graphics calculations
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges
#![allow(clippy::cast_sign_loss)] // i32->u32 where we know sign is positive
#![allow(clippy::too_many_lines)] // run_window() is long but well-structured

//! Interactive LTE handover region visualizer.
//!
//! Shows where an A5 handover (serving worse than A5-1, neighbor better than
//! A5-2, neighbor ahead of serving by the hysteresis) would trigger, as a
//! shaded region on a serving power vs. neighbor power plot. A1, A2, A5-1 and
//! A5-2 thresholds and the hysteresis are adjusted with keyboard sliders.
//!
//! # Modes
//!
//! | Invocation | Behavior |
//! |------------|----------|
//! | no output flag | Open the simulator window |
//! | `--export PATH` | Render the chart once to PNG and exit |
//! | `--print-region` | Print the region table as CSV and exit |
//!
//! # Controls
//!
//! See [`input`] for the full key table. Arrow keys select and adjust
//! sliders, `M` toggles the region mode, `S` saves a snapshot, `Tab` opens the
//! event log.
//!
//! # Redraw Strategy
//!
//! The chart is a pure function of [`ControlState`], so a page is redrawn
//! only when [`RenderState::check_dirty`] reports a change (slider moved,
//! page switched, popup shown or expired). Idle frames just pump window
//! events and sleep to [`FRAME_TIME`].
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │ HEADER                                                     │  30px
//! ├─────────────┬──────────────────────────────────────────────┤
//! │  SLIDERS    │               PLOT + LEGEND                  │
//! │  A1 A2      │                 351 x 351                    │
//! │  A5-1 A5-2  │                                              │
//! │  Hyst       ├──────────────────────────────────────────────┤
//! │  Keys       │               INSTRUCTIONS                   │
//! └─────────────┴──────────────────────────────────────────────┘
//!     210px                        510px
//! ```

mod cli;
mod config;
mod error;
mod event_log;
mod export;
mod input;
mod logging;
mod pages;
mod render;
mod screens;
mod state;
mod styles;
mod widgets;

use std::io::{self, Write};
use std::process::ExitCode;
use std::thread;
use std::time::Instant;

use clap::Parser;
use cli::Cli;
use config::{FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use error::AppResult;
use event_log::EventLog;
use export::{export_png, snapshot_path, write_region_table};
use handover_common::HandoverRegion;
use input::action_for_key;
use pages::Page;
use render::{Popup, RenderState};
use screens::{draw_chart_page, draw_log_page};
use state::{Action, Change, ControlState};
use widgets::APP_TITLE;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "exiting");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> AppResult<()> {
    let state = ControlState::new(cli.thresholds(), cli.region_mode());
    tracing::debug!(?state, "initial state");

    if cli.print_region {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_region_table(&mut out, &HandoverRegion::compute(&state.thresholds))?;
        out.flush()?;
    }

    if let Some(path) = &cli.export {
        export_png(path, &state, cli.scale)?;
    }

    if cli.print_region || cli.export.is_some() {
        return Ok(());
    }

    run_window(cli, state);
    Ok(())
}

/// Interactive window loop. Returns when the window closes or on `Esc`.
fn run_window(
    cli: &Cli,
    mut state: ControlState,
) {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(cli.scale).build();
    let mut window = Window::new(APP_TITLE, &output_settings);

    // ==========================================================================
    // Main Loop State
    // ==========================================================================

    // Active popup (only one at a time, encapsulates kind + start time)
    let mut active_popup: Option<Popup> = None;

    let mut render_state = RenderState::new();
    let mut current_page = Page::default();

    let mut event_log = EventLog::new();
    let t = &state.thresholds;
    event_log.info(&format!(
        "Started: A1 {} A2 {} A5-1 {} A5-2 {} Hyst {}, {}",
        t.a1,
        t.a2,
        t.a5_1,
        t.a5_2,
        t.hysteresis,
        state.mode.label()
    ));
    if !cli.snapshot_dir.is_dir() {
        event_log.warn(&format!("Snapshot directory missing: {}", cli.snapshot_dir.display()));
    }

    // ==========================================================================
    // Main Render Loop
    // ==========================================================================

    loop {
        let frame_start = Instant::now();

        // The simulator window is only pumped by update(); draw the first
        // frame before polling so events() has a window to read from.
        if !render_state.is_first_frame() {
            for ev in window.events() {
                let action = match ev {
                    SimulatorEvent::Quit => Action::Quit,
                    SimulatorEvent::KeyDown { keycode, repeat, .. } => match action_for_key(keycode, repeat) {
                        Some(action) => action,
                        None => continue,
                    },
                    _ => continue,
                };

                match action {
                    Action::Quit => {
                        tracing::info!("quit requested");
                        return;
                    }
                    Action::TogglePage => {
                        current_page = current_page.toggle();
                        active_popup = None; // Cancel popup when switching pages
                        tracing::debug!(page = current_page.label(), "page switched");
                    }
                    Action::Snapshot => {
                        let path = snapshot_path(&cli.snapshot_dir, &state);
                        match export_png(&path, &state, cli.scale) {
                            Ok(()) => {
                                event_log.info(&format!("Snapshot saved: {}", path.display()));
                                active_popup = Some(Popup::Saved(Instant::now()));
                            }
                            Err(e) => {
                                event_log.error(&format!("Snapshot failed: {e}"));
                                active_popup = Some(Popup::SaveFailed(Instant::now()));
                            }
                        }
                    }
                    _ => {
                        if let Some(change) = state.apply(action) {
                            event_log.record_change(change);
                            match change {
                                Change::Reset => active_popup = Some(Popup::Reset(Instant::now())),
                                Change::Mode(mode) => active_popup = Some(Popup::Mode(mode, Instant::now())),
                                Change::Selected(_) | Change::Value { .. } => {}
                            }
                        }
                    }
                }
            }
        }

        // Check if popup has expired BEFORE the dirty check so the frame
        // that drops it also redraws without it
        if let Some(ref popup) = active_popup
            && popup.is_expired()
        {
            active_popup = None;
        }

        // ======================================================================
        // Page-Based Rendering
        // ======================================================================

        if render_state.check_dirty(&state, current_page, active_popup.as_ref(), event_log.total()) {
            match current_page {
                Page::Chart => draw_chart_page(&mut display, &state, active_popup.as_ref()),
                Page::Log => draw_log_page(&mut display, &state, &event_log),
            }
        }

        render_state.end_frame();

        // Update window with rendered frame
        window.update(&display);

        // Sleep to maintain target frame rate (~50 FPS)
        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}
