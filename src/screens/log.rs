//! Event log page.
//!
//! # Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ LTE Handover Region Visualization            REGION: MASKED  │
//! ├──────────────────────────────────────────────────────────────┤
//! │ CURRENT THRESHOLDS            │ REGION                       │
//! │ A1    -70 dBm (AP input: 70)  │ Samples below A5-1: 40/70    │
//! │ ...                           │ Shaded samples:     40       │
//! ├──────────────────────────────────────────────────────────────┤
//! │ 00000.012 I Started with A1 -70 ...                          │
//! │ 00004.530 I A5-1 -90 -> -91 dBm (AP input: 49)               │
//! └──────────────────────────────────────────────────────────────┘
//! ```

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::Text;
use handover_common::colors::{FRAME_GRAY, WHITE};
use handover_common::region::SAMPLE_COUNT;
use handover_common::{HandoverRegion, Parameter};
use heapless::String;

use crate::config::{HEADER_HEIGHT, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::event_log::EventLog;
use crate::state::ControlState;
use crate::styles::{HEADING_STYLE, LABEL_FONT, LEFT_ALIGNED, MUTED_STYLE, TEXT_STYLE};
use crate::widgets::draw_header;

// =============================================================================
// Layout Constants
// =============================================================================

/// Baseline of the section headings.
const SECTION_Y: i32 = HEADER_HEIGHT as i32 + 22;

/// Baseline of the first summary line.
const SUMMARY_Y: i32 = SECTION_Y + 16;

const SUMMARY_LINE_HEIGHT: i32 = 12;

const COL1_X: i32 = 12;
const COL2_X: i32 = 372;

/// Y position of the divider above the log.
const LOG_DIVIDER_Y: i32 = SUMMARY_Y + 6 * SUMMARY_LINE_HEIGHT;

/// Baseline of the first log line.
const LOG_Y: i32 = LOG_DIVIDER_Y + 28;

const LOG_LINE_HEIGHT: i32 = 12;

/// Baseline of the footer hint.
const FOOTER_Y: i32 = SCREEN_HEIGHT as i32 - 8;

/// Log lines that fit between the divider and the footer.
pub const LOG_VISIBLE_LINES: usize = ((FOOTER_Y - 14 - LOG_Y) / LOG_LINE_HEIGHT + 1) as usize;

/// Timestamp column width: `SSSSS.mmm ` is 10 characters of 6px.
const PREFIX_X: i32 = COL1_X + 60;
const MESSAGE_X: i32 = PREFIX_X + 12;

const DIVIDER_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(FRAME_GRAY, 1);

// =============================================================================
// Log Page Drawing
// =============================================================================

/// Draw the log page.
///
/// Clears the display and renders the header, a summary of the current
/// thresholds and region, and the newest log lines that fit.
pub fn draw_log_page<D>(
    display: &mut D,
    state: &ControlState,
    log: &EventLog,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(WHITE).ok();

    draw_header(display, state.mode);
    draw_threshold_summary(display, state);
    draw_region_summary(display, state);

    draw_divider(display, LOG_DIVIDER_Y);
    Text::with_text_style("EVENT LOG", Point::new(COL1_X, LOG_DIVIDER_Y + 16), HEADING_STYLE, LEFT_ALIGNED)
        .draw(display)
        .ok();
    draw_log_lines(display, log);

    Text::with_text_style("Tab: back to chart   Esc: quit", Point::new(COL1_X, FOOTER_Y), MUTED_STYLE, LEFT_ALIGNED)
        .draw(display)
        .ok();
}

fn draw_threshold_summary<D>(
    display: &mut D,
    state: &ControlState,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style("CURRENT THRESHOLDS", Point::new(COL1_X, SECTION_Y), HEADING_STYLE, LEFT_ALIGNED)
        .draw(display)
        .ok();

    for (i, param) in Parameter::ALL.into_iter().enumerate() {
        let mut line: String<48> = String::new();
        let _ = write!(
            line,
            "{:<5} {}",
            param.short_name(),
            param.format_value(state.thresholds.get(param))
        );
        let y = SUMMARY_Y + i as i32 * SUMMARY_LINE_HEIGHT;
        Text::with_text_style(&line, Point::new(COL1_X, y), TEXT_STYLE, LEFT_ALIGNED)
            .draw(display)
            .ok();
    }
}

fn draw_region_summary<D>(
    display: &mut D,
    state: &ControlState,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style("REGION", Point::new(COL2_X, SECTION_Y), HEADING_STYLE, LEFT_ALIGNED)
        .draw(display)
        .ok();

    let region = HandoverRegion::compute(&state.thresholds);
    let mut lines: [String<48>; 4] = Default::default();
    let _ = write!(lines[0], "Mode:               {}", state.mode.label());
    let _ = write!(lines[1], "Samples below A5-1: {}/{SAMPLE_COUNT}", region.samples_below_a5_1());
    let _ = write!(lines[2], "Shaded samples:     {}", region.shaded_samples());
    let _ = write!(lines[3], "Visible area:       {:.1} dB^2", region.visible_area());

    for (i, line) in lines.iter().enumerate() {
        let y = SUMMARY_Y + i as i32 * SUMMARY_LINE_HEIGHT;
        Text::with_text_style(line, Point::new(COL2_X, y), TEXT_STYLE, LEFT_ALIGNED)
            .draw(display)
            .ok();
    }
}

fn draw_log_lines<D>(
    display: &mut D,
    log: &EventLog,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let skip = log.len().saturating_sub(LOG_VISIBLE_LINES);
    for (i, entry) in log.iter().skip(skip).enumerate() {
        let y = LOG_Y + i as i32 * LOG_LINE_HEIGHT;

        Text::with_text_style(&entry.timestamp(), Point::new(COL1_X, y), MUTED_STYLE, LEFT_ALIGNED)
            .draw(display)
            .ok();

        let mut prefix: String<2> = String::new();
        let _ = prefix.push(entry.level.prefix());
        let level_style = MonoTextStyle::new(LABEL_FONT, entry.level.color());
        Text::with_text_style(&prefix, Point::new(PREFIX_X, y), level_style, LEFT_ALIGNED)
            .draw(display)
            .ok();

        Text::with_text_style(&entry.message, Point::new(MESSAGE_X, y), TEXT_STYLE, LEFT_ALIGNED)
            .draw(display)
            .ok();
    }
}

fn draw_divider<D>(
    display: &mut D,
    y: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Line::new(Point::new(0, y), Point::new((SCREEN_WIDTH - 1) as i32, y))
        .into_styled(DIVIDER_STYLE)
        .draw(display)
        .ok();
}
