//! Slider sidebar on the left of the chart page.
//!
//! One row per [`Parameter`], top to bottom in [`Parameter::ALL`] order:
//!
//! ```text
//! > A1 Threshold                 <- label, marker when selected
//!   -70 dBm (AP input: 70)        <- formatted value
//!   ======O----------------       <- track, fill and knob
//!   -110                   -60    <- range ends
//! ```
//!
//! A short key reference sits under the last row.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use handover_common::colors::{ACCENT, SELECTED_BG, SIDEBAR_BG, TRACK_GRAY};
use handover_common::{Parameter, ThresholdSet};
use heapless::String;

use crate::config::{HEADER_HEIGHT, SCREEN_HEIGHT, SIDEBAR_WIDTH, SLIDER_ROW_HEIGHT, SLIDER_TOP};
use crate::styles::{HEADING_STYLE, LEFT_ALIGNED, MUTED_STYLE, RIGHT_ALIGNED, TEXT_STYLE, VALUE_STYLE};

// =============================================================================
// Slider Layout Constants
// =============================================================================

/// Left end of every slider track.
pub const TRACK_LEFT: i32 = 16;

/// Right end of every slider track.
pub const TRACK_RIGHT: i32 = SIDEBAR_WIDTH as i32 - 16;

/// Track offset below the label baseline.
const TRACK_OFFSET: i32 = 26;

/// Value text offset below the label baseline.
const VALUE_OFFSET: i32 = 13;

/// Range label offset below the label baseline.
const RANGE_OFFSET: i32 = 44;

const KNOB_DIAMETER: u32 = 11;

/// Baseline of the sidebar heading.
const HEADING_POS: Point = Point::new(12, HEADER_HEIGHT as i32 + 22);

/// Baseline of the first key hint line.
const HINTS_TOP: i32 = SLIDER_TOP + 5 * SLIDER_ROW_HEIGHT + 10;

const HINT_LINE_HEIGHT: i32 = 11;

const KEY_HINTS: [&str; 7] = [
    "Keys:",
    "Up/Down     select slider",
    "Left/Right  adjust by 1",
    "PgUp/PgDn   adjust by 5",
    "Home/End    min / max",
    "R reset     M region mode",
    "S save PNG  Tab event log",
];

const SIDEBAR_RECT: Rectangle = Rectangle::new(
    Point::new(0, HEADER_HEIGHT as i32),
    Size::new(SIDEBAR_WIDTH, SCREEN_HEIGHT - HEADER_HEIGHT),
);

const SIDEBAR_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(SIDEBAR_BG);
const SELECTED_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(SELECTED_BG);
const TRACK_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(TRACK_GRAY, 3);
const FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(ACCENT, 3);
const KNOB_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(ACCENT);

// =============================================================================
// Drawing Functions
// =============================================================================

/// Label baseline of the slider row for `param`.
pub const fn row_top(param: Parameter) -> i32 { SLIDER_TOP + param.index() as i32 * SLIDER_ROW_HEIGHT }

/// Knob column for `value` on `param`'s slider.
pub const fn knob_x(
    param: Parameter,
    value: i32,
) -> i32 {
    let (min, max) = param.range();
    let value = param.clamp(value);
    TRACK_LEFT + (value - min) * (TRACK_RIGHT - TRACK_LEFT) / (max - min)
}

/// Draw the sidebar with all sliders, highlighting `selected`.
pub fn draw_sidebar<D>(
    display: &mut D,
    thresholds: &ThresholdSet,
    selected: Parameter,
) where
    D: DrawTarget<Color = Rgb565>,
{
    SIDEBAR_RECT.into_styled(SIDEBAR_FILL).draw(display).ok();

    Text::with_text_style("Threshold Parameters", HEADING_POS, HEADING_STYLE, LEFT_ALIGNED)
        .draw(display)
        .ok();

    for param in Parameter::ALL {
        draw_slider(display, param, thresholds.get(param), param == selected);
    }

    for (i, hint) in KEY_HINTS.iter().enumerate() {
        let pos = Point::new(12, HINTS_TOP + i as i32 * HINT_LINE_HEIGHT);
        Text::with_text_style(hint, pos, MUTED_STYLE, LEFT_ALIGNED)
            .draw(display)
            .ok();
    }
}

fn draw_slider<D>(
    display: &mut D,
    param: Parameter,
    value: i32,
    selected: bool,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let y = row_top(param);

    if selected {
        Rectangle::new(Point::new(4, y - 12), Size::new(SIDEBAR_WIDTH - 8, (SLIDER_ROW_HEIGHT - 4) as u32))
            .into_styled(SELECTED_FILL)
            .draw(display)
            .ok();
        Text::with_text_style(">", Point::new(6, y), TEXT_STYLE, LEFT_ALIGNED)
            .draw(display)
            .ok();
    }

    Text::with_text_style(param.label(), Point::new(TRACK_LEFT, y), TEXT_STYLE, LEFT_ALIGNED)
        .draw(display)
        .ok();

    let value_text = param.format_value(value);
    Text::with_text_style(&value_text, Point::new(TRACK_LEFT, y + VALUE_OFFSET), VALUE_STYLE, LEFT_ALIGNED)
        .draw(display)
        .ok();

    let track_y = y + TRACK_OFFSET;
    let knob = knob_x(param, value);
    Line::new(Point::new(TRACK_LEFT, track_y), Point::new(TRACK_RIGHT, track_y))
        .into_styled(TRACK_STYLE)
        .draw(display)
        .ok();
    Line::new(Point::new(TRACK_LEFT, track_y), Point::new(knob, track_y))
        .into_styled(FILL_STYLE)
        .draw(display)
        .ok();
    Circle::with_center(Point::new(knob, track_y), KNOB_DIAMETER)
        .into_styled(KNOB_STYLE)
        .draw(display)
        .ok();

    let (min, max) = param.range();
    let range_y = y + RANGE_OFFSET;
    Text::with_text_style(&int_label(min), Point::new(TRACK_LEFT, range_y), MUTED_STYLE, LEFT_ALIGNED)
        .draw(display)
        .ok();
    Text::with_text_style(&int_label(max), Point::new(TRACK_RIGHT, range_y), MUTED_STYLE, RIGHT_ALIGNED)
        .draw(display)
        .ok();
}

fn int_label(value: i32) -> String<8> {
    let mut s: String<8> = String::new();
    let _ = write!(s, "{value}");
    s
}

// =============================================================================
// Unit Tests
// =============================================================================
