//! Pre-computed static text styles.
//!
//! `MonoTextStyle` and `TextStyle` constructors are const fn in
//! embedded-graphics 0.8, so every style used by the widgets is built at
//! compile time. Widgets that need a per-call color build
//! `MonoTextStyle::new(LABEL_FONT, color)` instead.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_6X10, FONT_7X13_BOLD, FONT_10X20},
    },
    pixelcolor::Rgb565,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use handover_common::colors::{ACCENT, TEXT_DARK, TEXT_MUTED, WHITE};
use profont::PROFONT_18_POINT;

// =============================================================================
// Text Alignment Styles
// =============================================================================

pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

/// Left aligned with the bottom of the glyph box on the anchor point.
pub const BOTTOM_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Bottom)
    .build();

// =============================================================================
// Font References
// =============================================================================

/// Small label font (6x10 pixels). Exposed for creating dynamic-color styles.
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// Character width of [`LABEL_FONT`], for layout math.
pub const LABEL_CHAR_WIDTH: u32 = 6;

/// Line height of [`LABEL_FONT`].
pub const LABEL_LINE_HEIGHT: u32 = 10;

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Body text on light backgrounds.
pub const TEXT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, TEXT_DARK);

/// Secondary text (min/max labels, key hints).
pub const MUTED_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, TEXT_MUTED);

/// Slider value text.
pub const VALUE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, ACCENT);

/// Section headings ("Threshold Parameters", "How to use ...").
pub const HEADING_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_7X13_BOLD, TEXT_DARK);

/// Chart title above the plot.
pub const TITLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, TEXT_DARK);

/// Header bar title (`ProFont` 18pt, white on red).
pub const HEADER_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, WHITE);

/// Small white text on the header bar.
pub const HEADER_LABEL_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Popup message text.
pub const POPUP_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);
