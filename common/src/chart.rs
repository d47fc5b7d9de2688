//! Chart composition: everything one render draws, as plain values.
//!
//! [`render`] is a pure function of the thresholds and region mode. It does
//! not touch a display; the binary's widgets turn a [`Chart`] into pixels.
//!
//! # Draw Order
//!
//! 1. Region fill (per [`HandoverRegion::runs`])
//! 2. Mask band below A5-2 ([`RegionMode::Masked`] only)
//! 3. Grid
//! 4. Reference diagonals
//! 5. Threshold lines and their labels
//! 6. Legend

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use heapless::{String, Vec};

use crate::colors::{A1_GREEN, A2_YELLOW, A5_1_RED, A5_2_ORANGE, BLACK, REGION_GREEN};
use crate::plot::PlotBounds;
use crate::region::{HandoverRegion, RegionMode, SAMPLE_STEP_DB, SERVING_END_DBM, SERVING_START_DBM};
use crate::thresholds::{Parameter, ThresholdSet};

/// Chart title drawn above the plot.
pub const TITLE: &str = "LTE Handover Regions";

pub const X_AXIS_TITLE: &str = "Serving Cell Power (dBm)";

pub const Y_AXIS_TITLE: &str = "Neighbor Cell Power (dBm)";

/// Vertical threshold labels sit 2 dB below the top of the axis.
const VERTICAL_LABEL_Y: f32 = -77.0;

/// Horizontal threshold label starts 2 dB right of the left axis.
const HORIZONTAL_LABEL_X: f32 = -108.0;

/// Gap between a threshold line and its label (dB).
const LABEL_OFFSET: f32 = 0.5;

pub const LABEL_LEN: usize = 32;
pub const LEGEND_TEXT_LEN: usize = 128;
pub const LEGEND_ENTRIES: usize = 7;

// =============================================================================
// Chart Elements
// =============================================================================

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Stroke {
    Solid,
    Dashed,
}

/// Straight line between two points in data coordinates (dBm).
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Segment {
    pub start: (f32, f32),
    pub end: (f32, f32),
    pub color: Rgb565,
    pub stroke: Stroke,
}

/// How a label's anchor relates to its text.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LabelPlacement {
    /// Left aligned; first line's baseline on the anchor, further lines below.
    BaselineLeft,
    /// Left aligned; bottom of the text on the anchor.
    BottomLeft,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Label {
    pub text: String<LABEL_LEN>,
    /// Anchor in data coordinates.
    pub at: (f32, f32),
    pub placement: LabelPlacement,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Orientation {
    /// `x = value` across the whole Y axis.
    Vertical,
    /// `y = value` across the whole X axis.
    Horizontal,
}

/// Full-axis dashed line marking one threshold.
#[derive(Clone, PartialEq, Debug)]
pub struct ThresholdLine {
    pub parameter: Parameter,
    pub orientation: Orientation,
    pub value: f32,
    pub color: Rgb565,
    pub label: Label,
}

impl ThresholdLine {
    /// Line lies inside the visible window (sliders reach -60, the axis stops at -75).
    pub fn is_visible(
        &self,
        bounds: &PlotBounds,
    ) -> bool {
        match self.orientation {
            Orientation::Vertical => bounds.contains_x(self.value),
            Orientation::Horizontal => bounds.contains_y(self.value),
        }
    }

    /// Label anchor lies inside the visible window.
    pub fn label_visible(
        &self,
        bounds: &PlotBounds,
    ) -> bool {
        let (x, y) = self.label.at;
        bounds.contains_x(x) && bounds.contains_y(y)
    }
}

/// Opaque band painted over the fill from `lower` up to `upper` on the neighbor axis.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct MaskBand {
    pub lower: f32,
    pub upper: f32,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Swatch {
    Fill(Rgb565),
    Line(Rgb565, Stroke),
}

#[derive(Clone, PartialEq, Debug)]
pub struct LegendEntry {
    pub text: String<LEGEND_TEXT_LEN>,
    pub swatch: Swatch,
}

impl LegendEntry {
    /// Number of text lines in this entry.
    pub fn line_count(&self) -> usize { self.text.lines().count().max(1) }

    /// Longest line in characters.
    pub fn max_line_len(&self) -> usize { self.text.lines().map(|l| l.chars().count()).max().unwrap_or(0) }
}

// =============================================================================
// Chart
// =============================================================================

/// One fully composed frame of the handover chart.
#[derive(Clone, PartialEq, Debug)]
pub struct Chart {
    pub thresholds: ThresholdSet,
    pub mode: RegionMode,
    pub region: HandoverRegion,
    pub bounds: PlotBounds,
    pub fill_color: Rgb565,
    pub mask: Option<MaskBand>,
    /// `neighbor = serving` and `neighbor = serving + hysteresis`.
    pub reference_lines: [Segment; 2],
    /// A1, A2, A5-1 (vertical) and A5-2 (horizontal).
    pub threshold_lines: [ThresholdLine; 4],
    pub legend: Vec<LegendEntry, LEGEND_ENTRIES>,
}

/// Compose the chart for `thresholds`.
pub fn render(
    thresholds: &ThresholdSet,
    mode: RegionMode,
) -> Chart {
    let region = HandoverRegion::compute(thresholds);
    let bounds = PlotBounds::HANDOVER;
    let h = thresholds.hysteresis as f32;

    let mask = match mode {
        RegionMode::Masked => Some(MaskBand {
            lower: bounds.y_min,
            upper: thresholds.a5_2 as f32,
        }),
        RegionMode::Exact => None,
    };

    let last_sample = SERVING_END_DBM - SAMPLE_STEP_DB;
    let reference_lines = [
        Segment {
            start: (SERVING_START_DBM, SERVING_START_DBM),
            end: (last_sample, last_sample),
            color: BLACK,
            stroke: Stroke::Dashed,
        },
        Segment {
            start: (SERVING_START_DBM, SERVING_START_DBM + h),
            end: (last_sample, last_sample + h),
            color: BLACK,
            stroke: Stroke::Dashed,
        },
    ];

    let threshold_lines = [
        vertical_line(Parameter::A1, thresholds.a1, A1_GREEN),
        vertical_line(Parameter::A2, thresholds.a2, A2_YELLOW),
        vertical_line(Parameter::A5Serving, thresholds.a5_1, A5_1_RED),
        horizontal_line(Parameter::A5Neighbor, thresholds.a5_2, A5_2_ORANGE),
    ];

    Chart {
        thresholds: *thresholds,
        mode,
        region,
        bounds,
        fill_color: REGION_GREEN,
        mask,
        reference_lines,
        threshold_lines,
        legend: legend(thresholds),
    }
}

fn vertical_line(
    parameter: Parameter,
    value: i32,
    color: Rgb565,
) -> ThresholdLine {
    let mut text: String<LABEL_LEN> = String::new();
    let _ = write!(text, "{} threshold\n({value} dBm)", parameter.short_name());
    ThresholdLine {
        parameter,
        orientation: Orientation::Vertical,
        value: value as f32,
        color,
        label: Label {
            text,
            at: (value as f32 + LABEL_OFFSET, VERTICAL_LABEL_Y),
            placement: LabelPlacement::BaselineLeft,
        },
    }
}

fn horizontal_line(
    parameter: Parameter,
    value: i32,
    color: Rgb565,
) -> ThresholdLine {
    let mut text: String<LABEL_LEN> = String::new();
    let _ = write!(text, "{} threshold ({value} dBm)", parameter.short_name());
    ThresholdLine {
        parameter,
        orientation: Orientation::Horizontal,
        value: value as f32,
        color,
        label: Label {
            text,
            at: (HORIZONTAL_LABEL_X, value as f32 + LABEL_OFFSET),
            placement: LabelPlacement::BottomLeft,
        },
    }
}

fn legend(thresholds: &ThresholdSet) -> Vec<LegendEntry, LEGEND_ENTRIES> {
    let h = thresholds.hysteresis;
    let mut entries = Vec::new();

    let mut region_text: String<LEGEND_TEXT_LEN> = String::new();
    let _ = write!(
        region_text,
        "Handover Region\n(Neighbor > Serving + {h}dB\nAND Serving < A5-1 ({} dBm)\nAND Neighbor > A5-2 ({} dBm))",
        thresholds.a5_1, thresholds.a5_2
    );
    let _ = entries.push(LegendEntry {
        text: region_text,
        swatch: Swatch::Fill(REGION_GREEN),
    });

    let mut offset_text: String<LEGEND_TEXT_LEN> = String::new();
    let _ = write!(offset_text, "Neighbor = Serving + {h}dB");
    let _ = entries.push(LegendEntry {
        text: offset_text,
        swatch: Swatch::Line(BLACK, Stroke::Dashed),
    });

    let _ = entries.push(static_entry("Neighbor = Serving", Swatch::Line(BLACK, Stroke::Dashed)));
    let _ = entries.push(static_entry("A1 threshold", Swatch::Line(A1_GREEN, Stroke::Dashed)));
    let _ = entries.push(static_entry("A2 threshold", Swatch::Line(A2_YELLOW, Stroke::Dashed)));
    let _ = entries.push(static_entry("A5-1 threshold", Swatch::Line(A5_1_RED, Stroke::Dashed)));
    let _ = entries.push(static_entry("A5-2 threshold", Swatch::Line(A5_2_ORANGE, Stroke::Dashed)));

    entries
}

fn static_entry(
    text: &str,
    swatch: Swatch,
) -> LegendEntry {
    let mut s: String<LEGEND_TEXT_LEN> = String::new();
    let _ = s.push_str(text);
    LegendEntry { text: s, swatch }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_chart_lines() {
        let chart = render(&ThresholdSet::default(), RegionMode::Masked);

        let [diag, offset] = chart.reference_lines;
        assert_eq!(diag.start, (-110.0, -110.0));
        assert_eq!(diag.end, (-75.5, -75.5));
        assert_eq!(offset.start, (-110.0, -107.0));
        assert_eq!(offset.end, (-75.5, -72.5));

        let values: heapless::Vec<f32, 4> = chart.threshold_lines.iter().map(|l| l.value).collect();
        assert_eq!(values.as_slice(), &[-70.0, -75.0, -90.0, -95.0]);
        assert_eq!(chart.threshold_lines[3].orientation, Orientation::Horizontal);
    }

    #[test]
    fn test_zero_hysteresis_reference_lines_coincide() {
        let mut set = ThresholdSet::default();
        set.set(Parameter::Hysteresis, 0);
        let chart = render(&set, RegionMode::Masked);
        assert_eq!(chart.reference_lines[0].start, chart.reference_lines[1].start);
        assert_eq!(chart.reference_lines[0].end, chart.reference_lines[1].end);
    }

    #[test]
    fn test_threshold_labels() {
        let chart = render(&ThresholdSet::default(), RegionMode::Masked);

        let a1 = &chart.threshold_lines[0];
        assert_eq!(a1.label.text.as_str(), "A1 threshold\n(-70 dBm)");
        assert_eq!(a1.label.at, (-69.5, -77.0));

        let a5_2 = &chart.threshold_lines[3];
        assert_eq!(a5_2.label.text.as_str(), "A5-2 threshold (-95 dBm)");
        assert_eq!(a5_2.label.at, (-108.0, -94.5));
        assert_eq!(a5_2.label.placement, LabelPlacement::BottomLeft);
    }

    #[test]
    fn test_lines_outside_axis_hidden() {
        let chart = render(&ThresholdSet::default(), RegionMode::Masked);
        let bounds = chart.bounds;
        // A1 = -70 lies beyond the -75 axis limit
        assert!(!chart.threshold_lines[0].is_visible(&bounds));
        // A2 = -75 is on the edge, its label at -74.5 is not
        assert!(chart.threshold_lines[1].is_visible(&bounds));
        assert!(!chart.threshold_lines[1].label_visible(&bounds));
        assert!(chart.threshold_lines[2].is_visible(&bounds));
        assert!(chart.threshold_lines[2].label_visible(&bounds));
    }

    #[test]
    fn test_mask_only_in_masked_mode() {
        let masked = render(&ThresholdSet::default(), RegionMode::Masked);
        assert_eq!(
            masked.mask,
            Some(MaskBand {
                lower: -110.0,
                upper: -95.0
            })
        );

        let exact = render(&ThresholdSet::default(), RegionMode::Exact);
        assert!(exact.mask.is_none());
        assert_eq!(exact.region, masked.region, "mode must not change the computed region");
    }

    #[test]
    fn test_legend_interpolates_live_values() {
        let set = ThresholdSet::new(-70, -75, -88, -101, 6);
        let chart = render(&set, RegionMode::Masked);

        assert_eq!(chart.legend.len(), LEGEND_ENTRIES);
        let region = &chart.legend[0];
        assert_eq!(region.line_count(), 4);
        assert!(region.text.contains("Serving + 6dB"));
        assert!(region.text.contains("A5-1 (-88 dBm)"));
        assert!(region.text.contains("A5-2 (-101 dBm)"));
        assert_eq!(region.swatch, Swatch::Fill(REGION_GREEN));
        assert_eq!(chart.legend[1].text.as_str(), "Neighbor = Serving + 6dB");
    }

    #[test]
    fn test_legend_text_fits_worst_case() {
        let set = ThresholdSet::new(-110, -110, -110, -110, 10);
        let chart = render(&set, RegionMode::Masked);
        let region = &chart.legend[0];
        assert!(region.text.ends_with("(-110 dBm))"), "legend text was truncated: {}", region.text);
        assert_eq!(region.max_line_len(), "AND Neighbor > A5-2 (-110 dBm))".len());
    }

    #[test]
    fn test_render_is_deterministic() {
        let set = ThresholdSet::new(-65, -99, -83, -91, 9);
        assert_eq!(render(&set, RegionMode::Exact), render(&set, RegionMode::Exact));
    }
}
