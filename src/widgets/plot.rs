//! Plot drawing: turns a composed [`Chart`] into pixels.
//!
//! Everything data-driven (fill, mask, grid, diagonals, threshold lines) is
//! drawn through a target clipped to the plot rectangle, so lines that run
//! past the axis limits (the `serving + hysteresis` diagonal ends above
//! -75) stop at the frame. Labels, ticks and titles are drawn unclipped.
//!
//! # Region Fill
//!
//! Each fill run spans the pixel columns between its first and last sample.
//! Per column the serving power is recovered with [`PlotArea::px_to_x`] and
//! the column is filled from the top of the plot down to, but not
//! including, the row of `serving + hysteresis` (raised to A5-2 in
//! [`RegionMode::Exact`]).

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use handover_common::chart::{
    Chart,
    LabelPlacement,
    Orientation,
    Stroke,
    TITLE,
    ThresholdLine,
    X_AXIS_TITLE,
    Y_AXIS_TITLE,
};
use handover_common::colors::{BLACK, FRAME_GRAY, GRID_GRAY, WHITE};
use handover_common::plot::PlotArea;
use handover_common::region::{RegionMode, SERVING_END_DBM};
use heapless::String;

use super::primitives::{draw_column, draw_line};
use crate::styles::{BOTTOM_LEFT, CENTERED, LEFT_ALIGNED, RIGHT_ALIGNED, TEXT_STYLE, TITLE_STYLE};

/// Length of the tick marks outside the frame.
const TICK_LENGTH: i32 = 4;

/// Gap between the frame and the X tick labels' baseline.
const X_TICK_LABEL_OFFSET: i32 = 15;

/// Gap between the frame and the X axis title's baseline.
const X_TITLE_OFFSET: i32 = 32;

const FRAME_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(BLACK, 1);
const WHITE_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);

/// Draw the full plot for `chart` inside `area`.
pub fn draw_plot<D>(
    display: &mut D,
    area: &PlotArea,
    chart: &Chart,
) where
    D: DrawTarget<Color = Rgb565>,
{
    area.rect.into_styled(WHITE_FILL).draw(display).ok();

    {
        let mut clipped = display.clipped(&area.rect);
        draw_region(&mut clipped, area, chart);
        draw_mask(&mut clipped, area, chart);
        draw_grid(&mut clipped, area);

        for segment in &chart.reference_lines {
            let start = area.to_screen(segment.start.0, segment.start.1);
            let end = area.to_screen(segment.end.0, segment.end.1);
            draw_line(&mut clipped, start, end, segment.color, segment.stroke);
        }

        for line in chart.threshold_lines.iter().filter(|l| l.is_visible(&chart.bounds)) {
            draw_threshold_line(&mut clipped, area, line);
        }
    }

    for line in chart.threshold_lines.iter().filter(|l| l.label_visible(&chart.bounds)) {
        draw_threshold_label(display, area, line);
    }

    area.rect.into_styled(FRAME_STYLE).draw(display).ok();
    draw_ticks(display, area);
    draw_titles(display, area);
}

fn draw_region<D>(
    display: &mut D,
    area: &PlotArea,
    chart: &Chart,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let region = &chart.region;
    let top = area.y_to_px(SERVING_END_DBM);

    for run in region.runs(chart.mode) {
        let (Some(first), Some(last)) = (region.serving().get(run.start), region.serving().get(run.end - 1)) else {
            continue;
        };

        for px in area.x_to_px(first)..=area.x_to_px(last) {
            let mut lower = region.lower_edge(area.px_to_x(px));
            if chart.mode == RegionMode::Exact {
                lower = lower.max(region.a5_2());
            }
            if lower >= SERVING_END_DBM {
                continue;
            }
            draw_column(display, px, top, area.y_to_px(lower) - 1, chart.fill_color);
        }
    }
}

fn draw_mask<D>(
    display: &mut D,
    area: &PlotArea,
    chart: &Chart,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let Some(mask) = chart.mask else {
        return;
    };
    if mask.upper < chart.bounds.y_min {
        return;
    }

    let top = area.y_to_px(mask.upper.min(chart.bounds.y_max));
    let bottom = area.y_to_px(mask.lower.max(chart.bounds.y_min));
    let height = (bottom - top + 1).max(0) as u32;
    Rectangle::new(Point::new(area.rect.top_left.x, top), Size::new(area.rect.size.width, height))
        .into_styled(WHITE_FILL)
        .draw(display)
        .ok();
}

fn draw_grid<D>(
    display: &mut D,
    area: &PlotArea,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let (top, bottom) = (area.top(), area.bottom_row());
    let (left, right) = (*area.columns().start(), *area.columns().end());

    for x in area.bounds.x_ticks() {
        let px = area.x_to_px(x);
        draw_line(display, Point::new(px, top), Point::new(px, bottom), GRID_GRAY, Stroke::Solid);
    }
    for y in area.bounds.y_ticks() {
        let py = area.y_to_px(y);
        draw_line(display, Point::new(left, py), Point::new(right, py), GRID_GRAY, Stroke::Solid);
    }
}

fn draw_threshold_line<D>(
    display: &mut D,
    area: &PlotArea,
    line: &ThresholdLine,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let (start, end) = match line.orientation {
        Orientation::Vertical => {
            let px = area.x_to_px(line.value);
            (Point::new(px, area.top()), Point::new(px, area.bottom_row()))
        }
        Orientation::Horizontal => {
            let py = area.y_to_px(line.value);
            (Point::new(*area.columns().start(), py), Point::new(*area.columns().end(), py))
        }
    };
    draw_line(display, start, end, line.color, Stroke::Dashed);
}

fn draw_threshold_label<D>(
    display: &mut D,
    area: &PlotArea,
    line: &ThresholdLine,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let anchor = area.to_screen(line.label.at.0, line.label.at.1);
    let text_style = match line.label.placement {
        LabelPlacement::BaselineLeft => LEFT_ALIGNED,
        LabelPlacement::BottomLeft => BOTTOM_LEFT,
    };
    Text::with_text_style(&line.label.text, anchor, TEXT_STYLE, text_style)
        .draw(display)
        .ok();
}

fn draw_ticks<D>(
    display: &mut D,
    area: &PlotArea,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let tick_style = PrimitiveStyle::with_stroke(FRAME_GRAY, 1);
    let bottom = area.bottom_row();
    let left = *area.columns().start();

    for x in area.bounds.x_ticks() {
        let px = area.x_to_px(x);
        Line::new(Point::new(px, bottom + 1), Point::new(px, bottom + TICK_LENGTH))
            .into_styled(tick_style)
            .draw(display)
            .ok();
        let label = tick_label(x);
        Text::with_text_style(&label, Point::new(px, bottom + X_TICK_LABEL_OFFSET), TEXT_STYLE, CENTERED)
            .draw(display)
            .ok();
    }

    for y in area.bounds.y_ticks() {
        let py = area.y_to_px(y);
        Line::new(Point::new(left - TICK_LENGTH, py), Point::new(left - 1, py))
            .into_styled(tick_style)
            .draw(display)
            .ok();
        let label = tick_label(y);
        Text::with_text_style(&label, Point::new(left - TICK_LENGTH - 3, py + 3), TEXT_STYLE, RIGHT_ALIGNED)
            .draw(display)
            .ok();
    }
}

fn draw_titles<D>(
    display: &mut D,
    area: &PlotArea,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let center_x = area.rect.center().x;

    Text::with_text_style(TITLE, Point::new(center_x, area.top() - 22), TITLE_STYLE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(
        X_AXIS_TITLE,
        Point::new(center_x, area.bottom_row() + X_TITLE_OFFSET),
        TEXT_STYLE,
        CENTERED,
    )
    .draw(display)
    .ok();
    // No rotated text: the Y title sits above the tick labels
    Text::with_text_style(Y_AXIS_TITLE, Point::new(area.rect.top_left.x - 64, area.top() - 6), TEXT_STYLE, LEFT_ALIGNED)
        .draw(display)
        .ok();
}

fn tick_label(value: f32) -> String<8> {
    let mut s: String<8> = String::new();
    let _ = write!(s, "{value:.0}");
    s
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics_simulator::SimulatorDisplay;
    use handover_common::colors::{A5_1_RED, REGION_GREEN};
    use handover_common::{Parameter, ThresholdSet, render};

    use super::*;
    use crate::config::{PLOT_AREA, SCREEN_HEIGHT, SCREEN_WIDTH};

    fn draw(
        thresholds: &ThresholdSet,
        mode: RegionMode,
    ) -> SimulatorDisplay<Rgb565> {
        let mut display = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        display.clear(WHITE).ok();
        draw_plot(&mut display, &PLOT_AREA, &render(thresholds, mode));
        display
    }

    /// Pixel at a data coordinate, nudged half a dB off grid lines.
    fn pixel_at(
        display: &SimulatorDisplay<Rgb565>,
        serving: f32,
        neighbor: f32,
    ) -> Rgb565 {
        display.get_pixel(PLOT_AREA.to_screen(serving, neighbor))
    }

    #[test]
    fn test_region_fill_inside_handover_region() {
        let display = draw(&ThresholdSet::default(), RegionMode::Masked);
        // serving -102.3 < A5-1, neighbor -83.3 > serving + 3 and > A5-2
        assert_eq!(pixel_at(&display, -102.3, -83.3), REGION_GREEN);
    }

    #[test]
    fn test_no_fill_right_of_a5_1() {
        let display = draw(&ThresholdSet::default(), RegionMode::Masked);
        assert_eq!(pixel_at(&display, -86.3, -80.3), WHITE);
    }

    #[test]
    fn test_no_fill_below_hysteresis_line() {
        let display = draw(&ThresholdSet::default(), RegionMode::Masked);
        // serving -93.3: lower edge at -90.3, probe below it
        assert_eq!(pixel_at(&display, -93.3, -91.3), WHITE);
    }

    #[test]
    fn test_mask_hides_fill_below_a5_2() {
        let display = draw(&ThresholdSet::default(), RegionMode::Masked);
        // Fill would cover (-108.3, -101.3) without the mask band
        assert_eq!(pixel_at(&display, -108.3, -101.3), WHITE);
    }

    #[test]
    fn test_exact_mode_matches_masked_mode_inside_plot() {
        let masked = draw(&ThresholdSet::default(), RegionMode::Masked);
        let exact = draw(&ThresholdSet::default(), RegionMode::Exact);
        for (s, n) in [(-108.3, -101.3), (-102.3, -83.3), (-93.3, -91.3), (-100.3, -93.3)] {
            assert_eq!(pixel_at(&masked, s, n), pixel_at(&exact, s, n), "mismatch at ({s}, {n})");
        }
    }

    #[test]
    fn test_a5_1_line_drawn_at_threshold() {
        let display = draw(&ThresholdSet::default(), RegionMode::Masked);
        let px = PLOT_AREA.x_to_px(-90.0);
        let column_has_red = PLOT_AREA
            .rect
            .rows()
            .any(|py| display.get_pixel(Point::new(px, py)) == A5_1_RED);
        assert!(column_has_red, "A5-1 dashed line missing");
    }

    #[test]
    fn test_empty_region_when_a5_1_at_minimum() {
        let mut set = ThresholdSet::default();
        set.set(Parameter::A5Serving, -110);
        let display = draw(&set, RegionMode::Masked);
        assert_eq!(pixel_at(&display, -102.3, -83.3), WHITE);
    }

    #[test]
    fn test_frame_drawn() {
        let display = draw(&ThresholdSet::default(), RegionMode::Masked);
        assert_eq!(display.get_pixel(PLOT_AREA.rect.top_left), BLACK);
    }

    #[test]
    fn test_tick_label_format() {
        assert_eq!(tick_label(-110.0).as_str(), "-110");
        assert_eq!(tick_label(-75.0).as_str(), "-75");
    }
}
