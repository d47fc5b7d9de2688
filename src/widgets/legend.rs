//! Legend box in the lower-right corner of the plot.
//!
//! Entries are stacked top to bottom, each with a 20px swatch (filled
//! rectangle for the region, a short line for everything else) and its
//! possibly multi-line text.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use handover_common::chart::{LegendEntry, Swatch};
use handover_common::colors::{DARK_GREEN, FRAME_GRAY, WHITE};
use handover_common::plot::PlotArea;

use super::primitives::{draw_framed_box, draw_line};
use crate::styles::{LABEL_CHAR_WIDTH, LABEL_LINE_HEIGHT, TEXT_STYLE};

/// Inner padding of the legend box.
const PADDING: i32 = 4;

/// Distance between the legend box and the plot frame.
const MARGIN: i32 = 4;

const SWATCH_WIDTH: i32 = 20;
const SWATCH_HEIGHT: u32 = 8;

/// Gap between swatch and text.
const SWATCH_GAP: i32 = 4;

/// Extra space between entries.
const ENTRY_GAP: i32 = 2;

/// Height of one entry's text block.
fn entry_height(entry: &LegendEntry) -> i32 { (entry.line_count() as u32 * LABEL_LINE_HEIGHT) as i32 }

/// Bounding box of the legend, anchored to the lower-right plot corner.
pub fn legend_rect(
    area: &PlotArea,
    entries: &[LegendEntry],
) -> Rectangle {
    let text_width = entries.iter().map(LegendEntry::max_line_len).max().unwrap_or(0) as i32 * LABEL_CHAR_WIDTH as i32;
    let width = 2 * PADDING + SWATCH_WIDTH + SWATCH_GAP + text_width;
    let text_height: i32 = entries.iter().map(entry_height).sum();
    let gaps = entries.len().saturating_sub(1) as i32 * ENTRY_GAP;
    let height = 2 * PADDING + text_height + gaps;

    let right = *area.columns().end() - MARGIN;
    let bottom = area.bottom_row() - MARGIN;
    Rectangle::new(
        Point::new(right - width + 1, bottom - height + 1),
        Size::new(width as u32, height as u32),
    )
}

/// Draw the legend box with all `entries`.
pub fn draw_legend<D>(
    display: &mut D,
    area: &PlotArea,
    entries: &[LegendEntry],
) where
    D: DrawTarget<Color = Rgb565>,
{
    if entries.is_empty() {
        return;
    }

    let rect = legend_rect(area, entries);
    draw_framed_box(display, rect, WHITE, FRAME_GRAY);

    let swatch_x = rect.top_left.x + PADDING;
    let text_x = swatch_x + SWATCH_WIDTH + SWATCH_GAP;
    let mut y = rect.top_left.y + PADDING;

    for entry in entries {
        // Swatch sits on the first text line
        let swatch_center = y + LABEL_LINE_HEIGHT as i32 / 2;
        draw_swatch(display, Point::new(swatch_x, swatch_center), entry.swatch);

        Text::with_baseline(&entry.text, Point::new(text_x, y), TEXT_STYLE, Baseline::Top)
            .draw(display)
            .ok();

        y += entry_height(entry) + ENTRY_GAP;
    }
}

fn draw_swatch<D>(
    display: &mut D,
    left_center: Point,
    swatch: Swatch,
) where
    D: DrawTarget<Color = Rgb565>,
{
    match swatch {
        Swatch::Fill(color) => {
            let top_left = left_center - Point::new(0, SWATCH_HEIGHT as i32 / 2);
            let rect = Rectangle::new(top_left, Size::new(SWATCH_WIDTH as u32, SWATCH_HEIGHT));
            rect.into_styled(PrimitiveStyle::with_fill(color)).draw(display).ok();
            rect.into_styled(PrimitiveStyle::with_stroke(DARK_GREEN, 1)).draw(display).ok();
        }
        Swatch::Line(color, stroke) => {
            let end = left_center + Point::new(SWATCH_WIDTH - 1, 0);
            draw_line(display, left_center, end, color, stroke);
        }
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics_simulator::SimulatorDisplay;
    use handover_common::colors::REGION_GREEN;
    use handover_common::{RegionMode, ThresholdSet, render};

    use super::*;
    use crate::config::{PLOT_AREA, SCREEN_HEIGHT, SCREEN_WIDTH};

    #[test]
    fn test_legend_inside_plot() {
        let chart = render(&ThresholdSet::default(), RegionMode::Masked);
        let rect = legend_rect(&PLOT_AREA, &chart.legend);
        let bottom_right = rect.bottom_right().expect("legend should not be empty");

        assert!(PLOT_AREA.rect.contains(rect.top_left), "Legend top-left {:?} outside plot", rect.top_left);
        assert!(PLOT_AREA.rect.contains(bottom_right), "Legend bottom-right {bottom_right:?} outside plot");
    }

    #[test]
    fn test_legend_clear_of_a5_1_label() {
        // Default A5-1 label sits near the top of the plot
        let chart = render(&ThresholdSet::default(), RegionMode::Masked);
        let rect = legend_rect(&PLOT_AREA, &chart.legend);
        assert!(rect.top_left.y > PLOT_AREA.y_to_px(-80.0));
    }

    #[test]
    fn test_region_swatch_drawn() {
        let chart = render(&ThresholdSet::default(), RegionMode::Masked);
        let mut display = SimulatorDisplay::<Rgb565>::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        draw_legend(&mut display, &PLOT_AREA, &chart.legend);

        let rect = legend_rect(&PLOT_AREA, &chart.legend);
        // Interior of the first swatch
        let probe = rect.top_left + Point::new(PADDING + SWATCH_WIDTH / 2, PADDING + LABEL_LINE_HEIGHT as i32 / 2);
        assert_eq!(display.get_pixel(probe), REGION_GREEN);
    }

    #[test]
    fn test_empty_legend_draws_nothing() {
        let mut display = SimulatorDisplay::<Rgb565>::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        draw_legend(&mut display, &PLOT_AREA, &[]);
        assert_eq!(display.get_pixel(PLOT_AREA.rect.center()), Rgb565::BLACK);
    }
}
