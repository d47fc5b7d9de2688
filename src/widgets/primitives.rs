//! Low-level drawing primitives shared across widgets.
//!
//! embedded-graphics has no dashed stroke, so dashed lines walk the
//! Bresenham points of a [`Line`] and keep `DASH_ON` of every
//! `DASH_ON + DASH_OFF` pixels. The pattern restarts at each line's start
//! point.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PointsIter, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle};
use handover_common::chart::Stroke;

/// Pixels drawn per dash.
pub const DASH_ON: usize = 6;

/// Pixels skipped between dashes.
pub const DASH_OFF: usize = 4;

/// Draw a 1px dashed line.
pub fn draw_dashed_line<D>(
    display: &mut D,
    start: Point,
    end: Point,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let pixels = Line::new(start, end)
        .points()
        .enumerate()
        .filter(|(i, _)| i % (DASH_ON + DASH_OFF) < DASH_ON)
        .map(|(_, p)| Pixel(p, color));
    display.draw_iter(pixels).ok();
}

/// Draw a 1px line with the given stroke pattern.
pub fn draw_line<D>(
    display: &mut D,
    start: Point,
    end: Point,
    color: Rgb565,
    stroke: Stroke,
) where
    D: DrawTarget<Color = Rgb565>,
{
    match stroke {
        Stroke::Solid => {
            Line::new(start, end)
                .into_styled(PrimitiveStyle::with_stroke(color, 1))
                .draw(display)
                .ok();
        }
        Stroke::Dashed => draw_dashed_line(display, start, end, color),
    }
}

/// Fill one pixel column from row `top` to row `bottom` (inclusive).
///
/// Does nothing if `bottom < top`.
pub fn draw_column<D>(
    display: &mut D,
    x: i32,
    top: i32,
    bottom: i32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if bottom < top {
        return;
    }
    Rectangle::new(Point::new(x, top), Size::new(1, (bottom - top + 1) as u32))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Draw a filled rectangle with a 1px border.
pub fn draw_framed_box<D>(
    display: &mut D,
    rect: Rectangle,
    fill: Rgb565,
    border: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyleBuilder::new()
        .fill_color(fill)
        .stroke_color(border)
        .stroke_width(1)
        .build();
    rect.into_styled(style).draw(display).ok();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics_simulator::SimulatorDisplay;
    use handover_common::colors::{BLACK, RED, WHITE};

    use super::*;

    fn blank() -> SimulatorDisplay<Rgb565> {
        let mut display = SimulatorDisplay::new(Size::new(40, 20));
        display.clear(WHITE).ok();
        display
    }

    #[test]
    fn test_dashed_line_pattern() {
        let mut display = blank();
        draw_dashed_line(&mut display, Point::new(0, 5), Point::new(29, 5), BLACK);

        for x in 0..30 {
            let expected = if (x as usize) % (DASH_ON + DASH_OFF) < DASH_ON { BLACK } else { WHITE };
            assert_eq!(display.get_pixel(Point::new(x, 5)), expected, "pixel {x} has wrong dash state");
        }
    }

    #[test]
    fn test_solid_line_has_no_gaps() {
        let mut display = blank();
        draw_line(&mut display, Point::new(0, 2), Point::new(39, 2), RED, Stroke::Solid);
        assert!((0..40).all(|x| display.get_pixel(Point::new(x, 2)) == RED));
    }

    #[test]
    fn test_column_inclusive_bounds() {
        let mut display = blank();
        draw_column(&mut display, 3, 4, 8, RED);
        assert_eq!(display.get_pixel(Point::new(3, 3)), WHITE);
        assert_eq!(display.get_pixel(Point::new(3, 4)), RED);
        assert_eq!(display.get_pixel(Point::new(3, 8)), RED);
        assert_eq!(display.get_pixel(Point::new(3, 9)), WHITE);
    }

    #[test]
    fn test_column_inverted_range_draws_nothing() {
        let mut display = blank();
        draw_column(&mut display, 3, 8, 4, RED);
        assert!((0..20).all(|y| display.get_pixel(Point::new(3, y)) == WHITE));
    }

    #[test]
    fn test_framed_box_border_and_fill() {
        let mut display = blank();
        draw_framed_box(&mut display, Rectangle::new(Point::new(2, 2), Size::new(10, 6)), WHITE, BLACK);
        assert_eq!(display.get_pixel(Point::new(2, 2)), BLACK);
        assert_eq!(display.get_pixel(Point::new(11, 7)), BLACK);
        assert_eq!(display.get_pixel(Point::new(5, 4)), WHITE);
    }
}
