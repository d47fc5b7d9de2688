//! Header bar rendering.
//!
//! A full-width red bar with the application title on the left and the
//! active region mode on the right. Geometry is fixed, so every position is
//! a `const`.

use core::fmt::Write;

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::Text,
};
use handover_common::RegionMode;
use handover_common::colors::RED;
use heapless::String;

use crate::{
    config::{HEADER_HEIGHT, SCREEN_WIDTH},
    styles::{HEADER_LABEL_STYLE, HEADER_STYLE, LEFT_ALIGNED, RIGHT_ALIGNED},
};

/// Application title shown in the header bar.
pub const APP_TITLE: &str = "LTE Handover Region Visualization";

/// Baseline of the title text.
const HEADER_TITLE_POS: Point = Point::new(12, 21);

/// Right-aligned mode label, 10px from the right edge.
const HEADER_MODE_POS: Point = Point::new((SCREEN_WIDTH - 10) as i32, 19);

const HEADER_RECT: Rectangle = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, HEADER_HEIGHT));

const HEADER_FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(RED);

/// Draw the header bar.
pub fn draw_header<D>(
    display: &mut D,
    mode: RegionMode,
) where
    D: DrawTarget<Color = Rgb565>,
{
    HEADER_RECT.into_styled(HEADER_FILL_STYLE).draw(display).ok();

    Text::with_text_style(APP_TITLE, HEADER_TITLE_POS, HEADER_STYLE, LEFT_ALIGNED)
        .draw(display)
        .ok();

    let mut mode_str: String<24> = String::new();
    let _ = write!(mode_str, "REGION: {}", mode.label());
    Text::with_text_style(&mode_str, HEADER_MODE_POS, HEADER_LABEL_STYLE, RIGHT_ALIGNED)
        .draw(display)
        .ok();
}

#[cfg(test)]
mod tests {
    use embedded_graphics_simulator::SimulatorDisplay;

    use super::*;
    use crate::config::SCREEN_HEIGHT;

    #[test]
    fn test_header_fills_top_bar() {
        let mut display = SimulatorDisplay::<Rgb565>::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        draw_header(&mut display, RegionMode::Masked);

        // Bottom row of the bar, well clear of any text
        let y = HEADER_HEIGHT as i32 - 1;
        assert_eq!(display.get_pixel(Point::new(2, y)), RED);
        assert_eq!(display.get_pixel(Point::new((SCREEN_WIDTH - 1) as i32, y)), RED);
        // Nothing below the bar
        assert_eq!(display.get_pixel(Point::new(2, y + 1)), Rgb565::BLACK);
    }
}
