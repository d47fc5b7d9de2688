//! Non-modal popup overlays for status messages.
//!
//! Popups appear centered over the plot with a white border and red
//! background. Only one popup displays at a time (most recent wins). Key
//! input is still processed while a popup is visible.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use handover_common::colors::{RED, WHITE};

use crate::config::{PLOT_CENTER_X, PLOT_SIZE, PLOT_TOP};
use crate::render::Popup;
use crate::styles::{CENTERED, POPUP_STYLE};

/// Popup height, fits one line of the 10x20 font.
const POPUP_HEIGHT: u32 = 44;

/// Horizontal padding on each side of the message.
const POPUP_PADDING: u32 = 20;

/// Width of one popup glyph.
const POPUP_CHAR_WIDTH: u32 = 10;

/// Border thickness around the red background.
const POPUP_BORDER: u32 = 3;

/// Vertical center of the popup (middle of the plot).
const POPUP_CENTER_Y: i32 = PLOT_TOP + (PLOT_SIZE / 2) as i32;

/// Baseline of the message text.
const POPUP_TEXT_POS: Point = Point::new(PLOT_CENTER_X, POPUP_CENTER_Y + 6);

const WHITE_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);
const RED_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(RED);

/// Background rectangle for a popup showing `message`.
pub fn popup_rect(message: &str) -> Rectangle {
    let width = message.len() as u32 * POPUP_CHAR_WIDTH + 2 * POPUP_PADDING;
    Rectangle::with_center(Point::new(PLOT_CENTER_X, POPUP_CENTER_Y), Size::new(width, POPUP_HEIGHT))
}

/// Draw `popup` over whatever is on screen.
pub fn draw_popup<D>(
    display: &mut D,
    popup: &Popup,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let message = popup.message();
    let background = popup_rect(message);

    // White border (drawn as larger rectangle behind the main popup)
    background
        .offset(POPUP_BORDER as i32)
        .into_styled(WHITE_FILL)
        .draw(display)
        .ok();

    background.into_styled(RED_FILL).draw(display).ok();

    Text::with_text_style(message, POPUP_TEXT_POS, POPUP_STYLE, CENTERED)
        .draw(display)
        .ok();
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use embedded_graphics_simulator::SimulatorDisplay;

    use super::*;
    use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

    #[test]
    fn test_popup_rect_grows_with_message() {
        let short = popup_rect("SAVED");
        let long = popup_rect("DEFAULTS RESTORED");
        assert!(long.size.width > short.size.width);
        assert_eq!(short.center(), long.center(), "Popups should share a center");
    }

    #[test]
    fn test_popup_centered_on_plot() {
        let rect = popup_rect("SAVED");
        assert_eq!(rect.center(), crate::config::PLOT_AREA.rect.center(), "Popup should sit over the plot, not the screen");
    }

    #[test]
    fn test_draw_popup_border_and_background() {
        let mut display = SimulatorDisplay::<Rgb565>::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        let popup = Popup::Reset(Instant::now());
        draw_popup(&mut display, &popup);

        let rect = popup_rect(popup.message());
        assert_eq!(display.get_pixel(rect.top_left), RED);
        assert_eq!(display.get_pixel(rect.top_left - Point::new(1, 1)), WHITE);
    }
}
