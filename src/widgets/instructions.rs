//! "How to use" block under the plot.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;

use crate::config::{INSTRUCTIONS_LEFT, INSTRUCTIONS_TOP};
use crate::styles::{HEADING_STYLE, LEFT_ALIGNED, TEXT_STYLE};

pub const INSTRUCTIONS_HEADING: &str = "How to use this visualization:";

pub const INSTRUCTION_LINES: [&str; 6] = [
    "1. Use the sliders on the left to adjust threshold values",
    "2. The green region shows where handover will occur",
    "3. Conditions for handover:",
    "   - Neighbor power > Serving power + Hysteresis",
    "   - Serving power < A5-1 threshold",
    "   - Neighbor power > A5-2 threshold",
];

const LINE_HEIGHT: i32 = 11;

/// Gap between the heading baseline and the first line.
const HEADING_GAP: i32 = 15;

pub fn draw_instructions<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(
        INSTRUCTIONS_HEADING,
        Point::new(INSTRUCTIONS_LEFT, INSTRUCTIONS_TOP),
        HEADING_STYLE,
        LEFT_ALIGNED,
    )
    .draw(display)
    .ok();

    let first = INSTRUCTIONS_TOP + HEADING_GAP;
    for (i, line) in INSTRUCTION_LINES.iter().enumerate() {
        let pos = Point::new(INSTRUCTIONS_LEFT, first + i as i32 * LINE_HEIGHT);
        Text::with_text_style(line, pos, TEXT_STYLE, LEFT_ALIGNED)
            .draw(display)
            .ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
    use crate::styles::LABEL_CHAR_WIDTH;

    #[test]
    fn test_instructions_fit_on_screen() {
        let last = INSTRUCTIONS_TOP + HEADING_GAP + (INSTRUCTION_LINES.len() as i32 - 1) * LINE_HEIGHT;
        assert!(last < SCREEN_HEIGHT as i32, "Last instruction line off screen");

        for line in INSTRUCTION_LINES {
            let right = INSTRUCTIONS_LEFT + (line.len() as u32 * LABEL_CHAR_WIDTH) as i32;
            assert!(right < SCREEN_WIDTH as i32, "{line:?} runs off screen");
        }
    }
}
