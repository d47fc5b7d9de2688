//! Chart page: the main view.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ LTE Handover Region Visualization            REGION: MASKED  │ 30px
//! ├──────────────┬───────────────────────────────────────────────┤
//! │ Threshold    │          LTE Handover Regions                 │
//! │ Parameters   │     ┌───────────────────────────┐             │
//! │ > A1 ...     │     │  plot 351 x 351           │             │
//! │   A2 ...     │     │                 ┌───────┐ │             │
//! │   A5-1 ...   │     │                 │legend │ │             │
//! │   A5-2 ...   │     └─────────────────┴───────┴─┘             │
//! │   Hyst ...   │       Serving Cell Power (dBm)                │
//! │ Keys: ...    │  How to use this visualization: ...           │
//! └──────────────┴───────────────────────────────────────────────┘
//!      210px
//! ```

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use handover_common::colors::WHITE;

use crate::config::PLOT_AREA;
use crate::render::Popup;
use crate::state::ControlState;
use crate::widgets::{draw_header, draw_instructions, draw_legend, draw_plot, draw_popup, draw_sidebar};

/// Draw the chart page for `state`, with `popup` on top if present.
pub fn draw_chart_page<D>(
    display: &mut D,
    state: &ControlState,
    popup: Option<&Popup>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(WHITE).ok();

    let chart = state.chart();

    draw_header(display, state.mode);
    draw_sidebar(display, &state.thresholds, state.selected);
    draw_plot(display, &PLOT_AREA, &chart);
    draw_legend(display, &PLOT_AREA, &chart.legend);
    draw_instructions(display);

    // Popup must be drawn last to appear on top
    if let Some(popup) = popup {
        draw_popup(display, popup);
    }
}
