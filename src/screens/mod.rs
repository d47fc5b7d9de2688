//! Full-page screens.
//!
//! - **Chart Page** ([`chart`]): Sliders, plot, legend and usage notes
//! - **Log Page** ([`log`]): Threshold summary, region statistics and the event log
//!
//! Both pages clear the display and draw everything, so they are only called
//! when [`RenderState`](crate::render::RenderState) reports a dirty frame.

mod chart;
mod log;

pub use chart::draw_chart_page;
pub use log::draw_log_page;
