//! Widget components for the chart and log pages.
//!
//! - [`header`]: Red title bar with the region mode
//! - [`sidebar`]: Threshold sliders and key hints
//! - [`plot`]: Region fill, reference and threshold lines, axes
//! - [`legend`]: Legend box inside the plot
//! - [`instructions`]: Usage notes under the plot
//! - [`popups`]: Overlay popup for status messages
//! - [`primitives`]: Shared low-level drawing utilities
//!
//! Every widget draws onto any `DrawTarget<Color = Rgb565>`, so the same
//! code fills the simulator window and the offscreen export buffer.

mod header;
mod instructions;
mod legend;
mod plot;
mod popups;
mod primitives;
mod sidebar;

pub use header::{APP_TITLE, draw_header};
pub use instructions::draw_instructions;
pub use legend::draw_legend;
pub use plot::draw_plot;
pub use popups::draw_popup;
pub use sidebar::draw_sidebar;
