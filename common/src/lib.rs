//! Platform-agnostic core of the LTE handover visualizer.
//!
//! - [`thresholds`]: slider ranges, defaults, and the [`ThresholdSet`] value
//! - [`region`]: power samples and the handover region computation
//! - [`chart`]: composition of a full chart from a threshold set
//! - [`plot`]: data-to-pixel mapping for the plot rectangle
//! - [`colors`]: RGB565 color constants
//!
//! # no_std Compatibility
//!
//! This crate is `no_std`: text goes into `heapless` strings and float
//! rounding comes from `micromath`, so the region and chart code can run on
//! any `embedded-graphics` target.

#![no_std]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod chart;
pub mod colors;
pub mod plot;
pub mod region;
pub mod thresholds;

// Re-export commonly used items
pub use chart::{Chart, render};
pub use region::{HandoverRegion, RegionMode};
pub use thresholds::{Parameter, ThresholdSet};
