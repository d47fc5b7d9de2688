//! Command-line interface.
//!
//! ## Initial Thresholds
//! - `--a1`, `--a2`, `--a5-1`, `--a5-2`: dBm, -110..=-60
//! - `--hysteresis`: dB, 0..=10
//! - `--exact-region`: start with the A5-2 bound applied per sample
//!
//! ## Output
//! - `--export <PATH>`: render the chart once to PNG and exit
//! - `--print-region`: print the region table as CSV and exit
//! - `--scale`: window and export pixel scale
//! - `--snapshot-dir`: where `S` writes snapshots
//!
//! ## Logging
//! - `--log-level`: filter directive, `RUST_LOG` takes precedence

use std::path::PathBuf;

use clap::Parser;
use handover_common::thresholds::{
    A1_DEFAULT_DBM,
    A2_DEFAULT_DBM,
    A5_1_DEFAULT_DBM,
    A5_2_DEFAULT_DBM,
    HYSTERESIS_DEFAULT_DB,
    HYSTERESIS_MAX_DB,
    HYSTERESIS_MIN_DB,
    THRESHOLD_MAX_DBM,
    THRESHOLD_MIN_DBM,
};
use handover_common::{RegionMode, ThresholdSet};

use crate::config::DEFAULT_SCALE;
use crate::logging::DEFAULT_LOG_LEVEL;

/// Largest accepted `--scale`.
pub const MAX_SCALE: u32 = 4;

#[derive(Parser, Debug)]
#[command(name = "handover-visualizer")]
#[command(author, version, about = "Interactive LTE handover region visualizer (A1/A2/A5 thresholds + hysteresis)")]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    // =========================================================================
    // Initial Thresholds
    // =========================================================================

    /// A1 threshold in dBm (serving becomes better than)
    #[arg(long, default_value_t = A1_DEFAULT_DBM, value_parser = clap::value_parser!(i32).range(THRESHOLD_MIN_DBM as i64..=THRESHOLD_MAX_DBM as i64), help_heading = "Initial Thresholds")]
    pub a1: i32,

    /// A2 threshold in dBm (serving becomes worse than)
    #[arg(long, default_value_t = A2_DEFAULT_DBM, value_parser = clap::value_parser!(i32).range(THRESHOLD_MIN_DBM as i64..=THRESHOLD_MAX_DBM as i64), help_heading = "Initial Thresholds")]
    pub a2: i32,

    /// A5-1 threshold in dBm (serving must be worse than)
    #[arg(long = "a5-1", default_value_t = A5_1_DEFAULT_DBM, value_parser = clap::value_parser!(i32).range(THRESHOLD_MIN_DBM as i64..=THRESHOLD_MAX_DBM as i64), help_heading = "Initial Thresholds")]
    pub a5_1: i32,

    /// A5-2 threshold in dBm (neighbor must be better than)
    #[arg(long = "a5-2", default_value_t = A5_2_DEFAULT_DBM, value_parser = clap::value_parser!(i32).range(THRESHOLD_MIN_DBM as i64..=THRESHOLD_MAX_DBM as i64), help_heading = "Initial Thresholds")]
    pub a5_2: i32,

    /// Hysteresis in dB
    #[arg(long, default_value_t = HYSTERESIS_DEFAULT_DB, value_parser = clap::value_parser!(i32).range(HYSTERESIS_MIN_DB as i64..=HYSTERESIS_MAX_DB as i64), help_heading = "Initial Thresholds")]
    pub hysteresis: i32,

    /// Apply the A5-2 bound per sample instead of masking below it
    #[arg(long, help_heading = "Initial Thresholds")]
    pub exact_region: bool,

    // =========================================================================
    // Output
    // =========================================================================

    /// Render the chart to this PNG file and exit (no window)
    #[arg(long, value_name = "PATH", help_heading = "Output")]
    pub export: Option<PathBuf>,

    /// Print the region table as CSV to stdout and exit
    #[arg(long, help_heading = "Output")]
    pub print_region: bool,

    /// Pixel scale for the window and exported PNGs
    #[arg(long, default_value_t = DEFAULT_SCALE, value_parser = clap::value_parser!(u32).range(1..=MAX_SCALE as i64), help_heading = "Output")]
    pub scale: u32,

    /// Directory for snapshots saved with the S key
    #[arg(long, value_name = "DIR", default_value = ".", help_heading = "Output")]
    pub snapshot_dir: PathBuf,

    // =========================================================================
    // Logging
    // =========================================================================

    /// Log filter (e.g. "debug", "handover=trace"); RUST_LOG overrides
    #[arg(long, default_value = DEFAULT_LOG_LEVEL, help_heading = "Logging")]
    pub log_level: String,
}

impl Cli {
    /// Initial slider values.
    pub const fn thresholds(&self) -> ThresholdSet {
        ThresholdSet::new(self.a1, self.a2, self.a5_1, self.a5_2, self.hysteresis)
    }

    pub const fn region_mode(&self) -> RegionMode {
        if self.exact_region {
            RegionMode::Exact
        } else {
            RegionMode::Masked
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("handover-visualizer").chain(args.iter().copied()))
    }

    #[test]
    fn test_cli_definition_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]).expect("empty args should parse");
        assert_eq!(cli.thresholds(), ThresholdSet::DEFAULT);
        assert_eq!(cli.region_mode(), RegionMode::Masked);
        assert_eq!(cli.scale, DEFAULT_SCALE);
        assert_eq!(cli.snapshot_dir, PathBuf::from("."));
        assert_eq!(cli.log_level, "info");
        assert!(cli.export.is_none());
        assert!(!cli.print_region);
    }

    #[test]
    fn test_negative_thresholds() {
        let cli = parse(&["--a1", "-65", "--a5-1", "-100", "--a5-2", "-105", "--hysteresis", "0"]).expect("valid args");
        let set = cli.thresholds();
        assert_eq!(set.a1, -65);
        assert_eq!(set.a5_1, -100);
        assert_eq!(set.a5_2, -105);
        assert_eq!(set.hysteresis, 0);
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(parse(&["--a1", "-111"]).is_err(), "Below slider minimum");
        assert!(parse(&["--a2", "-59"]).is_err(), "Above slider maximum");
        assert!(parse(&["--hysteresis", "11"]).is_err());
        assert!(parse(&["--scale", "0"]).is_err());
        assert!(parse(&["--scale", "5"]).is_err());
    }

    #[test]
    fn test_exact_region_flag() {
        let cli = parse(&["--exact-region"]).expect("valid args");
        assert_eq!(cli.region_mode(), RegionMode::Exact);
    }

    #[test]
    fn test_export_path() {
        let cli = parse(&["--export", "out.png", "--scale", "2"]).expect("valid args");
        assert_eq!(cli.export, Some(PathBuf::from("out.png")));
        assert_eq!(cli.scale, 2);
    }
}
