//! Slider domain for the five handover thresholds.
//!
//! All ranges and defaults are compile-time constants with validation
//! assertions, so a default outside its slider range fails the build.
//!
//! # Parameters
//!
//! | Parameter | Range | Default | Unit |
//! |-----------|-------|---------|------|
//! | A1 | -110..=-60 | -70 | dBm |
//! | A2 | -110..=-60 | -75 | dBm |
//! | A5-1 (serving) | -110..=-60 | -90 | dBm |
//! | A5-2 (neighbor) | -110..=-60 | -95 | dBm |
//! | Hysteresis | 0..=10 | 3 | dB |
//!
//! No ordering is enforced between the thresholds. The tool is exploratory
//! and physically inconsistent configurations (e.g. A5-2 above A1) are
//! allowed.

use core::fmt::Write;

use heapless::String;

// =============================================================================
// Slider Ranges
// =============================================================================

/// Lowest selectable threshold (dBm).
pub const THRESHOLD_MIN_DBM: i32 = -110;

/// Highest selectable threshold (dBm).
pub const THRESHOLD_MAX_DBM: i32 = -60;

/// Lowest selectable hysteresis (dB).
pub const HYSTERESIS_MIN_DB: i32 = 0;

/// Highest selectable hysteresis (dB).
pub const HYSTERESIS_MAX_DB: i32 = 10;

/// Every slider moves in whole units.
pub const SLIDER_STEP: i32 = 1;

/// Offset between a dBm value and its "AP input" encoding.
pub const AP_INPUT_OFFSET: i32 = 140;

const _: () = assert!(THRESHOLD_MIN_DBM < THRESHOLD_MAX_DBM);
const _: () = assert!(HYSTERESIS_MIN_DB < HYSTERESIS_MAX_DB);

// =============================================================================
// Defaults
// =============================================================================

pub const A1_DEFAULT_DBM: i32 = -70;
pub const A2_DEFAULT_DBM: i32 = -75;
pub const A5_1_DEFAULT_DBM: i32 = -90;
pub const A5_2_DEFAULT_DBM: i32 = -95;
pub const HYSTERESIS_DEFAULT_DB: i32 = 3;

const fn in_threshold_range(v: i32) -> bool { v >= THRESHOLD_MIN_DBM && v <= THRESHOLD_MAX_DBM }

const _: () = assert!(in_threshold_range(A1_DEFAULT_DBM));
const _: () = assert!(in_threshold_range(A2_DEFAULT_DBM));
const _: () = assert!(in_threshold_range(A5_1_DEFAULT_DBM));
const _: () = assert!(in_threshold_range(A5_2_DEFAULT_DBM));
const _: () = assert!(HYSTERESIS_DEFAULT_DB >= HYSTERESIS_MIN_DB && HYSTERESIS_DEFAULT_DB <= HYSTERESIS_MAX_DB);

/// Encode a dBm value as the AP input shown next to each threshold slider.
#[inline]
pub const fn ap_input(dbm: i32) -> i32 { dbm + AP_INPUT_OFFSET }

// =============================================================================
// Parameter
// =============================================================================

/// One of the five slider-controlled parameters, in sidebar order.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Parameter {
    #[default]
    A1,
    A2,
    /// A5-1: serving cell must be worse than this.
    A5Serving,
    /// A5-2: neighbor cell must be better than this.
    A5Neighbor,
    Hysteresis,
}

impl Parameter {
    /// All parameters in the order they appear in the sidebar.
    pub const ALL: [Self; 5] = [Self::A1, Self::A2, Self::A5Serving, Self::A5Neighbor, Self::Hysteresis];

    /// Slider label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::A1 => "A1 Threshold",
            Self::A2 => "A2 Threshold",
            Self::A5Serving => "A5-1 Threshold",
            Self::A5Neighbor => "A5-2 Threshold",
            Self::Hysteresis => "Hysteresis (dB)",
        }
    }

    /// Short name used in chart labels and log lines.
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::A1 => "A1",
            Self::A2 => "A2",
            Self::A5Serving => "A5-1",
            Self::A5Neighbor => "A5-2",
            Self::Hysteresis => "Hyst",
        }
    }

    /// Inclusive slider range `(min, max)`.
    pub const fn range(self) -> (i32, i32) {
        match self {
            Self::Hysteresis => (HYSTERESIS_MIN_DB, HYSTERESIS_MAX_DB),
            _ => (THRESHOLD_MIN_DBM, THRESHOLD_MAX_DBM),
        }
    }

    pub const fn default_value(self) -> i32 {
        match self {
            Self::A1 => A1_DEFAULT_DBM,
            Self::A2 => A2_DEFAULT_DBM,
            Self::A5Serving => A5_1_DEFAULT_DBM,
            Self::A5Neighbor => A5_2_DEFAULT_DBM,
            Self::Hysteresis => HYSTERESIS_DEFAULT_DB,
        }
    }

    pub const fn unit(self) -> &'static str {
        match self {
            Self::Hysteresis => "dB",
            _ => "dBm",
        }
    }

    /// Threshold sliders also show the AP input encoding; hysteresis does not.
    pub const fn shows_ap_input(self) -> bool { !matches!(self, Self::Hysteresis) }

    /// Position in [`Parameter::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Self::A1 => 0,
            Self::A2 => 1,
            Self::A5Serving => 2,
            Self::A5Neighbor => 3,
            Self::Hysteresis => 4,
        }
    }

    /// Next parameter in sidebar order (wraps to the first).
    pub const fn next(self) -> Self { Self::ALL[(self.index() + 1) % Self::ALL.len()] }

    /// Previous parameter in sidebar order (wraps to the last).
    pub const fn prev(self) -> Self { Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()] }

    /// Clamp `value` into this parameter's slider range.
    pub const fn clamp(
        self,
        value: i32,
    ) -> i32 {
        let (min, max) = self.range();
        if value < min {
            min
        } else if value > max {
            max
        } else {
            value
        }
    }

    /// Slider value text, e.g. `-70 dBm (AP input: 70)` or `3 dB`.
    pub fn format_value(
        self,
        value: i32,
    ) -> String<32> {
        let mut s: String<32> = String::new();
        if self.shows_ap_input() {
            let _ = write!(s, "{value} {} (AP input: {})", self.unit(), ap_input(value));
        } else {
            let _ = write!(s, "{value} {}", self.unit());
        }
        s
    }
}

// =============================================================================
// Threshold Set
// =============================================================================

/// Current value of every slider.
///
/// Fields are public for reading; writes should go through [`ThresholdSet::set`]
/// or [`ThresholdSet::adjust`] so values stay inside the slider ranges.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ThresholdSet {
    pub a1: i32,
    pub a2: i32,
    pub a5_1: i32,
    pub a5_2: i32,
    pub hysteresis: i32,
}

impl ThresholdSet {
    /// Slider defaults: A1 -70, A2 -75, A5-1 -90, A5-2 -95, hysteresis 3.
    pub const DEFAULT: Self = Self {
        a1: A1_DEFAULT_DBM,
        a2: A2_DEFAULT_DBM,
        a5_1: A5_1_DEFAULT_DBM,
        a5_2: A5_2_DEFAULT_DBM,
        hysteresis: HYSTERESIS_DEFAULT_DB,
    };

    /// Build a set, clamping every value into its slider range.
    pub const fn new(
        a1: i32,
        a2: i32,
        a5_1: i32,
        a5_2: i32,
        hysteresis: i32,
    ) -> Self {
        Self {
            a1: Parameter::A1.clamp(a1),
            a2: Parameter::A2.clamp(a2),
            a5_1: Parameter::A5Serving.clamp(a5_1),
            a5_2: Parameter::A5Neighbor.clamp(a5_2),
            hysteresis: Parameter::Hysteresis.clamp(hysteresis),
        }
    }

    pub const fn get(&self, param: Parameter) -> i32 {
        match param {
            Parameter::A1 => self.a1,
            Parameter::A2 => self.a2,
            Parameter::A5Serving => self.a5_1,
            Parameter::A5Neighbor => self.a5_2,
            Parameter::Hysteresis => self.hysteresis,
        }
    }

    /// Set a parameter (clamped). Returns `true` if the stored value changed.
    pub const fn set(
        &mut self,
        param: Parameter,
        value: i32,
    ) -> bool {
        let value = param.clamp(value);
        let slot = match param {
            Parameter::A1 => &mut self.a1,
            Parameter::A2 => &mut self.a2,
            Parameter::A5Serving => &mut self.a5_1,
            Parameter::A5Neighbor => &mut self.a5_2,
            Parameter::Hysteresis => &mut self.hysteresis,
        };
        let changed = *slot != value;
        *slot = value;
        changed
    }

    /// Move a parameter by `steps` slider steps (negative moves down).
    pub const fn adjust(
        &mut self,
        param: Parameter,
        steps: i32,
    ) -> bool {
        let current = self.get(param);
        self.set(param, current.saturating_add(steps.saturating_mul(SLIDER_STEP)))
    }
}

impl Default for ThresholdSet {
    fn default() -> Self { Self::DEFAULT }
}

// =============================================================================
// Unit Tests
// =============================================================================
