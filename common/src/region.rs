//! Handover region computation.
//!
//! The serving axis is sampled at 70 fixed points (`-110, -109.5, ... -75.5`).
//! For each sample `s` the region has a vertical extent on the neighbor axis:
//!
//! ```text
//! extent(s) = (s + hysteresis, -75)   if s < A5-1
//!           = empty                   otherwise
//! ```
//!
//! The extent is not gated by A5-2. In [`RegionMode::Masked`] the A5-2
//! condition is applied visually by painting an opaque band below A5-2 over
//! the fill. [`RegionMode::Exact`] raises each lower bound to A5-2 instead
//! (see [`HandoverRegion::clipped_extent`]). [`HandoverRegion::contains`]
//! always evaluates the full three-part predicate.

use core::ops::Range;

use crate::thresholds::ThresholdSet;

// =============================================================================
// Power Sample
// =============================================================================

/// First serving-power sample (dBm).
pub const SERVING_START_DBM: f32 = -110.0;

/// Exclusive upper bound of the serving samples, also the top of the fill (dBm).
pub const SERVING_END_DBM: f32 = -75.0;

/// Spacing between serving samples (dB).
pub const SAMPLE_STEP_DB: f32 = 0.5;

/// Number of serving samples: `(-75 - -110) / 0.5`.
pub const SAMPLE_COUNT: usize = 70;

const _: () = assert!(SERVING_START_DBM + SAMPLE_COUNT as f32 * SAMPLE_STEP_DB == SERVING_END_DBM);

/// Fixed serving-power sample points.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PowerSample {
    values: [f32; SAMPLE_COUNT],
}

impl PowerSample {
    pub fn new() -> Self {
        let mut values = [0.0; SAMPLE_COUNT];
        for (i, v) in values.iter_mut().enumerate() {
            *v = SERVING_START_DBM + i as f32 * SAMPLE_STEP_DB;
        }
        Self { values }
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<f32> { self.values.get(index).copied() }

    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ { self.values.iter().copied() }
}

impl Default for PowerSample {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Region Mode
// =============================================================================

/// How the A5-2 (neighbor) condition is applied to the shaded region.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RegionMode {
    /// Fill gated only by `serving < A5-1`; an opaque band below A5-2 hides the rest.
    #[default]
    Masked,
    /// Fill lower bound raised to A5-2 per sample, no band.
    Exact,
}

impl RegionMode {
    pub const fn toggle(self) -> Self {
        match self {
            Self::Masked => Self::Exact,
            Self::Exact => Self::Masked,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Masked => "MASKED",
            Self::Exact => "EXACT",
        }
    }
}

// =============================================================================
// Extent
// =============================================================================

/// Open vertical interval `(lower, upper)` on the neighbor axis, `lower < upper`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Extent {
    pub lower: f32,
    pub upper: f32,
}

impl Extent {
    /// Build an extent, or `None` when the interval would be empty.
    #[inline]
    pub fn new(
        lower: f32,
        upper: f32,
    ) -> Option<Self> {
        (lower < upper).then_some(Self { lower, upper })
    }

    #[inline]
    pub fn span(&self) -> f32 { self.upper - self.lower }

    /// Open-interval membership.
    #[inline]
    pub fn contains(
        &self,
        neighbor: f32,
    ) -> bool {
        neighbor > self.lower && neighbor < self.upper
    }
}

// =============================================================================
// Handover Region
// =============================================================================

/// Region for one threshold set. Recomputed on every render.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct HandoverRegion {
    serving: PowerSample,
    extents: [Option<Extent>; SAMPLE_COUNT],
    hysteresis: f32,
    a5_1: f32,
    a5_2: f32,
}

impl HandoverRegion {
    /// Compute per-sample extents for `thresholds`.
    pub fn compute(thresholds: &ThresholdSet) -> Self {
        let serving = PowerSample::new();
        let hysteresis = thresholds.hysteresis as f32;
        let a5_1 = thresholds.a5_1 as f32;
        let a5_2 = thresholds.a5_2 as f32;

        let mut extents = [None; SAMPLE_COUNT];
        for (slot, s) in extents.iter_mut().zip(serving.iter()) {
            if s < a5_1 {
                *slot = Extent::new(s + hysteresis, SERVING_END_DBM);
            }
        }

        Self {
            serving,
            extents,
            hysteresis,
            a5_1,
            a5_2,
        }
    }

    #[inline]
    pub const fn serving(&self) -> &PowerSample { &self.serving }

    /// Per-sample extents, indexed like [`PowerSample`]. Always 70 entries.
    #[inline]
    pub const fn extents(&self) -> &[Option<Extent>; SAMPLE_COUNT] { &self.extents }

    #[inline]
    pub fn extent(
        &self,
        index: usize,
    ) -> Option<Extent> {
        self.extents.get(index).copied().flatten()
    }

    /// Extent with the lower bound raised to A5-2.
    pub fn clipped_extent(
        &self,
        index: usize,
    ) -> Option<Extent> {
        self.extent(index).and_then(|e| Extent::new(e.lower.max(self.a5_2), e.upper))
    }

    /// Extent as drawn in `mode`.
    pub fn extent_for(
        &self,
        index: usize,
        mode: RegionMode,
    ) -> Option<Extent> {
        match mode {
            RegionMode::Masked => self.extent(index),
            RegionMode::Exact => self.clipped_extent(index),
        }
    }

    /// Lower edge of the fill at an arbitrary serving power: `serving + hysteresis`.
    #[inline]
    pub fn lower_edge(
        &self,
        serving: f32,
    ) -> f32 {
        serving + self.hysteresis
    }

    #[inline]
    pub const fn hysteresis(&self) -> f32 { self.hysteresis }

    #[inline]
    pub const fn a5_2(&self) -> f32 { self.a5_2 }

    /// Exact handover predicate for a (serving, neighbor) pair.
    pub fn contains(
        &self,
        serving: f32,
        neighbor: f32,
    ) -> bool {
        neighbor > serving + self.hysteresis && serving < self.a5_1 && neighbor > self.a5_2
    }

    /// Number of samples satisfying `serving < A5-1`.
    pub fn samples_below_a5_1(&self) -> usize { self.serving.iter().filter(|&s| s < self.a5_1).count() }

    /// Number of samples with a non-empty extent.
    pub fn shaded_samples(&self) -> usize { self.extents.iter().filter(|e| e.is_some()).count() }

    /// Sum of extent spans times the sample step (dB²), before A5-2 gating.
    pub fn shaded_area(&self) -> f32 { self.area_with(|i| self.extent(i)) }

    /// Same as [`Self::shaded_area`] but with A5-2 applied.
    pub fn visible_area(&self) -> f32 { self.area_with(|i| self.clipped_extent(i)) }

    fn area_with<F>(
        &self,
        extent_at: F,
    ) -> f32
    where
        F: Fn(usize) -> Option<Extent>,
    {
        (0..SAMPLE_COUNT).filter_map(extent_at).map(|e| e.span() * SAMPLE_STEP_DB).sum()
    }

    /// Contiguous sample index ranges with a non-empty extent in `mode`.
    ///
    /// Each run is one fill polygon spanning its first to its last sample.
    pub fn runs(
        &self,
        mode: RegionMode,
    ) -> Runs<'_> {
        Runs {
            region: self,
            mode,
            next: 0,
        }
    }
}

/// Iterator over fill runs, see [`HandoverRegion::runs`].
pub struct Runs<'a> {
    region: &'a HandoverRegion,
    mode: RegionMode,
    next: usize,
}

impl Iterator for Runs<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let filled = |i: usize| self.region.extent_for(i, self.mode).is_some();

        let start = (self.next..SAMPLE_COUNT).find(|&i| filled(i))?;
        let end = (start..SAMPLE_COUNT).find(|&i| !filled(i)).unwrap_or(SAMPLE_COUNT);
        self.next = end;
        Some(start..end)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
