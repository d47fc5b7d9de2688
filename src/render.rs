//! Popup and redraw tracking for the main loop.
//!
//! The chart only changes when the user acts, so the main loop redraws a page
//! only when [`RenderState::check_dirty`] says so:
//!
//! | Trigger | Why |
//! |---------|-----|
//! | First frame | Nothing on screen yet |
//! | Control state changed | Sliders, fill and labels move |
//! | Page switched | Other page is on screen |
//! | Popup shown, switched or expired | Popup sizes differ, remnants must go |
//! | Event log grew (log page only) | New line to show |
//!
//! A full redraw clears the display first, so popup remnants never survive.

use std::time::Instant;

use handover_common::RegionMode;

use crate::config::POPUP_DURATION;
use crate::pages::Page;
use crate::state::ControlState;

/// Active popup with its start time.
///
/// Only one popup is shown at a time; a new one replaces the old.
#[derive(Clone, Copy, Debug)]
pub enum Popup {
    /// "DEFAULTS RESTORED" after `R`.
    Reset(Instant),
    /// "REGION: MASKED" / "REGION: EXACT" after `M`.
    Mode(RegionMode, Instant),
    /// Snapshot written.
    Saved(Instant),
    /// Snapshot write failed (details go to the event log).
    SaveFailed(Instant),
}

impl Popup {
    #[inline]
    pub const fn start_time(&self) -> Instant {
        match self {
            Self::Reset(t) | Self::Mode(_, t) | Self::Saved(t) | Self::SaveFailed(t) => *t,
        }
    }

    /// Check if this popup has expired.
    #[inline]
    pub fn is_expired(&self) -> bool { self.start_time().elapsed() >= POPUP_DURATION }

    /// Text shown in the popup.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Reset(_) => "DEFAULTS RESTORED",
            Self::Mode(RegionMode::Masked, _) => "REGION: MASKED",
            Self::Mode(RegionMode::Exact, _) => "REGION: EXACT",
            Self::Saved(_) => "SNAPSHOT SAVED",
            Self::SaveFailed(_) => "SAVE FAILED",
        }
    }

    /// Popup kind (discriminant plus mode, for comparison).
    #[inline]
    const fn kind(&self) -> u8 {
        match self {
            Self::Reset(_) => 0,
            Self::Mode(RegionMode::Masked, _) => 1,
            Self::Mode(RegionMode::Exact, _) => 2,
            Self::Saved(_) => 3,
            Self::SaveFailed(_) => 4,
        }
    }
}

/// Tracks what was last drawn so unchanged frames can be skipped.
pub struct RenderState {
    /// Whether this is the first frame (need full redraw).
    first_frame: bool,

    /// Control state the current frame was drawn from.
    prev_state: Option<ControlState>,

    prev_page: Page,

    /// Previous popup kind plus start time, so re-triggering the same popup counts.
    prev_popup: Option<(u8, Instant)>,

    /// Event log length at the last log page draw.
    prev_log_len: usize,
}

impl RenderState {
    /// Create a new render state for first frame.
    pub const fn new() -> Self {
        Self {
            first_frame: true,
            prev_state: None,
            prev_page: Page::Chart,
            prev_popup: None,
            prev_log_len: 0,
        }
    }

    /// Check if the current page needs a full redraw and remember the inputs.
    pub fn check_dirty(
        &mut self,
        state: &ControlState,
        page: Page,
        popup: Option<&Popup>,
        log_len: usize,
    ) -> bool {
        let popup_now = popup.map(|p| (p.kind(), p.start_time()));
        let dirty = self.first_frame
            || self.prev_state.as_ref() != Some(state)
            || page != self.prev_page
            || popup_now != self.prev_popup
            || (page == Page::Log && log_len != self.prev_log_len);

        self.prev_state = Some(*state);
        self.prev_page = page;
        self.prev_popup = popup_now;
        self.prev_log_len = log_len;
        dirty
    }

    #[inline]
    pub const fn is_first_frame(&self) -> bool { self.first_frame }

    /// Call at end of frame to reset per-frame state.
    pub const fn end_frame(&mut self) { self.first_frame = false; }
}

impl Default for RenderState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
