//! Interactive control state: slider values, the selected slider, and the
//! region mode.
//!
//! Key presses are translated into [`Action`]s (see [`crate::input`]) and
//! applied here. [`ControlState::apply`] reports what actually changed so the
//! main loop can log it, show a popup, and mark the frame dirty. Actions that
//! hit a slider bound report nothing.

use handover_common::{Chart, Parameter, RegionMode, ThresholdSet, render};

/// Coarse adjustment step (PgUp/PgDn), in slider steps.
pub const COARSE_STEPS: i32 = 5;

/// User intent decoded from a key press.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    SelectPrev,
    SelectNext,
    /// Move the selected slider by this many steps (negative = down).
    Adjust(i32),
    JumpMin,
    JumpMax,
    ResetDefaults,
    ToggleMode,
    Snapshot,
    TogglePage,
    Quit,
}

/// Outcome of applying an [`Action`] to the control state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Change {
    Selected(Parameter),
    Value {
        param: Parameter,
        old: i32,
        new: i32,
    },
    Reset,
    Mode(RegionMode),
}

/// Everything the chart depends on.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ControlState {
    pub thresholds: ThresholdSet,
    pub selected: Parameter,
    pub mode: RegionMode,
}

impl ControlState {
    pub const fn new(
        thresholds: ThresholdSet,
        mode: RegionMode,
    ) -> Self {
        Self {
            thresholds,
            selected: Parameter::A1,
            mode,
        }
    }

    /// Apply `action`.
    ///
    /// Returns `None` when nothing changed, including for actions the state
    /// does not own ([`Action::Snapshot`], [`Action::TogglePage`],
    /// [`Action::Quit`]).
    pub fn apply(
        &mut self,
        action: Action,
    ) -> Option<Change> {
        match action {
            Action::SelectPrev => {
                self.selected = self.selected.prev();
                Some(Change::Selected(self.selected))
            }
            Action::SelectNext => {
                self.selected = self.selected.next();
                Some(Change::Selected(self.selected))
            }
            Action::Adjust(steps) => {
                let old = self.thresholds.get(self.selected);
                self.thresholds
                    .adjust(self.selected, steps)
                    .then(|| self.value_change(old))
            }
            Action::JumpMin => self.jump_to(self.selected.range().0),
            Action::JumpMax => self.jump_to(self.selected.range().1),
            Action::ResetDefaults => {
                if self.thresholds == ThresholdSet::DEFAULT {
                    return None;
                }
                self.thresholds = ThresholdSet::DEFAULT;
                Some(Change::Reset)
            }
            Action::ToggleMode => {
                self.mode = self.mode.toggle();
                Some(Change::Mode(self.mode))
            }
            Action::Snapshot | Action::TogglePage | Action::Quit => None,
        }
    }

    fn jump_to(
        &mut self,
        value: i32,
    ) -> Option<Change> {
        let old = self.thresholds.get(self.selected);
        self.thresholds
            .set(self.selected, value)
            .then(|| self.value_change(old))
    }

    fn value_change(
        &self,
        old: i32,
    ) -> Change {
        Change::Value {
            param: self.selected,
            old,
            new: self.thresholds.get(self.selected),
        }
    }

    /// Compose the chart for the current values.
    pub fn chart(&self) -> Chart { render(&self.thresholds, self.mode) }

    /// PNG file name encoding every slider value.
    pub fn snapshot_filename(&self) -> String {
        let t = &self.thresholds;
        format!(
            "handover_a1{}_a2{}_a51{}_a52{}_h{}.png",
            t.a1, t.a2, t.a5_1, t.a5_2, t.hysteresis
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use handover_common::thresholds::{THRESHOLD_MAX_DBM, THRESHOLD_MIN_DBM};

    use super::*;

    #[test]
    fn test_default_state() {
        let state = ControlState::default();
        assert_eq!(state.thresholds, ThresholdSet::DEFAULT);
        assert_eq!(state.selected, Parameter::A1);
        assert_eq!(state.mode, RegionMode::Masked);
    }

    #[test]
    fn test_select_wraps() {
        let mut state = ControlState::default();
        assert_eq!(state.apply(Action::SelectPrev), Some(Change::Selected(Parameter::Hysteresis)));
        assert_eq!(state.apply(Action::SelectNext), Some(Change::Selected(Parameter::A1)));
    }

    #[test]
    fn test_adjust_reports_old_and_new() {
        let mut state = ControlState::default();
        state.selected = Parameter::A5Serving;

        let change = state.apply(Action::Adjust(-COARSE_STEPS));
        assert_eq!(
            change,
            Some(Change::Value {
                param: Parameter::A5Serving,
                old: -90,
                new: -95,
            })
        );
        assert_eq!(state.thresholds.a5_1, -95);
    }

    #[test]
    fn test_adjust_at_bound_is_no_change() {
        let mut state = ControlState::default();
        state.selected = Parameter::Hysteresis;
        state.apply(Action::JumpMax);

        assert_eq!(state.apply(Action::Adjust(1)), None, "Adjust past max should report nothing");
        assert_eq!(state.thresholds.hysteresis, 10);
    }

    #[test]
    fn test_jump_to_range_ends() {
        let mut state = ControlState::default();
        state.selected = Parameter::A2;

        state.apply(Action::JumpMin);
        assert_eq!(state.thresholds.a2, THRESHOLD_MIN_DBM);
        state.apply(Action::JumpMax);
        assert_eq!(state.thresholds.a2, THRESHOLD_MAX_DBM);
        assert_eq!(state.apply(Action::JumpMax), None);
    }

    #[test]
    fn test_reset_restores_defaults_keeps_selection() {
        let mut state = ControlState::default();
        state.selected = Parameter::A5Neighbor;
        state.apply(Action::Adjust(3));

        assert_eq!(state.apply(Action::ResetDefaults), Some(Change::Reset));
        assert_eq!(state.thresholds, ThresholdSet::DEFAULT);
        assert_eq!(state.selected, Parameter::A5Neighbor);
        assert_eq!(state.apply(Action::ResetDefaults), None, "Second reset changes nothing");
    }

    #[test]
    fn test_toggle_mode() {
        let mut state = ControlState::default();
        assert_eq!(state.apply(Action::ToggleMode), Some(Change::Mode(RegionMode::Exact)));
        assert_eq!(state.chart().mode, RegionMode::Exact);
        assert!(state.chart().mask.is_none());
    }

    #[test]
    fn test_shell_actions_not_applied() {
        let mut state = ControlState::default();
        for action in [Action::Snapshot, Action::TogglePage, Action::Quit] {
            assert_eq!(state.apply(action), None);
        }
        assert_eq!(state, ControlState::default());
    }

    #[test]
    fn test_snapshot_filename() {
        let state = ControlState::default();
        assert_eq!(state.snapshot_filename(), "handover_a1-70_a2-75_a51-90_a52-95_h3.png");
    }
}
