//! Keyboard mapping for the simulator window.
//!
//! | Key | Action |
//! |-----|--------|
//! | `Up` / `Down` | Select previous / next slider |
//! | `Left` / `Right` | Adjust selected slider by one step |
//! | `PageDown` / `PageUp` | Adjust by five steps |
//! | `Home` / `End` | Jump to slider minimum / maximum |
//! | `R` | Reset all sliders to defaults |
//! | `M` | Toggle masked / exact region |
//! | `S` | Save PNG snapshot |
//! | `Tab` | Switch between chart and event log |
//! | `Esc` / `Q` | Quit |
//!
//! OS key repeat is honored for selection and adjustment so holding an arrow
//! key sweeps the slider. Toggles and one-shot actions ignore repeats.

use embedded_graphics_simulator::sdl2::Keycode;

use crate::state::{Action, COARSE_STEPS};

/// Map a key press to an [`Action`].
pub fn action_for_key(
    keycode: Keycode,
    repeat: bool,
) -> Option<Action> {
    let action = match keycode {
        Keycode::UP => Action::SelectPrev,
        Keycode::DOWN => Action::SelectNext,
        Keycode::LEFT => Action::Adjust(-1),
        Keycode::RIGHT => Action::Adjust(1),
        Keycode::PAGEDOWN => Action::Adjust(-COARSE_STEPS),
        Keycode::PAGEUP => Action::Adjust(COARSE_STEPS),
        Keycode::HOME => Action::JumpMin,
        Keycode::END => Action::JumpMax,
        Keycode::R => Action::ResetDefaults,
        Keycode::M => Action::ToggleMode,
        Keycode::S => Action::Snapshot,
        Keycode::TAB => Action::TogglePage,
        Keycode::ESCAPE | Keycode::Q => Action::Quit,
        _ => return None,
    };

    if repeat && !is_repeatable(action) {
        return None;
    }
    Some(action)
}

const fn is_repeatable(action: Action) -> bool {
    matches!(action, Action::SelectPrev | Action::SelectNext | Action::Adjust(_))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        assert_eq!(action_for_key(Keycode::UP, false), Some(Action::SelectPrev));
        assert_eq!(action_for_key(Keycode::DOWN, false), Some(Action::SelectNext));
        assert_eq!(action_for_key(Keycode::LEFT, false), Some(Action::Adjust(-1)));
        assert_eq!(action_for_key(Keycode::RIGHT, false), Some(Action::Adjust(1)));
    }

    #[test]
    fn test_page_keys_adjust_coarse() {
        assert_eq!(action_for_key(Keycode::PAGEUP, false), Some(Action::Adjust(5)));
        assert_eq!(action_for_key(Keycode::PAGEDOWN, false), Some(Action::Adjust(-5)));
    }

    #[test]
    fn test_repeat_allowed_for_adjust() {
        assert_eq!(action_for_key(Keycode::RIGHT, true), Some(Action::Adjust(1)));
        assert_eq!(action_for_key(Keycode::DOWN, true), Some(Action::SelectNext));
    }

    #[test]
    fn test_repeat_ignored_for_toggles() {
        assert_eq!(action_for_key(Keycode::M, true), None, "Holding M should not flicker the mode");
        assert_eq!(action_for_key(Keycode::S, true), None, "Holding S should not spam snapshots");
        assert_eq!(action_for_key(Keycode::TAB, true), None);
        assert_eq!(action_for_key(Keycode::R, true), None);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(action_for_key(Keycode::ESCAPE, false), Some(Action::Quit));
        assert_eq!(action_for_key(Keycode::Q, false), Some(Action::Quit));
    }

    #[test]
    fn test_unmapped_key() {
        assert_eq!(action_for_key(Keycode::X, false), None);
    }
}
