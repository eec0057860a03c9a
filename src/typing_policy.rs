use crate::session::SessionConfig;
use crate::tracker::CharState;

/// Whether a keystroke may be recorded at `cursor`.
///
/// With pause on error enabled the user is held at a wrong character until
/// it has been deleted and retyped.
pub fn accepts_input(states: &[CharState], cursor: usize, config: &SessionConfig) -> bool {
    if cursor >= states.len() {
        return false;
    }
    if config.pause_on_error && cursor > 0 {
        return states[cursor - 1] != CharState::Incorrect;
    }
    true
}

/// Number of characters a word delete removes when the cursor sits at
/// `cursor`.
///
/// Whitespace directly before the cursor goes first, then everything back to
/// the previous whitespace or the start of the text. Boundaries come from the
/// target text, not from what was typed.
pub fn word_delete_len(target: &[char], cursor: usize) -> usize {
    let mut idx = cursor.min(target.len());

    while idx > 0 && target[idx - 1].is_whitespace() {
        idx -= 1;
    }
    while idx > 0 && !target[idx - 1].is_whitespace() {
        idx -= 1;
    }

    cursor.min(target.len()) - idx
}
