use std::time::SystemTime;

use tracing::{debug, info};

use crate::session::{Phase, SessionConfig, Timing};
use crate::typing_policy::{accepts_input, word_delete_len};
use crate::util::{accuracy, wpm};

/// Correctness of a single character of the target text
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CharState {
    #[default]
    Untouched,
    Correct,
    Incorrect,
}

/// Final figures of a completed session
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionResults {
    pub wpm: u64,
    pub accuracy: f64,
    pub duration_secs: u64,
}

/// Typing progress over one immutable target text.
///
/// The tracker is the only owner of session state. Every action is
/// synchronous and invalid actions leave the state untouched.
#[derive(Debug, Clone)]
pub struct Tracker {
    prompt: String,
    chars: Vec<char>,
    states: Vec<CharState>,
    cursor: Option<usize>,
    phase: Phase,
    timing: Timing,
    config: SessionConfig,
}

impl Tracker {
    pub fn new(prompt: impl Into<String>, config: SessionConfig) -> Self {
        let prompt = prompt.into();
        let chars: Vec<char> = prompt.chars().collect();
        let states = vec![CharState::Untouched; chars.len()];

        Self {
            prompt,
            chars,
            states,
            cursor: None,
            phase: Phase::NotStarted,
            timing: Timing::default(),
            config,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn states(&self) -> &[CharState] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Index of the next character to type, None before the first keystroke
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Cursor index as shown to the user, -1 before the first keystroke
    pub fn current_index(&self) -> i64 {
        self.cursor.map_or(-1, |c| c as i64)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn has_started(&self) -> bool {
        self.phase != Phase::NotStarted
    }

    pub fn has_finished(&self) -> bool {
        self.phase == Phase::Ended
    }

    pub fn correct_chars(&self) -> usize {
        self.count(CharState::Correct)
    }

    pub fn error_chars(&self) -> usize {
        self.count(CharState::Incorrect)
    }

    fn count(&self, state: CharState) -> usize {
        self.states.iter().filter(|s| **s == state).count()
    }

    pub fn insert(&mut self, c: char) -> bool {
        self.insert_at(c, SystemTime::now())
    }

    /// Record `c` against the next expected character, as if typed at `now`.
    /// Returns false when the keystroke was ignored.
    pub fn insert_at(&mut self, c: char, now: SystemTime) -> bool {
        if self.phase == Phase::Ended {
            return false;
        }

        let idx = self.cursor.unwrap_or(0);
        if !accepts_input(&self.states, idx, &self.config) {
            debug!(idx, ?c, "keystroke rejected");
            return false;
        }

        if self.phase == Phase::NotStarted {
            self.phase = Phase::Running;
            self.timing.started_at = Some(now);
            info!(len = self.chars.len(), "typing session started");
        }

        let expected = self.chars[idx];
        self.states[idx] = if c == expected {
            CharState::Correct
        } else {
            CharState::Incorrect
        };
        self.cursor = Some(idx + 1);
        debug!(idx, ?c, ?expected, state = ?self.states[idx], "keystroke recorded");

        if idx + 1 == self.chars.len() {
            self.phase = Phase::Ended;
            self.timing.ended_at = Some(now);
            info!(
                correct = self.correct_chars(),
                errors = self.error_chars(),
                "typing session ended"
            );
        }

        true
    }

    pub fn insert_str(&mut self, s: &str) -> usize {
        self.insert_str_at(s, SystemTime::now())
    }

    /// Insert every char of `s` in order, stopping at the first rejected one.
    /// Returns how many were recorded.
    pub fn insert_str_at(&mut self, s: &str, now: SystemTime) -> usize {
        let mut accepted = 0;
        for c in s.chars() {
            if !self.insert_at(c, now) {
                break;
            }
            accepted += 1;
        }
        accepted
    }

    /// Step the cursor back one character, or one word when `extended` is set.
    /// Returns false when there was nothing to delete.
    pub fn delete(&mut self, extended: bool) -> bool {
        if self.phase == Phase::Ended {
            return false;
        }

        let cursor = match self.cursor {
            Some(c) if c > 0 => c,
            _ => return false,
        };

        let count = if extended {
            word_delete_len(&self.chars, cursor).max(1)
        } else {
            1
        };

        let new_cursor = cursor - count;
        for state in &mut self.states[new_cursor..cursor] {
            *state = CharState::Untouched;
        }
        self.cursor = Some(new_cursor);
        debug!(from = cursor, to = new_cursor, extended, "deleted");

        true
    }

    /// Return to the untouched baseline, keeping the same text and options
    pub fn reset(&mut self) {
        self.states.fill(CharState::Untouched);
        self.cursor = None;
        self.phase = Phase::NotStarted;
        self.timing = Timing::default();
        info!("typing session reset");
    }

    pub fn duration_secs(&self) -> Option<u64> {
        self.timing.duration_secs()
    }

    /// Words per minute once the session has ended; 0 if it ended within the
    /// first second
    pub fn wpm(&self) -> Option<u64> {
        if self.phase != Phase::Ended {
            return None;
        }
        let secs = self.duration_secs()?;
        Some(wpm(self.correct_chars(), secs).unwrap_or(0))
    }

    pub fn accuracy(&self) -> f64 {
        accuracy(self.correct_chars(), self.chars.len())
    }

    pub fn results(&self) -> Option<SessionResults> {
        Some(SessionResults {
            wpm: self.wpm()?,
            accuracy: self.accuracy(),
            duration_secs: self.duration_secs()?,
        })
    }
}
