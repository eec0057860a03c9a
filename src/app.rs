use tracing::debug;

use crate::keymap::{map_key, Action};
use crate::runtime::SessionEvent;
use crate::sample::Sample;
use crate::session::SessionConfig;
use crate::tracker::Tracker;

/// One practice session: the tracker for the chosen text plus the little UI
/// state the renderer needs.
#[derive(Debug)]
pub struct App {
    pub tracker: Tracker,
    pub title: String,
    pub focused: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(sample: Sample, config: SessionConfig) -> Self {
        Self {
            tracker: Tracker::new(sample.text, config),
            title: sample.title,
            focused: true,
            should_quit: false,
        }
    }

    /// Apply one runtime event. Returns true when the screen needs a redraw.
    pub fn handle_event(&mut self, event: SessionEvent) -> bool {
        match event {
            SessionEvent::Key(key) => {
                let action = map_key(key, self.tracker.config().tab_width);
                self.apply(action)
            }
            SessionEvent::FocusGained => {
                self.focused = true;
                true
            }
            SessionEvent::FocusLost => {
                self.focused = false;
                true
            }
            SessionEvent::Resize => true,
            // the loop driving the app decides what a closed source means
            SessionEvent::Tick | SessionEvent::Closed => false,
        }
    }

    pub fn apply(&mut self, action: Action) -> bool {
        debug!(?action, "applying action");
        match action {
            Action::Insert(text) => self.tracker.insert_str(&text) > 0,
            Action::Delete { extended } => self.tracker.delete(extended),
            Action::Reset => {
                self.tracker.reset();
                true
            }
            Action::Quit => {
                self.should_quit = true;
                false
            }
            Action::Ignore => false,
        }
    }

    /// The caret is only drawn while the terminal has focus and typing is
    /// still possible
    pub fn caret_visible(&self) -> bool {
        self.focused && !self.tracker.has_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Phase;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn app(text: &str) -> App {
        App::new(Sample::custom(text, 2), SessionConfig::default())
    }

    fn key(code: KeyCode) -> SessionEvent {
        SessionEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn typing_through_keys() {
        let mut app = app("if x:\n  y");
        for c in "if x:".chars() {
            assert!(app.handle_event(key(KeyCode::Char(c))));
        }
        app.handle_event(key(KeyCode::Enter));
        app.handle_event(key(KeyCode::Tab));
        app.handle_event(key(KeyCode::Char('y')));

        assert_eq!(app.tracker.phase(), Phase::Ended);
        assert_eq!(app.tracker.error_chars(), 0);
        assert!(!app.caret_visible());
    }

    #[test]
    fn escape_resets_session() {
        let mut app = app("abc");
        app.handle_event(key(KeyCode::Char('a')));
        app.handle_event(key(KeyCode::Esc));

        assert_eq!(app.tracker.phase(), Phase::NotStarted);
        assert_eq!(app.tracker.current_index(), -1);
    }

    #[test]
    fn backspace_deletes() {
        let mut app = app("abc");
        app.handle_event(key(KeyCode::Char('a')));
        assert!(app.handle_event(key(KeyCode::Backspace)));
        assert_eq!(app.tracker.current_index(), 0);
        assert!(!app.handle_event(key(KeyCode::Backspace)));
    }

    #[test]
    fn focus_controls_caret() {
        let mut app = app("abc");
        assert!(app.caret_visible());
        app.handle_event(SessionEvent::FocusLost);
        assert!(!app.caret_visible());
        app.handle_event(SessionEvent::FocusGained);
        assert!(app.caret_visible());
    }

    #[test]
    fn ctrl_c_requests_quit() {
        let mut app = app("abc");
        app.handle_event(SessionEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(app.should_quit);
        assert_eq!(app.tracker.phase(), Phase::NotStarted);
    }

    #[test]
    fn ticks_do_not_redraw() {
        let mut app = app("abc");
        assert!(!app.handle_event(SessionEvent::Tick));
        assert!(app.handle_event(SessionEvent::Resize));
    }

    #[test]
    fn closed_input_leaves_session_untouched() {
        let mut app = app("abc");
        app.handle_event(key(KeyCode::Char('a')));
        assert!(!app.handle_event(SessionEvent::Closed));
        assert_eq!(app.tracker.current_index(), 1);
        assert!(!app.should_quit);
    }
}
