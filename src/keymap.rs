use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks of the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Insert(String),
    Delete { extended: bool },
    Reset,
    Quit,
    Ignore,
}

/// Translate a terminal key event. Enter types a newline and Tab types
/// `tab_width` spaces, matching how code is laid out in the target text.
pub fn map_key(key: KeyEvent, tab_width: usize) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::Ignore;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Esc => Action::Reset,
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => Action::Quit,
        KeyCode::Char('w') if ctrl => Action::Delete { extended: true },
        // a raw 0x08 backspace arrives as ctrl+h
        KeyCode::Char('h') if ctrl && !alt => Action::Delete { extended: false },
        KeyCode::Backspace => Action::Delete {
            extended: ctrl || alt,
        },
        KeyCode::Enter => Action::Insert("\n".to_string()),
        KeyCode::Tab => Action::Insert(" ".repeat(tab_width)),
        // ctrl+alt is how AltGr arrives on some platforms
        KeyCode::Char(_) if ctrl != alt => Action::Ignore,
        KeyCode::Char(c) => Action::Insert(c.to_string()),
        _ => Action::Ignore,
    }
}
