use std::time::Duration;

use codetype::app::App;
use codetype::runtime::{ChannelEventSource, Runner, SessionEvent};
use codetype::sample::{Sample, SampleName};
use codetype::session::{Phase, SessionConfig};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> SessionEvent {
    SessionEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

/// Key presses that type `text` exactly, using Enter for newlines
fn keys_for(text: &str) -> Vec<SessionEvent> {
    text.chars()
        .map(|c| match c {
            '\n' => key(KeyCode::Enter),
            c => key(KeyCode::Char(c)),
        })
        .collect()
}

fn drive(app: &mut App, events: Vec<SessionEvent>) {
    let (tx, source) = ChannelEventSource::pair();
    for ev in events {
        tx.send(ev).unwrap();
    }
    drop(tx);

    let runner = Runner::new(source, Duration::from_millis(5));

    // the sender is gone, so the runner reports Closed once the queue drains
    loop {
        match runner.step() {
            SessionEvent::Closed => break,
            SessionEvent::Tick => panic!("closed source must not tick"),
            ev => {
                app.handle_event(ev);
            }
        }
    }
}

#[test]
fn headless_typing_flow_completes() {
    let mut app = App::new(Sample::custom("hi", 2), SessionConfig::default());

    drive(&mut app, keys_for("hi"));

    assert_eq!(app.tracker.phase(), Phase::Ended);
    assert_eq!(app.tracker.correct_chars(), 2);
    assert!(app.tracker.results().is_some());
}

#[test]
fn headless_bundled_sample_completes() {
    let sample = Sample::bundled(SampleName::LinkedList, 4).unwrap();
    let text = sample.text.clone();
    let mut app = App::new(
        sample,
        SessionConfig {
            tab_width: 4,
            ..SessionConfig::default()
        },
    );

    drive(&mut app, keys_for(&text));

    assert_eq!(app.tracker.phase(), Phase::Ended);
    assert_eq!(app.tracker.error_chars(), 0);
    assert_eq!(app.tracker.correct_chars(), text.chars().count());
    assert_eq!(app.tracker.accuracy(), 100.0);
}

#[test]
fn headless_pause_on_error_flow() {
    let mut app = App::new(Sample::custom("cat", 2), SessionConfig::default());

    drive(
        &mut app,
        vec![
            key(KeyCode::Char('c')),
            key(KeyCode::Char('x')),
            key(KeyCode::Char('a')),
        ],
    );
    assert_eq!(app.tracker.current_index(), 2);
    assert_eq!(app.tracker.error_chars(), 1);

    drive(
        &mut app,
        vec![
            key(KeyCode::Backspace),
            key(KeyCode::Char('a')),
            key(KeyCode::Char('t')),
        ],
    );
    assert_eq!(app.tracker.phase(), Phase::Ended);
    assert_eq!(app.tracker.error_chars(), 0);
    assert_eq!(app.tracker.correct_chars(), 3);
}

#[test]
fn headless_tab_types_indent() {
    let mut app = App::new(Sample::custom("{\n\tx\n}", 2), SessionConfig::default());

    drive(
        &mut app,
        vec![
            key(KeyCode::Char('{')),
            key(KeyCode::Enter),
            key(KeyCode::Tab),
            key(KeyCode::Char('x')),
            key(KeyCode::Enter),
            key(KeyCode::Char('}')),
        ],
    );

    assert_eq!(app.tracker.phase(), Phase::Ended);
    assert_eq!(app.tracker.error_chars(), 0);
}

#[test]
fn headless_escape_resets_mid_session() {
    let mut app = App::new(Sample::custom("hello", 2), SessionConfig::default());

    let mut events = keys_for("hel");
    events.push(key(KeyCode::Esc));
    drive(&mut app, events);

    assert_eq!(app.tracker.phase(), Phase::NotStarted);
    assert_eq!(app.tracker.current_index(), -1);
    assert_eq!(app.tracker.timing().started_at, None);
}
