pub mod caret;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use crate::{app::App, tracker::CharState};

const HORIZONTAL_MARGIN: u16 = 2;
const VERTICAL_MARGIN: u16 = 1;

/// Screen regions of the practice view
struct Regions {
    header: Rect,
    code: Rect,
    metrics: Rect,
}

fn regions(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(2), // title and key help
            Constraint::Min(3),    // code block
            Constraint::Length(1), // metrics
        ])
        .split(area);

    Regions {
        header: chunks[0],
        code: chunks[1],
        metrics: chunks[2],
    }
}

fn code_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title} "))
}

/// Draw the practice view and place the terminal cursor on the caret
pub fn draw(app: &App, f: &mut Frame) {
    let area = f.area();
    f.render_widget(app, area);

    if let Some(pos) = caret_position(app, area) {
        f.set_cursor_position(pos);
    }
}

/// Where the caret goes for a frame of size `area`, or None when it is hidden
pub fn caret_position(app: &App, area: Rect) -> Option<Position> {
    if !app.caret_visible() {
        return None;
    }
    let inner = code_block(&app.title).inner(regions(area).code);
    let at = caret::locate(app.tracker.chars(), app.tracker.cursor());
    caret::screen_position(inner, at, caret::scroll_offset(at, inner))
}

fn char_styles() -> [Style; 3] {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    [
        // untouched
        Style::default().add_modifier(Modifier::DIM),
        // correct
        bold,
        // incorrect
        bold.fg(Color::Red),
    ]
}

fn style_for(state: CharState, styles: &[Style; 3]) -> Style {
    match state {
        CharState::Untouched => styles[0],
        CharState::Correct => styles[1],
        CharState::Incorrect => styles[2],
    }
}

/// One styled line per line of the target text. Wrong whitespace is made
/// visible and the next character to type is underlined.
pub fn code_lines(app: &App) -> Vec<Line<'static>> {
    let styles = char_styles();
    let tracker = &app.tracker;
    let cursor = tracker.cursor().unwrap_or(0);
    let show_cursor = !tracker.has_finished();

    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();

    for (idx, (&c, &state)) in tracker.chars().iter().zip(tracker.states()).enumerate() {
        let mut style = style_for(state, &styles);
        if show_cursor && idx == cursor {
            style = style.add_modifier(Modifier::UNDERLINED);
        }

        match (c, state) {
            ('\n', CharState::Incorrect) => spans.push(Span::styled("↵", style)),
            ('\n', _) if show_cursor && idx == cursor => spans.push(Span::styled(" ", style)),
            ('\n', _) => {}
            (' ', CharState::Incorrect) => spans.push(Span::styled("·", style)),
            (c, _) => spans.push(Span::styled(c.to_string(), style)),
        }

        if c == '\n' {
            lines.push(Line::from(std::mem::take(&mut spans)));
        }
    }
    lines.push(Line::from(spans));

    lines
}

/// Counters are always shown; speed, accuracy and duration once the text is done
pub fn metrics_line(app: &App) -> Line<'static> {
    let tracker = &app.tracker;
    let mut spans = Vec::new();

    if let Some(results) = tracker.results() {
        spans.push(Span::styled(
            format!("WPM: {}", results.wpm),
            Style::default().fg(Color::Green),
        ));
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("Accuracy: {:.2}%", results.accuracy),
            Style::default().fg(Color::Blue),
        ));
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("Duration: {}s", results.duration_secs),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::raw("  "));
    }

    spans.push(Span::raw(format!(
        "Current Index: {}  Correct Characters: {}  Error Characters: {}",
        tracker.current_index(),
        tracker.correct_chars(),
        tracker.error_chars()
    )));

    Line::from(spans)
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let regions = regions(area);

        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let help_style = Style::default().add_modifier(Modifier::DIM | Modifier::ITALIC);

        Paragraph::new(vec![
            Line::from(Span::styled("Typing Practice using Code", bold_style)),
            Line::from(Span::styled(
                "(esc) reset  (ctrl+backspace) delete word  (ctrl+c) quit",
                help_style,
            )),
        ])
        .render(regions.header, buf);

        let block = code_block(&self.title);
        let inner = block.inner(regions.code);
        block.render(regions.code, buf);

        // no wrapping: long lines scroll sideways with the caret instead
        let at = caret::locate(self.tracker.chars(), self.tracker.cursor());
        Paragraph::new(code_lines(self))
            .scroll(caret::scroll_offset(at, inner))
            .render(inner, buf);

        Paragraph::new(metrics_line(self)).render(regions.metrics, buf);
    }
}
