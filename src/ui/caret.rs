use ratatui::layout::{Position, Rect};
use unicode_width::UnicodeWidthChar;

/// Row and column of the next character to type, in text coordinates.
/// Before the first keystroke the caret sits at the origin.
pub fn locate(chars: &[char], cursor: Option<usize>) -> (u16, u16) {
    let end = cursor.unwrap_or(0).min(chars.len());
    let (mut row, mut col) = (0u16, 0u16);

    for &c in &chars[..end] {
        if c == '\n' {
            row = row.saturating_add(1);
            col = 0;
        } else {
            col = col.saturating_add(c.width().unwrap_or(0) as u16);
        }
    }

    (row, col)
}

/// First text row to show so that `caret_row` stays inside a block of
/// `height` rows, kept roughly in the middle once the text scrolls
pub fn row_offset(caret_row: u16, height: u16) -> u16 {
    caret_row.saturating_sub(height / 2)
}

/// First text column to show. Lines are never wrapped; the view only
/// shifts sideways once the caret would leave a block of `width` columns,
/// and then puts it in the middle.
pub fn column_offset(caret_col: u16, width: u16) -> u16 {
    if caret_col < width {
        0
    } else {
        caret_col - width / 2
    }
}

/// `(row, column)` scroll for a caret at `caret` inside `area`, in the order
/// `Paragraph::scroll` takes it
pub fn scroll_offset(caret: (u16, u16), area: Rect) -> (u16, u16) {
    (
        row_offset(caret.0, area.height),
        column_offset(caret.1, area.width),
    )
}

/// Screen cell of the caret inside `area`, or None if it falls outside
pub fn screen_position(area: Rect, caret: (u16, u16), scroll: (u16, u16)) -> Option<Position> {
    let y = caret.0.checked_sub(scroll.0)?;
    let x = caret.1.checked_sub(scroll.1)?;
    if y >= area.height || x >= area.width {
        return None;
    }
    Some(Position::new(area.x + x, area.y + y))
}
