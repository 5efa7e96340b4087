//! Cursor position tracking and navigation for the InputBox.
//!
//! `CursorState` owns the cursor byte offset, scroll offset, and cached width.
//! Navigation methods take `buffer: &str` explicitly; the text itself is
//! owned by `InputBox`.

use super::text_wrap::{
    CONTENT_OFFSET_X, CONTENT_OFFSET_Y, MAX_VISIBLE_LINES, inner_width, wrap_line_count,
    wrap_options,
};
use ratatui::layout::Rect;
use std::borrow::Cow;

/// Byte offset in `buffer` where each wrapped line begins.
///
/// textwrap drops the spaces at a soft wrap and the `'\n'` at a hard break,
/// so both are skipped between consecutive lines.
fn line_starts(buffer: &str, lines: &[Cow<'_, str>]) -> Vec<usize> {
    let bytes = buffer.as_bytes();
    let mut starts = Vec::with_capacity(lines.len());
    let mut start = 0;
    for line in lines {
        starts.push(start);
        let mut next = (start + line.len()).min(bytes.len());
        while next < bytes.len() && bytes[next] == b' ' {
            next += 1;
        }
        if next < bytes.len() && bytes[next] == b'\n' {
            next += 1;
        }
        start = next;
    }
    starts
}

pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// First visible wrapped line (0 when content fits in viewport)
    pub scroll_offset: u16,
    /// Area width from the last render (used for vertical movement between renders)
    pub last_content_width: u16,
}

impl CursorState {
    const DEFAULT_WIDTH: u16 = 80;

    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
            last_content_width: Self::DEFAULT_WIDTH,
        }
    }

    /// Back to the start of an empty buffer (after submit).
    pub fn reset(&mut self) {
        self.pos = 0;
        self.scroll_offset = 0;
    }

    /// Move to the wrapped line above (`direction < 0`) or below, keeping the column.
    ///
    /// Returns `false` when already on the first/last line.
    pub fn move_vertically(&mut self, buffer: &str, direction: i16, content_width: u16) -> bool {
        let width = inner_width(content_width);
        if width == 0 || buffer.is_empty() {
            return false;
        }

        let lines = textwrap::wrap(buffer, wrap_options(width));
        if lines.is_empty() {
            return false;
        }

        let starts = line_starts(buffer, &lines);
        let current_line_idx = starts.iter().rposition(|&start| start <= self.pos).unwrap_or(0);
        let column_in_line = self.pos - starts[current_line_idx];

        let target_line_idx = if direction < 0 {
            if current_line_idx == 0 {
                return false;
            }
            current_line_idx - 1
        } else {
            if current_line_idx + 1 >= lines.len() {
                return false;
            }
            current_line_idx + 1
        };

        let target_line = &lines[target_line_idx];
        let mut target = starts[target_line_idx] + column_in_line.min(target_line.len());
        // Columns are bytes; never land inside a multibyte char
        while !buffer.is_char_boundary(target) {
            target -= 1;
        }
        self.pos = target;

        true
    }

    /// Which wrapped line (0-based) the cursor is on.
    pub fn calculate_line(&self, buffer: &str, content_width: u16) -> u16 {
        let width = inner_width(content_width);
        if width == 0 {
            return 0;
        }

        let text_before_cursor = &buffer[..self.pos];
        let lines = textwrap::wrap(text_before_cursor, wrap_options(width));
        let mut cursor_line = lines.len().saturating_sub(1) as u16;

        if self.pos > 0
            && buffer.as_bytes()[self.pos - 1] == b'\n'
            && !lines.last().is_some_and(|l| l.is_empty())
        {
            cursor_line += 1;
        }

        cursor_line
    }

    /// Keep the cursor's line inside the visible window.
    pub fn update_scroll_offset(&mut self, buffer: &str, content_width: u16) {
        let width = inner_width(content_width);
        let total_lines = wrap_line_count(buffer, width);

        if total_lines <= MAX_VISIBLE_LINES {
            self.scroll_offset = 0;
            return;
        }

        let cursor_line = self.calculate_line(buffer, content_width);

        if cursor_line < self.scroll_offset {
            self.scroll_offset = cursor_line;
        } else if cursor_line >= self.scroll_offset + MAX_VISIBLE_LINES {
            self.scroll_offset = cursor_line.saturating_sub(MAX_VISIBLE_LINES - 1);
        }
    }

    /// Screen (column, row) of the cursor inside `area`.
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let width = inner_width(area.width);
        if width == 0 {
            return (area.x + CONTENT_OFFSET_X.min(area.width), area.y + CONTENT_OFFSET_Y);
        }

        let options = wrap_options(width);
        let text_before_cursor = &buffer[..self.pos];
        let cursor_line = self.calculate_line(buffer, area.width);

        // Count chars since the last newline; textwrap trims trailing spaces,
        // so wrapped line lengths would drop them.
        let last_newline = text_before_cursor.rfind('\n').map(|pos| pos + 1).unwrap_or(0);
        let logical_line_to_cursor = &text_before_cursor[last_newline..];
        let logical_line_wrapped = textwrap::wrap(logical_line_to_cursor, options);

        let cursor_col = if logical_line_wrapped.len() <= 1 {
            logical_line_to_cursor.chars().count() as u16
        } else {
            let chars_in_prev_segments: usize = logical_line_wrapped
                .iter()
                .take(logical_line_wrapped.len() - 1)
                .map(|seg| seg.chars().count())
                .sum();
            logical_line_to_cursor
                .chars()
                .count()
                .saturating_sub(chars_in_prev_segments) as u16
        };

        let visible_line = cursor_line.saturating_sub(self.scroll_offset);

        let screen_col = area.x + CONTENT_OFFSET_X + cursor_col.min(width);
        let screen_row = area.y + CONTENT_OFFSET_Y + visible_line;

        (screen_col, screen_row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // width 14 → inner width 10
    const WIDTH: u16 = 14;

    #[test]
    fn move_down_then_up_keeps_column() {
        let buffer = "first\nsecond";
        let mut cursor = CursorState::new();
        cursor.pos = 2;

        assert!(cursor.move_vertically(buffer, 1, WIDTH));
        assert_eq!(cursor.pos, 8); // "se|cond"

        assert!(cursor.move_vertically(buffer, -1, WIDTH));
        assert_eq!(cursor.pos, 2);
    }

    #[test]
    fn move_clamps_to_shorter_line() {
        let buffer = "a much longer\nhi";
        let mut cursor = CursorState::new();
        cursor.pos = 9;
        // "a much" wraps separately from "longer" at width 10
        assert!(cursor.move_vertically(buffer, 1, WIDTH));
        assert!(cursor.pos <= buffer.len());
    }

    #[test]
    fn move_across_soft_wrap_keeps_column() {
        // Wraps as "aaaa bbbb" | "cccc"; the space at the wrap isn't on either line
        let buffer = "aaaa bbbb cccc";
        let mut cursor = CursorState::new();
        cursor.pos = 2;

        assert!(cursor.move_vertically(buffer, 1, WIDTH));
        assert_eq!(cursor.pos, 12); // "cc|cc"

        assert!(cursor.move_vertically(buffer, -1, WIDTH));
        assert_eq!(cursor.pos, 2);
    }

    #[test]
    fn move_across_blank_line() {
        let buffer = "ab\n\ncd";
        let mut cursor = CursorState::new();
        cursor.pos = 1;

        assert!(cursor.move_vertically(buffer, 1, WIDTH));
        assert_eq!(cursor.pos, 3); // column clamped on the blank line
        assert!(cursor.move_vertically(buffer, 1, WIDTH));
        assert_eq!(cursor.pos, 4); // "|cd"
    }

    #[test]
    fn line_starts_skip_wrap_spaces_and_newlines() {
        let buffer = "aaaa bbbb cccc\nhi";
        let lines = textwrap::wrap(buffer, wrap_options(10));
        assert_eq!(line_starts(buffer, &lines), vec![0, 10, 15]);
    }

    #[test]
    fn move_at_boundaries_returns_false() {
        let mut cursor = CursorState::new();
        assert!(!cursor.move_vertically("one line", -1, WIDTH));
        assert!(!cursor.move_vertically("one line", 1, WIDTH));
        assert!(!cursor.move_vertically("", 1, WIDTH));
    }

    #[test]
    fn line_after_trailing_newline() {
        let mut cursor = CursorState::new();
        cursor.pos = 3;
        assert_eq!(cursor.calculate_line("hi\n", WIDTH), 1);
    }

    #[test]
    fn screen_pos_accounts_for_border_and_padding() {
        let area = Rect::new(10, 5, WIDTH, 4);
        let mut cursor = CursorState::new();
        assert_eq!(cursor.screen_pos("", area), (12, 6));

        cursor.pos = 3;
        assert_eq!(cursor.screen_pos("hey", area), (15, 6));

        cursor.pos = 4;
        assert_eq!(cursor.screen_pos("hey\n", area), (12, 7));
    }

    #[test]
    fn scroll_follows_cursor_past_visible_lines() {
        let buffer = "1\n2\n3\n4\n5\n6\n7";
        let mut cursor = CursorState::new();
        cursor.pos = buffer.len();
        cursor.update_scroll_offset(buffer, WIDTH);
        assert_eq!(cursor.scroll_offset, 2);

        cursor.pos = 0;
        cursor.update_scroll_offset(buffer, WIDTH);
        assert_eq!(cursor.scroll_offset, 0);
    }
}
