//! Pure text wrapping and boundary helpers for the InputBox.
//!
//! Stateless; nothing here knows about InputBox or CursorState.

/// Borders (2) + one column of padding per side
pub(super) const HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom borders consumed vertically
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// Maximum visible content lines before internal scrolling kicks in
pub(super) const MAX_VISIBLE_LINES: u16 = 5;
/// Columns from the area's left edge to the first content column (border + padding)
pub(super) const CONTENT_OFFSET_X: u16 = 2;
/// Rows from the area's top edge to the first content row (border)
pub(super) const CONTENT_OFFSET_Y: u16 = 1;

/// Build textwrap options configured for the input box inner width.
pub(super) fn wrap_options(inner_width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(inner_width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Inner content width after borders and padding. 0 if the area is too narrow.
pub(super) fn inner_width(content_width: u16) -> u16 {
    content_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Count wrapped lines, including the empty line after a trailing newline
/// (textwrap doesn't always emit one).
pub(super) fn wrap_line_count(text: &str, width: u16) -> u16 {
    if width == 0 || text.is_empty() {
        return 1;
    }

    let lines = textwrap::wrap(text, wrap_options(width));
    let mut count = (lines.len() as u16).max(1);

    if text.ends_with('\n') && !lines.last().is_some_and(|l| l.is_empty()) {
        count += 1;
    }

    count
}

pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Start of the word before `pos`: skip separators backwards, then the word
/// itself (readline `backward-word`).
pub(super) fn prev_word_boundary(text: &str, pos: usize) -> usize {
    let mut chars = text[..pos].char_indices().rev().peekable();

    while chars.peek().is_some_and(|&(_, c)| !is_word_char(c)) {
        chars.next();
    }

    let mut boundary = 0;
    while let Some(&(i, c)) = chars.peek() {
        if !is_word_char(c) {
            boundary = i + c.len_utf8();
            break;
        }
        boundary = i;
        chars.next();
    }

    boundary
}

/// End of the word after `pos` (readline `forward-word`).
pub(super) fn next_word_boundary(text: &str, pos: usize) -> usize {
    let mut chars = text[pos..].char_indices().peekable();

    while chars.peek().is_some_and(|&(_, c)| !is_word_char(c)) {
        chars.next();
    }
    while chars.peek().is_some_and(|&(_, c)| is_word_char(c)) {
        chars.next();
    }

    chars.peek().map(|&(i, _)| pos + i).unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_line_count_edge_cases() {
        assert_eq!(wrap_line_count("", 40), 1);
        assert_eq!(wrap_line_count("hi", 0), 1);
        assert_eq!(wrap_line_count("hi", 40), 1);
    }

    #[test]
    fn wrap_line_count_counts_newlines() {
        assert_eq!(wrap_line_count("one\ntwo\nthree", 40), 3);
        // Shift+Enter at the end opens a fresh, empty line
        assert_eq!(wrap_line_count("one\n", 40), 2);
    }

    #[test]
    fn wrap_line_count_wraps_long_words() {
        // 12 chars into 4 columns -> 3 lines
        assert_eq!(wrap_line_count("abcdefghijkl", 4), 3);
        assert_eq!(wrap_line_count("abcdefghijkl\n", 4), 4);
    }

    #[test]
    fn char_boundaries_respect_multibyte() {
        let s = "añb"; // 'ñ' is 2 bytes at offset 1
        assert_eq!(prev_char_boundary(s, 4), 3);
        assert_eq!(prev_char_boundary(s, 3), 1);
        assert_eq!(next_char_boundary(s, 1), 3);
        assert_eq!(next_char_boundary(s, 3), 4);
    }

    #[test]
    fn char_boundaries_at_edges() {
        assert_eq!(prev_char_boundary("ab", 1), 0);
        assert_eq!(next_char_boundary("ab", 1), 2);
    }

    #[test]
    fn prev_word_skips_separators_then_word() {
        assert_eq!(prev_word_boundary("see you soon", 12), 8);
        assert_eq!(prev_word_boundary("see you  ", 9), 4);
        assert_eq!(prev_word_boundary("re:lunch", 8), 3);
        assert_eq!(prev_word_boundary("hey", 0), 0);
    }

    #[test]
    fn next_word_skips_separators_then_word() {
        assert_eq!(next_word_boundary("see you soon", 0), 3);
        assert_eq!(next_word_boundary("see you soon", 3), 7);
        assert_eq!(next_word_boundary("snake_case word", 0), 10);
        assert_eq!(next_word_boundary("end", 3), 3);
    }
}
