//! # InputBox Component
//!
//! The message composer.
//!
//! ## Responsibilities
//!
//! - Capture text input (typing, paste, Shift+Enter newlines)
//! - Handle editing (backspace, delete, cursor and word movement)
//! - Handle submission (Enter): trims, refuses blank text, clears itself
//! - Show whether sending is possible (the "Send" hint dims when blank)
//!
//! ## State Management
//!
//! The buffer is internal state. Cursor position and scroll state are
//! encapsulated in `CursorState`. The box never talks to the chat state
//! directly; it emits `InputEvent::Submit` and the event loop forwards it.

mod cursor;
mod text_wrap;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::CursorState;
use text_wrap::{
    MAX_VISIBLE_LINES, VERTICAL_OVERHEAD, inner_width, next_char_boundary, next_word_boundary,
    prev_char_boundary, prev_word_boundary, wrap_line_count, wrap_options,
};

pub const PLACEHOLDER: &str = "Type a message... (Enter to send, Shift+Enter for new line)";
pub const SEND_HINT: &str = " Send ⏎ ";

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the text (Enter pressed). Already trimmed, never empty.
    Submit(String),
    /// Buffer or cursor changed
    ContentChanged,
}

/// Text input component.
///
/// # State
///
/// - `buffer`: Current text being typed, kept verbatim (untrimmed)
/// - `cursor`: Cursor position, scroll offset, and cached width (see `CursorState`)
pub struct InputBox {
    pub buffer: String,
    cursor: CursorState,
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: CursorState::new(),
        }
    }

    /// Whether Enter would send anything. False for empty or whitespace-only text.
    pub fn can_submit(&self) -> bool {
        !self.buffer.trim().is_empty()
    }

    /// Height needed for the current buffer, clamped to
    /// `[1 + VERTICAL_OVERHEAD, MAX_VISIBLE_LINES + VERTICAL_OVERHEAD]`.
    pub fn calculate_height(&self, content_width: u16) -> u16 {
        let width = inner_width(content_width);
        let content_lines = wrap_line_count(&self.buffer, width);
        content_lines.min(MAX_VISIBLE_LINES) + VERTICAL_OVERHEAD
    }

    /// Wrapped lines from the current scroll offset, at most `MAX_VISIBLE_LINES`.
    fn visible_text(&self, content_width: u16) -> String {
        let width = inner_width(content_width);
        if width == 0 {
            return String::new();
        }

        let lines = textwrap::wrap(&self.buffer, wrap_options(width));
        let start = (self.cursor.scroll_offset as usize).min(lines.len());
        let end = (start + MAX_VISIBLE_LINES as usize).min(lines.len());

        lines[start..end].join("\n")
    }

    fn render_scrollbar(&self, frame: &mut Frame, area: Rect) {
        use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

        let width = inner_width(area.width);
        let total_lines = wrap_line_count(&self.buffer, width);

        if total_lines <= MAX_VISIBLE_LINES {
            return;
        }

        // ScrollbarState content_length is max scrollable position, not total items
        let max_scroll = total_lines.saturating_sub(MAX_VISIBLE_LINES);

        let mut scrollbar_state = ScrollbarState::default()
            .content_length(max_scroll as usize)
            .position(self.cursor.scroll_offset as usize);

        let scrollbar_area = Rect {
            x: area.x + area.width.saturating_sub(1),
            y: area.y + 1,
            width: 1,
            height: area.height.saturating_sub(2),
        };

        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            scrollbar_area,
            &mut scrollbar_state,
        );
    }

    fn send_hint(&self) -> Line<'static> {
        let style = if self.can_submit() {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        };
        Line::styled(SEND_HINT, style).right_aligned()
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.cursor.last_content_width = area.width;
        self.cursor.update_scroll_offset(&self.buffer, area.width);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title("Message")
            .title_bottom(self.send_hint())
            .padding(Padding::horizontal(1));

        let input = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER).style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            Paragraph::new(self.visible_text(area.width)).style(Style::default().fg(Color::Green))
        };

        frame.render_widget(input.block(block), area);
        self.render_scrollbar(frame, area);

        let (cursor_x, cursor_y) = self.cursor.screen_pos(&self.buffer, area);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor.pos, *c);
                self.cursor.pos += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                self.buffer.insert_str(self.cursor.pos, text);
                self.cursor.pos += text.len();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => (self.cursor.pos > 0).then(|| {
                let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(prev..self.cursor.pos);
                self.cursor.pos = prev;
                InputEvent::ContentChanged
            }),
            TuiEvent::DeleteWordBack => (self.cursor.pos > 0).then(|| {
                let start = prev_word_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(start..self.cursor.pos);
                self.cursor.pos = start;
                InputEvent::ContentChanged
            }),
            TuiEvent::Delete => (self.cursor.pos < self.buffer.len()).then(|| {
                let next = next_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(self.cursor.pos..next);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorLeft => (self.cursor.pos > 0).then(|| {
                self.cursor.pos = prev_char_boundary(&self.buffer, self.cursor.pos);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorRight => (self.cursor.pos < self.buffer.len()).then(|| {
                self.cursor.pos = next_char_boundary(&self.buffer, self.cursor.pos);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorWordLeft => (self.cursor.pos > 0).then(|| {
                self.cursor.pos = prev_word_boundary(&self.buffer, self.cursor.pos);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorWordRight => (self.cursor.pos < self.buffer.len()).then(|| {
                self.cursor.pos = next_word_boundary(&self.buffer, self.cursor.pos);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorHome => {
                let line_start = self.buffer[..self.cursor.pos]
                    .rfind('\n')
                    .map(|i| i + 1)
                    .unwrap_or(0);
                (self.cursor.pos != line_start).then(|| {
                    self.cursor.pos = line_start;
                    InputEvent::ContentChanged
                })
            }
            TuiEvent::CursorEnd => {
                let line_end = self.buffer[self.cursor.pos..]
                    .find('\n')
                    .map(|i| self.cursor.pos + i)
                    .unwrap_or(self.buffer.len());
                (self.cursor.pos != line_end).then(|| {
                    self.cursor.pos = line_end;
                    InputEvent::ContentChanged
                })
            }
            TuiEvent::CursorUp => self
                .cursor
                .move_vertically(&self.buffer, -1, self.cursor.last_content_width)
                .then_some(InputEvent::ContentChanged),
            TuiEvent::CursorDown => self
                .cursor
                .move_vertically(&self.buffer, 1, self.cursor.last_content_width)
                .then_some(InputEvent::ContentChanged),
            TuiEvent::Submit => {
                if !self.can_submit() {
                    return None;
                }
                let text = std::mem::take(&mut self.buffer).trim().to_string();
                self.cursor.reset();
                Some(InputEvent::Submit(text))
            }
            _ => None,
        }
    }
}
