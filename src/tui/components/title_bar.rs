//! # TitleBar Component
//!
//! One-line header above the conversation.
//!
//! ## Responsibilities
//!
//! - Display the room title
//! - Display who you're chatting as
//! - Show "↓ New" when the user scrolled up and newer messages are below
//!
//! ## Design
//!
//! Stateless and props-only. The props come from different owners:
//! `room_title`/`display_name` from core state, `has_unseen_content` from the
//! message list's scroll state. The TitleBar doesn't care where they come from.
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(room.room_title.clone(), room.display_name.clone(), false);
//! title_bar.render(frame, title_area);
//! ```

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub const NEW_INDICATOR: &str = "↓ New";

pub struct TitleBar {
    pub room_title: String,
    pub display_name: String,
    /// Whether there's content below the current scroll position
    pub has_unseen_content: bool,
}

impl TitleBar {
    pub fn new(room_title: String, display_name: String, has_unseen_content: bool) -> Self {
        Self {
            room_title,
            display_name,
            has_unseen_content,
        }
    }

    fn line(&self) -> Line<'_> {
        let mut spans = vec![
            Span::styled(
                self.room_title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" | chatting as {}", self.display_name)),
        ];
        if self.has_unseen_content {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(NEW_INDICATOR, Style::default().fg(Color::Yellow)));
        }
        Line::from(spans)
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.line(), area);
    }
}
