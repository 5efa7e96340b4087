//! # UserList Component
//!
//! Sidebar roster: who is in the room and who is online.
//!
//! Stateless and props-only. The online count in the header is recomputed
//! from the users on every render rather than cached.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem};

use crate::core::user::{User, online_count};
use crate::tui::component::Component;

const ONLINE_MARK: &str = "● ";
const OFFLINE_MARK: &str = "○ ";

pub struct UserList<'a> {
    pub users: &'a [User],
}

impl<'a> UserList<'a> {
    pub fn new(users: &'a [User]) -> Self {
        Self { users }
    }

    pub fn header(&self) -> String {
        format!("Online Users ({})", online_count(self.users))
    }
}

fn user_line(user: &User) -> Line<'_> {
    let (mark, mark_style, name_style) = if user.is_online {
        (
            ONLINE_MARK,
            Style::default().fg(Color::Green),
            Style::default(),
        )
    } else {
        (
            OFFLINE_MARK,
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
        )
    };
    Line::from(vec![
        Span::styled(mark, mark_style),
        Span::styled(user.name.as_str(), name_style),
    ])
}

impl<'a> Component for UserList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .users
            .iter()
            .map(|user| ListItem::new(user_line(user)))
            .collect();

        let list = List::new(items).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .title(self.header()),
        );

        frame.render_widget(list, area);
    }
}
