//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::core::state::ChatRoom;
use crate::core::user::default_roster;

/// Creates a test room: "You" with the Alice/Bob/Charlie roster and a 24h clock.
pub fn test_room() -> ChatRoom {
    ChatRoom::new("You".to_string(), default_roster())
}

/// Flattens a test terminal's buffer into one string, row after row.
pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}
