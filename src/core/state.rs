//! # Application State
//!
//! Core chat state. This module contains domain data only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! ChatRoom
//! ├── messages: Vec<Message>   // append-only, insertion ordered
//! ├── users: Vec<User>         // seeded once, display-only
//! ├── display_name: String     // sender label for local messages
//! ├── room_title: String       // header text
//! └── clock: ClockFormat       // timestamp rendering
//! ```
//!
//! Messages only change through `update(state, action)` in action.rs.
//! The fields that hold them are private so nothing else can reorder or drop them.

use crate::core::clock::ClockFormat;
use crate::core::config::ResolvedConfig;
use crate::core::message::Message;
use crate::core::user::{self, User};

pub const DEFAULT_DISPLAY_NAME: &str = "You";
pub const DEFAULT_ROOM_TITLE: &str = "Chat Room";

pub struct ChatRoom {
    messages: Vec<Message>,
    users: Vec<User>,
    pub display_name: String,
    pub room_title: String,
    pub clock: ClockFormat,
}

impl ChatRoom {
    pub fn new(display_name: String, users: Vec<User>) -> Self {
        Self {
            messages: Vec::new(),
            users,
            display_name,
            room_title: String::from(DEFAULT_ROOM_TITLE),
            clock: ClockFormat::default(),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            messages: Vec::new(),
            users: config.users.clone(),
            display_name: config.display_name.clone(),
            room_title: config.room_title.clone(),
            clock: config.clock,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn online_count(&self) -> usize {
        user::online_count(&self.users)
    }

    /// Only `update()` appends.
    pub(super) fn push_message(&mut self, message: Message) {
        self.messages.push(message);
    }
}

impl Default for ChatRoom {
    fn default() -> Self {
        Self::new(String::from(DEFAULT_DISPLAY_NAME), user::default_roster())
    }
}
