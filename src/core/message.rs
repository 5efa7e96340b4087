//! # Messages
//!
//! One chat utterance. Messages are created once by `update()` and never
//! edited or removed afterwards.

use chrono::{DateTime, Local};

#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub sender: String,
    pub timestamp: DateTime<Local>,
    /// True when the local user wrote this message.
    pub is_own: bool,
}

impl Message {
    /// Build a message authored by the local user, stamped with the current time.
    pub fn own(text: impl Into<String>, sender: impl Into<String>) -> Self {
        Self {
            id: new_message_id(),
            text: text.into(),
            sender: sender.into(),
            timestamp: Local::now(),
            is_own: true,
        }
    }
}

/// Generate a new UUID v4 message ID.
///
/// Random IDs stay unique even when two messages land in the same clock tick.
pub fn new_message_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn own_message_is_flagged_and_stamped() {
        let before = Local::now();
        let msg = Message::own("hello", "You");
        assert!(msg.is_own);
        assert_eq!(msg.text, "hello");
        assert_eq!(msg.sender, "You");
        assert!(msg.timestamp >= before);
    }

    #[test]
    fn ids_are_unique_back_to_back() {
        let a = Message::own("a", "You");
        let b = Message::own("b", "You");
        assert_ne!(a.id, b.id);
    }
}
