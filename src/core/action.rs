//! # Actions
//!
//! Everything that can happen to the chat state becomes an `Action`.
//! User presses Enter with text in the box? That's `Action::Submit(text)`.
//!
//! The `update()` function takes the current state and an action, applies
//! it, and returns an `Effect` telling the event loop what to do next.
//! No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::message::Message;
use crate::core::state::ChatRoom;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Send the given text as a message from the local user.
    Submit(String),
    Quit,
}

/// Follow-up work for the event loop after an `update()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// A message was appended; views should jump to the newest entry.
    MessageAppended,
    Quit,
}

pub fn update(room: &mut ChatRoom, action: Action) -> Effect {
    match action {
        Action::Submit(text) => {
            let text = text.trim();
            if text.is_empty() {
                debug!("Ignoring blank submit");
                return Effect::None;
            }

            let message = Message::own(text, room.display_name.clone());
            info!(
                "Appending message {} ({} chars, #{})",
                message.id,
                message.text.chars().count(),
                room.messages().len() + 1
            );
            room.push_message(message);
            Effect::MessageAppended
        }
        Action::Quit => Effect::Quit,
    }
}
