//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core `Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! ```text
//! crossterm event → TuiEvent → dispatch() ─┬─ scroll → MessageListState
//!                                          └─ edit/submit → InputBox
//!                                                 │ InputEvent::Submit(text)
//!                                                 ▼
//!                                  update(room, Action::Submit(text))
//! ```
//!
//! ## Redraw Strategy
//!
//! Everything is synchronous, so the loop only redraws after an event
//! (or a resize). While idle it blocks in `poll` for up to 500ms.

mod component;
pub mod components;
mod event;
mod ui;

pub use component::{Component, EventHandler};
pub use event::{TuiEvent, translate_key};
pub use ui::draw_ui;

use log::{info, warn};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::ChatRoom;
use crate::tui::components::{InputBox, InputEvent, MessageListState};
use crate::tui::event::{poll_event_immediate, poll_event_timeout};

/// How long the loop blocks waiting for input before checking again.
const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core chat state)
pub struct TuiState {
    pub message_list: MessageListState,
    pub input_box: InputBox,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            message_list: MessageListState::new(),
            input_box: InputBox::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Enable Kitty keyboard protocol unconditionally (allows Shift+Enter detection).
        // Terminals without it ignore the sequence; Ctrl+J still inserts a newline there.
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide
        );
    }
}

/// Keep going without `what` when it fails, leaving a trace in the log.
fn ok_or_warn<T>(result: std::io::Result<T>, what: &str) -> Option<T> {
    result
        .map_err(|e| warn!("Failed to {}: {}", what, e))
        .ok()
}

/// Route one event to the component that owns it, forwarding submits to `update()`.
///
/// Returns the effect of the resulting core update (`Effect::None` when the
/// event stayed inside the TUI).
pub fn dispatch(room: &mut ChatRoom, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    match event {
        TuiEvent::Quit => update(room, Action::Quit),
        TuiEvent::Resize => Effect::None,
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown
        | TuiEvent::ScrollToBottom => {
            tui.message_list.handle_event(event);
            Effect::None
        }
        // Up/Down move inside a multi-line draft; at its edges they scroll the list
        TuiEvent::CursorUp | TuiEvent::CursorDown => {
            if tui.input_box.handle_event(event).is_none() {
                let scroll = if matches!(event, TuiEvent::CursorUp) {
                    TuiEvent::ScrollUp
                } else {
                    TuiEvent::ScrollDown
                };
                tui.message_list.handle_event(&scroll);
            }
            Effect::None
        }
        _ => match tui.input_box.handle_event(event) {
            Some(InputEvent::Submit(text)) => {
                let effect = update(room, Action::Submit(text));
                if effect == Effect::MessageAppended {
                    tui.message_list.follow_newest();
                }
                effect
            }
            Some(InputEvent::ContentChanged) | None => Effect::None,
        },
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut room = ChatRoom::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    // Without the guard Shift+Enter can't be told apart from Enter; Ctrl+J still works
    let _terminal_mode_guard = ok_or_warn(TerminalModeGuard::new(), "enable terminal modes");

    let mut needs_redraw = true; // Force first frame
    let result = loop {
        if needs_redraw {
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &room, &mut tui)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        // Collect the first event plus everything already queued behind it
        let mut events = Vec::new();
        match poll_event_timeout(IDLE_POLL) {
            Ok(Some(event)) => events.push(event),
            Ok(None) => continue,
            Err(e) => break Err(e),
        }
        loop {
            match poll_event_immediate() {
                Ok(Some(event)) => events.push(event),
                Ok(None) => break,
                Err(e) => {
                    warn!("Dropping queued events after read error: {}", e);
                    break;
                }
            }
        }

        needs_redraw = true;
        if events
            .iter()
            .any(|event| dispatch(&mut room, &mut tui, event) == Effect::Quit)
        {
            break Ok(());
        }
    };

    info!("Shutting down after {} messages", room.messages().len());
    ratatui::restore();
    result
}
