use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,
    Submit,

    // Input box editing
    InputChar(char),
    Paste(String), // Bracketed paste - preserves newlines
    Backspace,
    Delete,
    DeleteWordBack,
    CursorLeft,
    CursorRight,
    CursorWordLeft,
    CursorWordRight,
    CursorHome,
    CursorEnd,
    CursorUp,
    CursorDown,

    // Message list scrolling
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,
    ScrollToBottom, // Also re-enables stick-to-bottom

    Resize,
}

/// Map a key press to a `TuiEvent`. Key releases are dropped.
pub fn translate_key(key_event: KeyEvent) -> Option<TuiEvent> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
    match (key_event.modifiers, key_event.code) {
        (_, KeyCode::Char('c')) if ctrl => Some(TuiEvent::Quit),
        // Ctrl+J inserts newline (ASCII LF; the fallback where Shift+Enter isn't reported)
        (_, KeyCode::Char('j')) if ctrl => Some(TuiEvent::InputChar('\n')),
        (_, KeyCode::Char('w')) if ctrl => Some(TuiEvent::DeleteWordBack),
        (_, KeyCode::Char(_)) if ctrl || key_event.modifiers.contains(KeyModifiers::ALT) => None,
        (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),

        // Shift+Enter is a newline, plain Enter sends
        (m, KeyCode::Enter) if m.contains(KeyModifiers::SHIFT) => Some(TuiEvent::InputChar('\n')),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),

        (_, KeyCode::Esc) => Some(TuiEvent::Quit),
        (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
        (_, KeyCode::Delete) => Some(TuiEvent::Delete),
        (_, KeyCode::Left) if ctrl => Some(TuiEvent::CursorWordLeft),
        (_, KeyCode::Right) if ctrl => Some(TuiEvent::CursorWordRight),
        (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
        (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
        (_, KeyCode::Up) if ctrl => Some(TuiEvent::ScrollUp),
        (_, KeyCode::Down) if ctrl => Some(TuiEvent::ScrollDown),
        (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
        (_, KeyCode::Home) => Some(TuiEvent::CursorHome),
        (_, KeyCode::End) if ctrl => Some(TuiEvent::ScrollToBottom),
        (_, KeyCode::End) => Some(TuiEvent::CursorEnd),
        (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
        (_, KeyCode::PageDown) => Some(TuiEvent::ScrollPageDown),
        _ => None,
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    let translated = match event::read()? {
        Event::Key(key_event) => {
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            translate_key(key_event)
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        // Terminals paste CRLF line endings; the buffer only ever holds '\n'
        Event::Paste(data) => Some(TuiEvent::Paste(data.replace("\r\n", "\n").replace('\r', "\n"))),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    };
    Ok(translated)
}
