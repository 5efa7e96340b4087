use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components follow the React pattern the chat widget is built around:
/// - They receive data via props (struct fields).
/// - Stateful ones borrow their persistent state (`&'a mut State`).
/// - They render to a `Frame` within a given `Rect`.
///
/// `render` takes `&mut self` so a component can update caches or
/// scroll offsets during the render pass, like Ratatui's `StatefulWidget`.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
