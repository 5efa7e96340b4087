//! # MessageList Component
//!
//! Scrollable view of the conversation.
//!
//! ## Responsibilities
//!
//! - Display the messages in the order they were sent
//! - Show a placeholder while there are none
//! - Follow the newest message (stick-to-bottom) unless the user scrolled up
//! - Cache message heights so long histories don't re-wrap every frame
//!
//! ## Architecture
//!
//! `MessageList` is a transient component (created each frame) that wraps
//! `&'a mut MessageListState` (persistent state) and the message slice (props).
//!
//! Since `Component::render` takes `&mut self`, we can safely mutate the state
//! (including layout cache and scroll state) during the render pass, aligning
//! with Ratatui's `StatefulWidget` pattern.

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::clock::ClockFormat;
use crate::core::message::Message;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::message::MessageView;
use crate::tui::event::TuiEvent;

pub const EMPTY_PLACEHOLDER: &str = "No messages yet. Start the conversation!";

/// Layout and scroll state for the message list.
/// Must be persisted in the parent TuiState.
pub struct MessageListState {
    /// Scroll offset and view state
    pub scroll_state: ScrollViewState,
    /// Cached layout measurements
    pub layout: LayoutCache,
    /// When true, auto-scroll to bottom on new content
    pub stick_to_bottom: bool,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
    /// Set during render: newer messages exist below the viewport
    unseen_below: bool,
}

impl Default for MessageListState {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            layout: LayoutCache::new(),
            stick_to_bottom: true, // Start attached to bottom
            viewport_height: 0,
            unseen_below: false,
        }
    }

    /// Re-attach to the bottom so the next render shows the newest message.
    pub fn follow_newest(&mut self) {
        self.stick_to_bottom = true;
        self.unseen_below = false;
    }

    /// Whether the user has scrolled up and there's content below the viewport.
    pub fn has_unseen_content(&self) -> bool {
        self.unseen_below
    }

    fn max_offset(&self) -> u16 {
        self.layout.total_height().saturating_sub(self.viewport_height)
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.max_offset();
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position { x: current.x, y: max_y });
        }
    }

    /// Clamp scroll and re-engage auto-scroll if the user has reached the bottom.
    pub fn repin_if_at_bottom(&mut self) {
        let max_y = self.max_offset();
        let current = self.scroll_state.offset();
        if current.y >= max_y {
            self.stick_to_bottom = true;
            self.scroll_state.set_offset(Position { x: current.x, y: max_y });
        }
    }
}

/// Scrollable conversation view component.
/// Created fresh each frame with references to state and data.
pub struct MessageList<'a> {
    pub state: &'a mut MessageListState,
    pub messages: &'a [Message],
    pub clock: ClockFormat,
}

impl<'a> MessageList<'a> {
    pub fn new(state: &'a mut MessageListState, messages: &'a [Message], clock: ClockFormat) -> Self {
        Self { state, messages, clock }
    }

    fn render_placeholder(&mut self, frame: &mut Frame, area: Rect) {
        self.state.layout = LayoutCache::new();
        self.state.viewport_height = area.height;
        self.state.unseen_below = false;

        // Vertically centered
        let top = area.y + area.height / 2;
        let line_area = Rect::new(
            area.x,
            top.min(area.bottom().saturating_sub(1)),
            area.width,
            1u16.min(area.height),
        );

        let placeholder = Paragraph::new(EMPTY_PLACEHOLDER)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            );
        frame.render_widget(placeholder, line_area);
    }
}

impl<'a> Component for MessageList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.messages.is_empty() {
            self.render_placeholder(frame, area);
            return;
        }

        let content_width = area.width.saturating_sub(1); // -1 for scrollbar safe area
        let num_messages = self.messages.len();

        // 1. Update layout cache; messages never change, so only new ones need measuring
        let layout = &mut self.state.layout;
        let reusable = layout.reusable_count(num_messages, content_width);
        layout.heights.truncate(reusable);
        for message in self.messages.iter().skip(layout.heights.len()) {
            layout
                .heights
                .push(MessageView::calculate_height(message, content_width));
        }
        layout.rebuild_prefix_heights();
        layout.update_metadata(num_messages, content_width);

        let total_height = layout.total_height();

        // 2. Pin to the newest message, or clamp so we never overscroll past content
        self.state.viewport_height = area.height;
        if self.state.stick_to_bottom {
            let max_y = self.state.max_offset();
            self.state.scroll_state.set_offset(Position { x: 0, y: max_y });
        } else {
            self.state.clamp_scroll();
        }

        let scroll_offset = self.state.scroll_state.offset().y;
        let visible_range = self.state.layout.visible_range(scroll_offset, area.height);

        // 3. Render visible messages into a ScrollView
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = if visible_range.start > 0 {
            self.state.layout.prefix_heights[visible_range.start - 1]
        } else {
            0
        };

        for i in visible_range {
            // Content taller than u16::MAX rows is cut at the bottom of the scroll buffer
            if y_offset >= total_height {
                break;
            }
            let height = self.state.layout.heights[i];
            let rect = Rect::new(0, y_offset, content_width, height);
            scroll_view.render_widget(MessageView::new(&self.messages[i], self.clock), rect);
            y_offset = y_offset.saturating_add(height);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);

        // 4. "↓ New" indicator
        let max_y = self.state.max_offset();
        self.state.unseen_below =
            !self.state.stick_to_bottom && self.state.scroll_state.offset().y < max_y;
    }
}

/// EventHandler is implemented on `MessageListState` rather than `MessageList` because
/// `MessageList` is recreated each frame while scroll position must persist.
impl EventHandler for MessageListState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                self.stick_to_bottom = false;
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.repin_if_at_bottom();
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                self.stick_to_bottom = false;
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.repin_if_at_bottom();
            }
            TuiEvent::ScrollToBottom => self.follow_newest(),
            _ => {}
        }
        None
    }
}

/// Cached layout measurements
pub struct LayoutCache {
    pub heights: Vec<u16>,
    pub prefix_heights: Vec<u16>,
    message_count: usize,
    content_width: u16,
}

impl Default for LayoutCache {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutCache {
    pub fn new() -> Self {
        Self {
            heights: Vec::new(),
            prefix_heights: Vec::new(),
            message_count: 0,
            content_width: 0,
        }
    }

    /// How many cached heights are still valid. Messages are immutable, so
    /// everything cached stays valid until the width changes.
    pub fn reusable_count(&self, message_count: usize, content_width: u16) -> usize {
        if self.content_width != content_width || message_count < self.message_count {
            return 0;
        }
        self.heights.len().min(message_count)
    }

    pub fn update_metadata(&mut self, message_count: usize, content_width: u16) {
        self.message_count = message_count;
        self.content_width = content_width;
    }

    pub fn rebuild_prefix_heights(&mut self) {
        self.prefix_heights = self
            .heights
            .iter()
            .scan(0u16, |acc, &h| {
                *acc = acc.saturating_add(h);
                Some(*acc)
            })
            .collect();
    }

    pub fn total_height(&self) -> u16 {
        self.prefix_heights.last().copied().unwrap_or(0)
    }

    /// Message indices overlapping the viewport, padded by half a viewport each way.
    pub fn visible_range(&self, scroll_offset: u16, viewport_height: u16) -> std::ops::Range<usize> {
        let buffer = viewport_height / 2;
        let buffered_start = scroll_offset.saturating_sub(buffer);
        let buffered_end = scroll_offset
            .saturating_add(viewport_height)
            .saturating_add(buffer);

        let start = self
            .prefix_heights
            .partition_point(|&end| end <= buffered_start);
        let end = self
            .prefix_heights
            .partition_point(|&end| end < buffered_end)
            .saturating_add(1)
            .min(self.prefix_heights.len());

        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::{buffer_text, test_room};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(state: &mut MessageListState, messages: &[Message], width: u16, height: u16) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| {
                MessageList::new(state, messages, ClockFormat::TwentyFourHour).render(f, f.area());
            })
            .unwrap();
        terminal
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let mut state = MessageListState::new();
        let text = buffer_text(&draw(&mut state, &[], 60, 10));
        assert!(text.contains(EMPTY_PLACEHOLDER));
        assert!(!text.contains("You ·"));
        assert!(state.layout.heights.is_empty());
    }

    #[test]
    fn messages_render_in_send_order() {
        let mut room = test_room();
        update(&mut room, Action::Submit("first message".to_string()));
        update(&mut room, Action::Submit("second message".to_string()));

        let mut state = MessageListState::new();
        let text = buffer_text(&draw(&mut state, room.messages(), 60, 20));

        let first = text.find("first message").expect("first rendered");
        let second = text.find("second message").expect("second rendered");
        assert!(first < second);
        assert!(!text.contains(EMPTY_PLACEHOLDER));
    }

    #[test]
    fn sticks_to_newest_when_overflowing() {
        let mut room = test_room();
        for i in 0..20 {
            update(&mut room, Action::Submit(format!("note {i:02}")));
        }

        let mut state = MessageListState::new();
        let text = buffer_text(&draw(&mut state, room.messages(), 40, 9));

        assert!(text.contains("note 19"));
        assert!(!text.contains("note 00"));
        assert!(!state.has_unseen_content());
    }

    #[test]
    fn scrolling_up_detaches_and_flags_unseen() {
        let mut room = test_room();
        for i in 0..20 {
            update(&mut room, Action::Submit(format!("note {i:02}")));
        }

        let mut state = MessageListState::new();
        draw(&mut state, room.messages(), 40, 9);

        state.handle_event(&TuiEvent::ScrollPageUp);
        assert!(!state.stick_to_bottom);
        draw(&mut state, room.messages(), 40, 9);
        assert!(state.has_unseen_content());

        state.handle_event(&TuiEvent::ScrollToBottom);
        assert!(state.stick_to_bottom);
        let text = buffer_text(&draw(&mut state, room.messages(), 40, 9));
        assert!(text.contains("note 19"));
        assert!(!state.has_unseen_content());
    }

    #[test]
    fn history_taller_than_u16_rows_renders() {
        let mut room = test_room();
        // 25 messages × 3002 rows each is well past u16::MAX
        for _ in 0..25 {
            update(&mut room, Action::Submit("x\n".repeat(3000)));
        }

        let mut state = MessageListState::new();
        let text = buffer_text(&draw(&mut state, room.messages(), 12, 10));

        assert_eq!(state.layout.total_height(), u16::MAX);
        assert!(text.contains('x'));

        state.handle_event(&TuiEvent::ScrollPageUp);
        draw(&mut state, room.messages(), 12, 10);
        assert!(state.has_unseen_content());
    }

    #[test]
    fn layout_cache_reuse() {
        let mut cache = LayoutCache::new();
        cache.heights = vec![3; 4];
        cache.update_metadata(4, 80);

        // Same width, new message appended → keep all four
        assert_eq!(cache.reusable_count(5, 80), 4);
        // Width changed → remeasure everything
        assert_eq!(cache.reusable_count(5, 60), 0);
        // Fewer messages than cached (room was rebuilt) → start over
        assert_eq!(cache.reusable_count(2, 80), 0);
    }

    #[test]
    fn prefix_heights_and_visible_range() {
        let mut cache = LayoutCache::new();
        cache.heights = vec![3, 3, 3, 3, 3, 3];
        cache.rebuild_prefix_heights();
        assert_eq!(cache.prefix_heights, vec![3, 6, 9, 12, 15, 18]);
        assert_eq!(cache.total_height(), 18);

        // Viewport rows 6..10 plus a 2-row buffer each way → rows 4..12
        assert_eq!(cache.visible_range(6, 4), 1..4);
        assert_eq!(cache.visible_range(0, 4), 0..2);
    }
}
