use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};

use crate::core::clock::ClockFormat;
use crate::core::message::Message;
use crate::tui::component::Component;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

/// A stateless component that renders one chat message as a bordered bubble.
///
/// # Design
///
/// `MessageView` is a **transient component**: the `MessageList` creates one
/// per visible message each frame and throws it away after rendering.
///
/// # Styling
///
/// - **Own** messages (written here): green, header and text right-aligned
/// - **Other** messages: blue, left-aligned
///
/// The header shows the sender and the `hour:minute` timestamp in the
/// configured clock format.
///
/// # Height Calculation
///
/// [`calculate_height`](Self::calculate_height) predicts the rendered height
/// with `textwrap` options matching Ratatui's `Paragraph` wrapping, so the
/// list can lay out scroll positions without rendering.
#[derive(Clone, Copy)]
pub struct MessageView<'a> {
    pub message: &'a Message,
    pub clock: ClockFormat,
}

impl<'a> MessageView<'a> {
    pub fn new(message: &'a Message, clock: ClockFormat) -> Self {
        Self { message, clock }
    }

    /// Calculate the height required for this message given a width.
    pub fn calculate_height(message: &Message, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            // Terminal too narrow for borders + padding; still occupy a row.
            return 1;
        }

        let content = message.text.trim();
        if content.is_empty() {
            return VERTICAL_OVERHEAD;
        }

        let options = textwrap::Options::new(content_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);

        let lines = textwrap::wrap(content, options).len().max(1);
        u16::try_from(lines)
            .unwrap_or(u16::MAX)
            .saturating_add(VERTICAL_OVERHEAD)
    }

    fn header(&self) -> Line<'a> {
        let style = bubble_style(self.message.is_own);
        let header = Line::from(vec![
            Span::styled(self.message.sender.as_str(), style.add_modifier(Modifier::BOLD)),
            Span::styled(" · ", style.add_modifier(Modifier::DIM)),
            Span::styled(
                self.clock.format(&self.message.timestamp),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        header.alignment(alignment(self.message.is_own))
    }
}

fn bubble_style(is_own: bool) -> Style {
    if is_own {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Blue)
    }
}

fn alignment(is_own: bool) -> Alignment {
    if is_own { Alignment::Right } else { Alignment::Left }
}

impl<'a> Widget for MessageView<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let style = bubble_style(self.message.is_own);

        let block = Block::bordered()
            .title(self.header())
            .border_type(BorderType::Rounded)
            .border_style(style.add_modifier(Modifier::DIM))
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner_area = block.inner(area);
        block.render(area, buf);

        Paragraph::new(self.message.text.trim())
            .style(style)
            .alignment(alignment(self.message.is_own))
            .wrap(Wrap { trim: true })
            .render(inner_area, buf);
    }
}

/// `MessageView` is stateless; this delegates to the [`Widget`] impl.
impl<'a> Component for MessageView<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }
}
