use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::state::ChatRoom;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{MessageList, TitleBar, UserList};

/// Sidebar width on roomy terminals.
const SIDEBAR_WIDTH: u16 = 24;
/// Below this width the sidebar is dropped so the conversation stays readable.
const MIN_WIDTH_FOR_SIDEBAR: u16 = 60;

/// Split the frame into (sidebar, main). The sidebar is empty on narrow terminals.
fn split_columns(area: Rect) -> (Rect, Rect) {
    let sidebar_width = if area.width >= MIN_WIDTH_FOR_SIDEBAR {
        SIDEBAR_WIDTH
    } else {
        0
    };
    let [sidebar, main] =
        Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(0)]).areas(area);
    (sidebar, main)
}

/// Draw the whole chat widget: roster on the left, conversation on the right.
///
/// ```text
/// ┌ Online Users (2) ┐ Chat Room | chatting as You
/// │ ● Alice          │ ╭ Alice · 09:12 ──────────╮
/// │ ○ Bob            │ │ morning!                │
/// │ ● Charlie        │ ╰─────────────────────────╯
/// │                  │ ╭ Message ────────────────╮
/// └──────────────────┘ ╰──────────────── Send ⏎ ─╯
/// ```
pub fn draw_ui(frame: &mut Frame, room: &ChatRoom, tui: &mut TuiState) {
    let (sidebar_area, main_area) = split_columns(frame.area());

    if sidebar_area.width > 0 {
        UserList::new(room.users()).render(frame, sidebar_area);
    }

    let input_height = tui.input_box.calculate_height(main_area.width);
    let [title_area, list_area, input_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(input_height),
    ])
    .areas(main_area);

    MessageList::new(&mut tui.message_list, room.messages(), room.clock).render(frame, list_area);

    // After the list so the "↓ New" flag reflects this frame's scroll position
    TitleBar::new(
        room.room_title.clone(),
        room.display_name.clone(),
        tui.message_list.has_unseen_content(),
    )
    .render(frame, title_area);

    tui.input_box.render(frame, input_area);
}
