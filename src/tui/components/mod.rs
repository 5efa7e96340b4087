//! # TUI Components
//!
//! All UI components for the terminal chat widget.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `TitleBar`: Room title, who you are, "↓ New" indicator
//! - `MessageView`: One message bubble
//! - `UserList`: Roster with online count
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `InputBox`: Message composer; emits `InputEvent::Submit`
//! - `MessageList`: Scrollable conversation with layout caching
//!
//! ## Props-Based Data Flow
//!
//! Data flows down from `ChatRoom` into components every frame. The only
//! thing flowing back up is the input box's submit event.
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! UserList::new(room.users()).render(frame, sidebar);
//!
//! // Bad: Hidden dependency on global state
//! UserList::render(frame, sidebar); // reads from a global room
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Header line)
//! ├── message.rs       (Single message renderer)
//! ├── message_list.rs  (Scrollable message container)
//! ├── user_list.rs     (Online roster)
//! └── input_box/       (Composer)
//! ```

pub mod input_box;
pub mod message;
pub mod message_list;
pub mod title_bar;
pub mod user_list;

pub use input_box::{InputBox, InputEvent};
pub use message::MessageView;
pub use message_list::{MessageList, MessageListState};
pub use title_bar::TitleBar;
pub use user_list::UserList;
