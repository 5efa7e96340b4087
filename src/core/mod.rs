//! # Core Application Logic
//!
//! This module contains the chat room's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • ChatRoom (state)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No terminal. No UI.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `ChatRoom` struct: messages and roster in one place
//! - [`action`]: The `Action` enum and `update()`, the only way messages change
//! - [`message`], [`user`]: The records the room holds
//! - [`clock`]: Timestamp formatting
//! - [`config`]: File/env/CLI settings

pub mod action;
pub mod clock;
pub mod config;
pub mod message;
pub mod state;
pub mod user;
