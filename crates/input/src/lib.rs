//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s. Polling and
//! draining the event queue belongs to the terminal surface; this crate only
//! decides what a key means.

pub mod map;

pub use tui_breakout_types as types;

pub use map::{handle_key_event, is_actionable};
