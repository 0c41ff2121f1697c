//! TUI Breakout (workspace facade crate).
//!
//! Exposes `tui_breakout::{core,engine,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub use tui_breakout_core as core;
pub use tui_breakout_engine as engine;
pub use tui_breakout_input as input;
pub use tui_breakout_term as term;
pub use tui_breakout_types as types;
