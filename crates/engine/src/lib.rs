//! Game loop, configuration and logging for the terminal brick breaker.
//!
//! The loop is single-threaded and synchronous. It depends on the terminal
//! only through [`term::Surface`], so tests can run whole sessions against
//! [`term::HeadlessSurface`].

pub mod config;
pub mod game_loop;
pub mod logging;

pub use tui_breakout_core as core;
pub use tui_breakout_input as input;
pub use tui_breakout_term as term;
pub use tui_breakout_types as types;

pub use config::GameConfig;
pub use game_loop::{GameLoop, Phase};
