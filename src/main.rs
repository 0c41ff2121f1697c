//! Terminal brick breaker (default binary).
//!
//! Reads its configuration from the environment, takes over the terminal,
//! plays one session and always restores the terminal on the way out.

use anyhow::Result;

use tui_breakout::engine::{logging, GameConfig, GameLoop};
use tui_breakout::term::TerminalSurface;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    logging::init(&config)?;

    let mut game = GameLoop::new(TerminalSurface::new(), &config);
    game.play()?;
    Ok(())
}
