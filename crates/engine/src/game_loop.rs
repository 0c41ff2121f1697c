//! The game loop and its state machine.
//!
//! ```text
//! NotStarted -> Running <-> Paused
//!                  |  ^
//!                  v  |
//!            LevelTransition
//!                  |
//!   (quit or no lives left)
//!                  v
//!              GameOver
//! ```
//!
//! Each tick is strictly sequential: drain every pending key, run physics
//! unless paused, play the tones it raised, render one frame, sleep. The
//! sleep is the only suspension point.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use log::{debug, error, info};

use crate::config::GameConfig;
use crate::core::Board;
use crate::input::{handle_key_event, is_actionable};
use crate::term::{BoardView, FrameBuffer, Surface};
use crate::types::{EndReason, BEEP_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Running,
    Paused,
    LevelTransition,
    GameOver,
}

pub struct GameLoop<S: Surface> {
    board: Board,
    surface: S,
    view: BoardView,
    fb: FrameBuffer,
    tick: Duration,
    sound: bool,
    phase: Phase,
}

impl<S: Surface> GameLoop<S> {
    pub fn new(surface: S, config: &GameConfig) -> Self {
        let seed = config.resolve_seed();
        debug!("new game, seed {seed}");
        Self::with_board(surface, Board::new(seed), config)
    }

    pub fn with_board(surface: S, board: Board, config: &GameConfig) -> Self {
        let view = BoardView::default();
        let fb = view.framebuffer();
        Self {
            board,
            surface,
            view,
            fb,
            tick: config.tick(),
            sound: config.sound,
            phase: Phase::NotStarted,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Title screen; any key starts play.
    pub fn show_start_screen(&mut self) -> Result<()> {
        self.view.render_start_screen(&mut self.fb);
        self.surface.write_frame(&self.fb)?;
        self.surface.wait_key()?;
        self.phase = Phase::Running;
        Ok(())
    }

    /// Apply every pending key. Returns how many actions were applied.
    pub fn drain_input(&mut self) -> Result<usize> {
        let mut applied = 0;
        while let Some(key) = self.surface.poll_key()? {
            if !is_actionable(&key) {
                continue;
            }
            if let Some(action) = handle_key_event(key) {
                self.board.apply_action(action);
                applied += 1;
            }
        }
        self.sync_play_phase();
        Ok(applied)
    }

    /// One tick without the pacing sleep: input, physics, tones, render.
    pub fn step(&mut self) -> Result<()> {
        self.drain_input()?;

        self.board.tick();
        for sound in self.board.take_sounds() {
            if self.sound {
                self.surface.beep(sound.frequency_hz(), BEEP_MS);
            }
        }

        self.view.render_into(&self.board, &mut self.fb);
        self.surface.write_frame(&self.fb)
    }

    /// Advance to the next level and wait on the banner.
    pub fn level_transition(&mut self) -> Result<()> {
        self.phase = Phase::LevelTransition;
        self.board.advance_level();
        self.view.render_level_banner(self.board.level(), &mut self.fb);
        self.surface.write_frame(&self.fb)?;
        self.surface.wait_key()?;
        self.sync_play_phase();
        Ok(())
    }

    /// Why play stopped, judged from the board.
    pub fn end_reason(&self) -> EndReason {
        if self.board.lives() == 0 {
            EndReason::OutOfLives
        } else {
            EndReason::Quit
        }
    }

    /// Final screen; waits for one last key.
    pub fn show_end_screen(&mut self) -> Result<EndReason> {
        let reason = self.end_reason();
        self.phase = Phase::GameOver;
        info!(
            "game over ({reason:?}): score {}, level {}",
            self.board.score(),
            self.board.level()
        );
        self.view.render_end_screen(&self.board, reason, &mut self.fb);
        self.surface.write_frame(&self.fb)?;
        self.surface.wait_key()?;
        Ok(reason)
    }

    /// Play a whole session. Display setup/teardown is left to the caller.
    pub fn run(&mut self) -> Result<EndReason> {
        self.show_start_screen()?;

        while self.board.in_play() {
            self.step()?;
            thread::sleep(self.tick);

            if self.board.all_bricks_gone() {
                self.level_transition()?;
            }
        }

        self.show_end_screen()
    }

    /// Take over the display, run a session and restore the display.
    ///
    /// Teardown runs exactly once, whether setup, the session or both fail.
    /// The first error wins; a teardown failure is only reported when
    /// everything before it succeeded.
    pub fn play(&mut self) -> Result<EndReason> {
        let result = self.surface.setup_display().and_then(|_| self.run());
        let restored = self.surface.teardown_display();
        match &result {
            Ok(reason) => info!("session ended: {reason:?}"),
            Err(e) => error!("session failed: {e:#}"),
        }
        let reason = result?;
        restored?;
        Ok(reason)
    }

    fn sync_play_phase(&mut self) {
        self.phase = if self.board.is_paused() {
            Phase::Paused
        } else {
            Phase::Running
        };
    }
}
