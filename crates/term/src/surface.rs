//! The terminal surface the game loop talks to.
//!
//! The loop never touches a terminal directly; it only sees this capability
//! set. [`crate::TerminalSurface`] drives a real terminal, [`HeadlessSurface`]
//! replays scripted keys and records everything it is asked to show.

use std::collections::VecDeque;

use anyhow::{anyhow, Result};
use crossterm::event::KeyEvent;

use crate::fb::FrameBuffer;

pub trait Surface {
    /// Prepare the display (raw mode, hidden cursor, ...). Called once.
    fn setup_display(&mut self) -> Result<()>;

    /// Undo [`Surface::setup_display`]. Called once, also after failures.
    fn teardown_display(&mut self) -> Result<()>;

    /// Next pending key event, without blocking.
    fn poll_key(&mut self) -> Result<Option<KeyEvent>>;

    /// Block until a key is pressed.
    fn wait_key(&mut self) -> Result<KeyEvent>;

    /// Present a complete frame in one write.
    fn write_frame(&mut self, fb: &FrameBuffer) -> Result<()>;

    /// Best-effort tone. Must not fail or block the loop.
    fn beep(&mut self, frequency_hz: u32, duration_ms: u32);
}

/// A recorded tone request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Beep {
    pub frequency_hz: u32,
    pub duration_ms: u32,
}

/// Surface without a terminal.
///
/// Keys are split in two scripts: `keys` feeds [`Surface::poll_key`] during
/// play and `prompts` answers [`Surface::wait_key`] on start, banner and end
/// screens. `wait_key` falls back to the play script and fails once both are
/// empty.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    keys: VecDeque<KeyEvent>,
    prompts: VecDeque<KeyEvent>,
    frames: Vec<FrameBuffer>,
    beeps: Vec<Beep>,
    setup_calls: u32,
    teardown_calls: u32,
    fail_setup: bool,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue keys for `poll_key`.
    pub fn with_keys(mut self, keys: impl IntoIterator<Item = KeyEvent>) -> Self {
        self.keys.extend(keys);
        self
    }

    /// Queue keys for `wait_key`.
    pub fn with_prompts(mut self, keys: impl IntoIterator<Item = KeyEvent>) -> Self {
        self.prompts.extend(keys);
        self
    }

    /// Make `setup_display` fail, as a terminal refusing raw mode would.
    pub fn failing_setup(mut self) -> Self {
        self.fail_setup = true;
        self
    }

    pub fn push_key(&mut self, key: KeyEvent) {
        self.keys.push_back(key);
    }

    pub fn pending_keys(&self) -> usize {
        self.keys.len()
    }

    pub fn frames(&self) -> &[FrameBuffer] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&FrameBuffer> {
        self.frames.last()
    }

    pub fn beeps(&self) -> &[Beep] {
        &self.beeps
    }

    pub fn setup_calls(&self) -> u32 {
        self.setup_calls
    }

    pub fn teardown_calls(&self) -> u32 {
        self.teardown_calls
    }
}

impl Surface for HeadlessSurface {
    fn setup_display(&mut self) -> Result<()> {
        self.setup_calls += 1;
        if self.fail_setup {
            return Err(anyhow!("headless surface refused setup"));
        }
        Ok(())
    }

    fn teardown_display(&mut self) -> Result<()> {
        self.teardown_calls += 1;
        Ok(())
    }

    fn poll_key(&mut self) -> Result<Option<KeyEvent>> {
        Ok(self.keys.pop_front())
    }

    fn wait_key(&mut self) -> Result<KeyEvent> {
        self.prompts
            .pop_front()
            .or_else(|| self.keys.pop_front())
            .ok_or_else(|| anyhow!("headless surface ran out of scripted keys"))
    }

    fn write_frame(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.frames.push(fb.clone());
        Ok(())
    }

    fn beep(&mut self, frequency_hz: u32, duration_ms: u32) {
        self.beeps.push(Beep {
            frequency_hz,
            duration_ms,
        });
    }
}
