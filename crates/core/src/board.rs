//! Board module - canonical game state
//!
//! Owns the paddle, the ball, the brick grid and the score/lives/level
//! counters. Other components mutate it only through the primitives below
//! (and the sibling `physics` module).
//!
//! Coordinates: (x, y) with x growing right and y growing down, in terminal
//! cells. Bricks are addressed by (row, col), row 0 at the top.

use arrayvec::ArrayVec;
use log::{debug, info};

use crate::rng::SimpleRng;
use crate::types::{
    GameAction, Sound, BOARD_HEIGHT, BOARD_WIDTH, BRICK_COLS, BRICK_POINTS, BRICK_ROWS, BRICK_TOP,
    BRICK_WIDTH, GLYPHS, PADDLE_MAX_X, PADDLE_MIN_X, PADDLE_STEP, PADDLE_WIDTH, SERVE_ROW_OFFSET,
    SERVE_SPEED, STARTING_LIVES,
};

/// Upper bound on tones raised in one tick (walls, ceiling, loss, paddle, brick).
pub const MAX_SOUNDS_PER_TICK: usize = 8;

/// Tones raised since the last drain.
pub type SoundQueue = ArrayVec<Sound, MAX_SOUNDS_PER_TICK>;

/// A single brick cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brick {
    pub alive: bool,
    pub glyph: char,
}

impl Default for Brick {
    fn default() -> Self {
        Self {
            alive: false,
            glyph: ' ',
        }
    }
}

/// Ball position and velocity in cells (per tick for the velocity).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
}

/// Screen rectangle covered by a brick: `[x, x + w) x [y, y + h)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrickRect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl BrickRect {
    /// Point containment against the ball's continuous position.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x as f64
            && x < (self.x + self.w) as f64
            && y >= self.y as f64
            && y < (self.y + self.h) as f64
    }
}

/// Rectangle of brick `(row, col)`.
pub fn brick_rect(row: usize, col: usize) -> BrickRect {
    BrickRect {
        x: col as u16 * BRICK_WIDTH,
        y: BRICK_TOP + row as u16,
        w: BRICK_WIDTH,
        h: 1,
    }
}

/// Complete game state.
#[derive(Debug, Clone)]
pub struct Board {
    pub(crate) paddle_x: u16,
    pub(crate) ball: Ball,
    pub(crate) bricks: [[Brick; BRICK_COLS]; BRICK_ROWS],
    pub(crate) score: u32,
    pub(crate) lives: u32,
    pub(crate) level: u32,
    pub(crate) paused: bool,
    pub(crate) active: bool,
    pub(crate) rng: SimpleRng,
    pub(crate) sounds: SoundQueue,
}

impl Board {
    /// Create a ready-to-play board with the given RNG seed.
    pub fn new(seed: u32) -> Self {
        let mut board = Self {
            paddle_x: Self::paddle_home(),
            ball: Ball {
                x: 0.0,
                y: 0.0,
                dx: 0.0,
                dy: 0.0,
            },
            bricks: [[Brick::default(); BRICK_COLS]; BRICK_ROWS],
            score: 0,
            lives: STARTING_LIVES,
            level: 1,
            paused: false,
            active: true,
            rng: SimpleRng::new(seed),
            sounds: SoundQueue::new(),
        };
        board.reset_game();
        board
    }

    fn paddle_home() -> u16 {
        BOARD_WIDTH / 2 - PADDLE_WIDTH / 2
    }

    pub fn paddle_x(&self) -> u16 {
        self.paddle_x
    }

    pub fn ball(&self) -> Ball {
        self.ball
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The loop keeps running while this holds.
    pub fn in_play(&self) -> bool {
        self.active && self.lives > 0
    }

    /// Brick at `(row, col)`, `None` when out of range.
    pub fn brick(&self, row: usize, col: usize) -> Option<Brick> {
        self.bricks.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn bricks(&self) -> &[[Brick; BRICK_COLS]; BRICK_ROWS] {
        &self.bricks
    }

    pub fn alive_bricks(&self) -> usize {
        self.bricks
            .iter()
            .flatten()
            .filter(|brick| brick.alive)
            .count()
    }

    /// True iff no brick is alive.
    pub fn all_bricks_gone(&self) -> bool {
        self.bricks.iter().flatten().all(|brick| !brick.alive)
    }

    /// Points a single brick is worth at the current level.
    pub fn brick_value(&self) -> u32 {
        BRICK_POINTS * self.level
    }

    /// Revive every brick with a fresh random glyph.
    pub fn initialize_bricks(&mut self) {
        for row in self.bricks.iter_mut() {
            for brick in row.iter_mut() {
                *brick = Brick {
                    alive: true,
                    glyph: self.rng.pick(&GLYPHS),
                };
            }
        }
    }

    /// Serve a new ball from above the paddle center, always moving up.
    pub fn reset_ball(&mut self) {
        let dx = if self.rng.next_bool() {
            SERVE_SPEED
        } else {
            -SERVE_SPEED
        };
        self.ball = Ball {
            x: (self.paddle_x + PADDLE_WIDTH / 2) as f64,
            y: (BOARD_HEIGHT - SERVE_ROW_OFFSET) as f64,
            dx,
            dy: -SERVE_SPEED,
        };
    }

    /// Full restart in place: score, lives, level, paddle, bricks, ball, pause.
    pub fn reset_game(&mut self) {
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.level = 1;
        self.paddle_x = Self::paddle_home();
        self.initialize_bricks();
        self.reset_ball();
        self.paused = false;
        self.sounds.clear();
    }

    /// Level-up bookkeeping: next level, bonus life, fresh grid, new serve.
    pub fn advance_level(&mut self) {
        self.level += 1;
        self.lives += 1;
        self.initialize_bricks();
        self.reset_ball();
        info!("level {} reached, lives {}", self.level, self.lives);
    }

    pub fn move_paddle_left(&mut self) {
        self.paddle_x = self.paddle_x.saturating_sub(PADDLE_STEP).max(PADDLE_MIN_X);
    }

    pub fn move_paddle_right(&mut self) {
        self.paddle_x = (self.paddle_x + PADDLE_STEP).min(PADDLE_MAX_X);
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn quit(&mut self) {
        self.active = false;
    }

    /// Apply one player intent.
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => self.move_paddle_left(),
            GameAction::MoveRight => self.move_paddle_right(),
            GameAction::TogglePause => self.toggle_pause(),
            GameAction::Restart => {
                debug!("restart requested at score {}", self.score);
                self.reset_game();
            }
            GameAction::Quit => self.quit(),
        }
    }

    /// Advance the simulation one tick unless paused.
    pub fn tick(&mut self) {
        if self.paused {
            return;
        }
        crate::physics::update_ball(self);
        crate::physics::check_collisions(self);
    }

    /// Take the tones raised since the last call.
    pub fn take_sounds(&mut self) -> SoundQueue {
        std::mem::take(&mut self.sounds)
    }

    pub(crate) fn emit(&mut self, sound: Sound) {
        // Full queue means nobody drained it; dropping a tone is harmless.
        let _ = self.sounds.try_push(sound);
    }

    /// Direct ball placement (scenario setup and tooling).
    pub fn set_ball(&mut self, ball: Ball) {
        self.ball = ball;
    }

    /// Direct paddle placement, clamped to the paddle bounds.
    pub fn set_paddle_x(&mut self, x: u16) {
        self.paddle_x = x.clamp(PADDLE_MIN_X, PADDLE_MAX_X);
    }

    /// Kill a brick without scoring it (scenario setup and tooling).
    pub fn clear_brick(&mut self, row: usize, col: usize) -> bool {
        match self.bricks.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(brick) => {
                brick.alive = false;
                true
            }
            None => false,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(1)
    }
}
