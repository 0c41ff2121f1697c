//! Shared types and constants for the brick breaker.
//!
//! Everything here is plain data with no dependencies so it can be used by the
//! core simulation, the renderer and the input layer alike.
//!
//! # Board Geometry
//!
//! The playfield is a fixed 80x25 character grid:
//!
//! | Row(s) | Content |
//! |--------|---------|
//! | 0 | status line |
//! | 1 | top border |
//! | 3..9 | brick rows (6 rows x 12 columns, 6 cells per brick) |
//! | 22 | paddle row |
//! | 24 | bottom border |
//!
//! Columns 0 and 79 hold the side borders on every interior row.
//!
//! # Timing
//!
//! The loop runs on a fixed 50ms tick. Ball velocities are expressed in cells
//! per tick, so there is no delta-time anywhere in the physics.
//!
//! # Examples
//!
//! ```
//! use tui_breakout_types::{Sound, BOARD_WIDTH, BRICK_COLS, BRICK_WIDTH};
//!
//! assert_eq!(BRICK_WIDTH, BOARD_WIDTH / BRICK_COLS as u16);
//! assert_eq!(Sound::BrickBreak.frequency_hz(), 1000);
//! ```

/// Board width in terminal columns.
pub const BOARD_WIDTH: u16 = 80;

/// Board height in terminal rows.
pub const BOARD_HEIGHT: u16 = 25;

/// Paddle width in cells.
pub const PADDLE_WIDTH: u16 = 10;

/// Cells the paddle moves per key press.
pub const PADDLE_STEP: u16 = 4;

/// Row the paddle is drawn on.
pub const PADDLE_ROW: u16 = BOARD_HEIGHT - 3;

/// Leftmost paddle position (keeps the paddle off the side border).
pub const PADDLE_MIN_X: u16 = 1;

/// Rightmost paddle position.
pub const PADDLE_MAX_X: u16 = BOARD_WIDTH - PADDLE_WIDTH - 1;

/// Number of brick rows.
pub const BRICK_ROWS: usize = 6;

/// Number of brick columns.
pub const BRICK_COLS: usize = 12;

/// Screen row of the first brick row.
pub const BRICK_TOP: u16 = 3;

/// Width of a single brick. Integer division; the remainder is left empty.
pub const BRICK_WIDTH: u16 = BOARD_WIDTH / BRICK_COLS as u16;

/// Total bricks in a fresh grid.
pub const BRICK_COUNT: usize = BRICK_ROWS * BRICK_COLS;

/// Glyphs a brick can be drawn with.
pub const GLYPHS: [char; 15] = [
    '0', '1', '█', '▓', '▒', '░', '╳', '╱', '╲', 'Λ', 'Ω', '∴', '¥', '§', 'µ',
];

/// Speed of a freshly served ball along each axis (cells per tick).
pub const SERVE_SPEED: f64 = 0.3;

/// Rows above the bottom edge where the ball is served from.
pub const SERVE_ROW_OFFSET: u16 = 6;

/// Horizontal speed scale applied to the paddle hit offset.
pub const PADDLE_SPEED_SCALE: f64 = 0.8;

/// Distance kept between the ball and the side walls / ceiling.
pub const WALL_MARGIN: f64 = 1.0;

/// Lives at the start of a game.
pub const STARTING_LIVES: u32 = 3;

/// Points per brick, multiplied by the current level.
pub const BRICK_POINTS: u32 = 10;

/// Fixed tick interval in milliseconds.
pub const TICK_MS: u64 = 50;

/// Duration of every tone in milliseconds.
pub const BEEP_MS: u32 = 100;


/// Player intents produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    TogglePause,
    Restart,
    Quit,
}

/// Tone events raised by the simulation.
///
/// The core only records these; playing them is up to the terminal surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    /// Side wall or ceiling bounce.
    WallBounce,
    /// Ball struck the paddle.
    PaddleHit,
    /// A brick was destroyed.
    BrickBreak,
    /// Ball fell past the paddle.
    BallLost,
}

impl Sound {
    /// Tone frequency in Hz.
    pub fn frequency_hz(self) -> u32 {
        match self {
            Sound::WallBounce => 800,
            Sound::PaddleHit => 600,
            Sound::BrickBreak => 1000,
            Sound::BallLost => 300,
        }
    }
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The player pressed a quit key.
    Quit,
    /// Lives reached zero.
    OutOfLives,
}
