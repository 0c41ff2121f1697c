//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the board state and the physics that advances it. It has
//! **zero dependencies** on terminals or I/O:
//!
//! - **Deterministic**: the same seed produces the same bricks and serves
//! - **Testable**: every rule is reachable through the public `Board` API
//! - **Allocation-free ticks**: tones are collected in a fixed-capacity queue
//!
//! # Module Structure
//!
//! - [`board`]: paddle, ball, brick grid, score/lives/level and their primitives
//! - [`physics`]: ball integration plus wall, paddle and brick collisions
//! - [`rng`]: seedable LCG used for glyphs and serve direction
//!
//! # Example
//!
//! ```
//! use tui_breakout_core::Board;
//! use tui_breakout_types::GameAction;
//!
//! let mut board = Board::new(12345);
//! board.apply_action(GameAction::MoveLeft);
//! board.tick();
//!
//! assert_eq!(board.lives(), 3);
//! assert_eq!(board.alive_bricks(), 72);
//! ```

pub mod board;
pub mod physics;
pub mod rng;

pub use tui_breakout_types as types;

pub use board::{brick_rect, Ball, Board, Brick, BrickRect, SoundQueue, MAX_SOUNDS_PER_TICK};
pub use physics::{check_collisions, update_ball};
pub use rng::SimpleRng;
