//! Terminal rendering and I/O.
//!
//! A small, game-oriented rendering layer: the board is drawn into an
//! off-screen framebuffer which is then flushed to the terminal in one write.
//! It avoids widget/layout frameworks entirely.
//!
//! - [`fb`]: the framebuffer and per-cell styles
//! - [`board_view`]: board, banners and end screen to framebuffer (pure)
//! - [`surface`]: the [`Surface`] trait the game loop depends on, plus a
//!   headless implementation for tests
//! - [`renderer`]: the crossterm implementation

pub mod board_view;
pub mod fb;
pub mod renderer;
pub mod surface;

pub use tui_breakout_core as core;
pub use tui_breakout_types as types;

pub use board_view::{status_line, BoardView};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_frame_into, TerminalSurface};
pub use surface::{Beep, HeadlessSurface, Surface};
