//! BoardView: maps `core::Board` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{brick_rect, Board};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{EndReason, BOARD_HEIGHT, BOARD_WIDTH, PADDLE_ROW, PADDLE_WIDTH};

pub const HORIZONTAL_BORDER: char = '═';
pub const VERTICAL_BORDER: char = '║';
pub const PADDLE_GLYPH: char = '█';
pub const BALL_GLYPH: char = '@';

/// Brick tint per row, brightest at the top.
const ROW_TINTS: [Rgb; 6] = [
    Rgb::new(170, 255, 170),
    Rgb::new(120, 255, 130),
    Rgb::new(60, 235, 90),
    Rgb::new(30, 210, 70),
    Rgb::new(20, 180, 60),
    Rgb::new(10, 150, 50),
];

/// Renders the board and the full-screen banners.
#[derive(Debug, Clone)]
pub struct BoardView {
    text: CellStyle,
    status: CellStyle,
    border: CellStyle,
    paddle: CellStyle,
    ball: CellStyle,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            text: CellStyle::default(),
            status: CellStyle::fg(Rgb::new(140, 255, 160)).bolded(),
            border: CellStyle::fg(Rgb::new(0, 160, 60)).dimmed(),
            paddle: CellStyle::fg(Rgb::new(180, 255, 190)).bolded(),
            ball: CellStyle::fg(Rgb::new(255, 255, 255)).bolded(),
        }
    }
}

impl BoardView {
    /// A framebuffer sized for the board.
    pub fn framebuffer(&self) -> FrameBuffer {
        FrameBuffer::new(BOARD_WIDTH, BOARD_HEIGHT)
    }

    /// Render the board into an existing framebuffer.
    ///
    /// Later layers overwrite earlier ones: status, top border, bricks,
    /// paddle, ball, side borders, bottom border.
    pub fn render_into(&self, board: &Board, fb: &mut FrameBuffer) {
        fb.clear(self.text.cell(' '));
        let w = fb.width();
        let h = fb.height();
        if w == 0 || h < 3 {
            return;
        }

        fb.put_str(0, 0, &status_line(board), self.status);
        fb.hline(1, HORIZONTAL_BORDER, self.border);

        for (row, bricks) in board.bricks().iter().enumerate() {
            let style = CellStyle::fg(ROW_TINTS[row % ROW_TINTS.len()]);
            for (col, brick) in bricks.iter().enumerate() {
                if !brick.alive {
                    continue;
                }
                let r = brick_rect(row, col);
                fb.fill_rect(r.x, r.y, r.w, r.h, brick.glyph, style);
            }
        }

        fb.fill_rect(board.paddle_x(), PADDLE_ROW, PADDLE_WIDTH, 1, PADDLE_GLYPH, self.paddle);

        let ball = board.ball();
        let (bx, by) = (ball.x.round(), ball.y.round());
        if bx >= 0.0 && by >= 0.0 && bx < w as f64 && by < h as f64 {
            fb.put_char(bx as u16, by as u16, BALL_GLYPH, self.ball);
        }

        fb.vline(0, 1, h - 1, VERTICAL_BORDER, self.border);
        fb.vline(w - 1, 1, h - 1, VERTICAL_BORDER, self.border);
        fb.hline(h - 1, HORIZONTAL_BORDER, self.border);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, board: &Board) -> FrameBuffer {
        let mut fb = self.framebuffer();
        self.render_into(board, &mut fb);
        fb
    }

    pub fn render_start_screen(&self, fb: &mut FrameBuffer) {
        fb.clear(self.text.cell(' '));
        let mid = fb.height() / 2;
        fb.put_str_centered(mid.saturating_sub(4), "█▓▒░ MATRIX BRICK BREAKER ░▒▓█", self.status);
        fb.put_str_centered(mid.saturating_sub(1), "BREACH THE DIGITAL MATRIX", self.text);
        fb.put_str_centered(mid + 2, "A/← → Left | D/→ → Right", self.text);
        fb.put_str_centered(mid + 3, "P → Pause | R → Restart | Q → Quit", self.text);
        fb.put_str_centered(mid + 5, "Press any key to start...", self.text.dimmed());
    }

    pub fn render_level_banner(&self, level: u32, fb: &mut FrameBuffer) {
        fb.clear(self.text.cell(' '));
        let mid = fb.height() / 2;
        fb.put_str_centered(mid, &format!("LEVEL {level} ACCESSED"), self.status);
        fb.put_str_centered(mid + 2, "Press any key to continue...", self.text.dimmed());
    }

    pub fn render_end_screen(&self, board: &Board, reason: EndReason, fb: &mut FrameBuffer) {
        fb.clear(self.text.cell(' '));
        let mid = fb.height() / 2;
        let title = match reason {
            EndReason::OutOfLives => "█▓▒░ SYSTEM CRASHED ░▒▓█",
            EndReason::Quit => "█▓▒░ MATRIX LIBERATED ░▒▓█",
        };
        fb.put_str_centered(mid.saturating_sub(2), title, self.status);
        fb.put_str_centered(mid, &format!("FINAL SCORE: {}", board.score()), self.text);
        fb.put_str_centered(mid + 1, &format!("REACHED LEVEL: {}", board.level()), self.text);
        fb.put_str_centered(mid + 3, "Press any key to exit...", self.text.dimmed());
    }
}

/// Row 0 text.
pub fn status_line(board: &Board) -> String {
    let mut line = format!(
        "MATRIX BREAKER | SCORE: {} | LIVES: {} | LEVEL: {}",
        board.score(),
        board.lives(),
        board.level()
    );
    if board.is_paused() {
        line.push_str(" | PAUSED");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_reports_pause() {
        let mut board = Board::new(1);
        assert_eq!(
            status_line(&board),
            "MATRIX BREAKER | SCORE: 0 | LIVES: 3 | LEVEL: 1"
        );
        board.toggle_pause();
        assert!(status_line(&board).ends_with("| LEVEL: 1 | PAUSED"));
    }

    #[test]
    fn tiny_framebuffer_does_not_panic() {
        let board = Board::new(1);
        let mut fb = FrameBuffer::new(2, 2);
        BoardView::default().render_into(&board, &mut fb);
        assert_eq!(fb.row_text(0), "  ");
    }
}
