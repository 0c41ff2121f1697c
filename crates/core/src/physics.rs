//! Ball integration and collision resolution.
//!
//! One call to [`update_ball`] followed by [`check_collisions`] is one
//! simulation step. Collisions test the ball's point position only, there is
//! no sub-stepping, and at most one brick breaks per step.

use log::debug;

use crate::board::{brick_rect, Board};
use crate::types::{
    Sound, BOARD_HEIGHT, BOARD_WIDTH, BRICK_COLS, BRICK_ROWS, PADDLE_ROW, PADDLE_SPEED_SCALE,
    PADDLE_WIDTH, WALL_MARGIN,
};

const LEFT_WALL: f64 = WALL_MARGIN;
const RIGHT_WALL: f64 = BOARD_WIDTH as f64 - 1.0 - WALL_MARGIN;
const CEILING: f64 = WALL_MARGIN;
const FLOOR: f64 = BOARD_HEIGHT as f64 - 1.0;

/// Top of the band in which the paddle catches the ball (one row above it).
const PADDLE_BAND_TOP: f64 = PADDLE_ROW as f64 - 1.0;
const PADDLE_BAND_BOTTOM: f64 = PADDLE_ROW as f64;

/// Euler step plus wall, ceiling and floor handling.
pub fn update_ball(board: &mut Board) {
    board.ball.x += board.ball.dx;
    board.ball.y += board.ball.dy;

    if board.ball.x <= LEFT_WALL || board.ball.x >= RIGHT_WALL {
        board.ball.dx = -board.ball.dx;
        board.ball.x = board.ball.x.clamp(LEFT_WALL, RIGHT_WALL);
        board.emit(Sound::WallBounce);
    }

    // A corner hit reflects both axes and rings once per surface.
    if board.ball.y <= CEILING {
        board.ball.dy = -board.ball.dy;
        board.ball.y = CEILING;
        board.emit(Sound::WallBounce);
    }

    if board.ball.y >= FLOOR {
        board.lives = board.lives.saturating_sub(1);
        debug!("ball lost, {} lives left", board.lives);
        board.reset_ball();
        board.emit(Sound::BallLost);
    }
}

/// Paddle deflection, then the first live brick under the ball (row-major).
pub fn check_collisions(board: &mut Board) {
    let paddle_left = board.paddle_x as f64;
    let paddle_right = paddle_left + PADDLE_WIDTH as f64;
    let ball = &mut board.ball;

    if (PADDLE_BAND_TOP..=PADDLE_BAND_BOTTOM).contains(&ball.y)
        && (paddle_left..=paddle_right).contains(&ball.x)
    {
        ball.dy = -ball.dy.abs();
        let hit = (ball.x - paddle_left) / PADDLE_WIDTH as f64;
        ball.dx = (hit - 0.5) * PADDLE_SPEED_SCALE;
        board.emit(Sound::PaddleHit);
    }

    if let Some((row, col)) = first_brick_hit(board) {
        board.bricks[row][col].alive = false;
        board.score += board.brick_value();
        board.ball.dy = -board.ball.dy;
        board.emit(Sound::BrickBreak);
    }
}

/// Scan order is top row first, left to right; the first match wins.
fn first_brick_hit(board: &Board) -> Option<(usize, usize)> {
    let (x, y) = (board.ball.x, board.ball.y);
    (0..BRICK_ROWS)
        .flat_map(|row| (0..BRICK_COLS).map(move |col| (row, col)))
        .find(|&(row, col)| board.bricks[row][col].alive && brick_rect(row, col).contains(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Ball;

    fn board_with_ball(x: f64, y: f64, dx: f64, dy: f64) -> Board {
        let mut board = Board::new(7);
        board.set_ball(Ball { x, y, dx, dy });
        board
    }

    #[test]
    fn free_flight_is_a_plain_euler_step() {
        let mut board = board_with_ball(40.0, 15.0, 0.3, -0.3);
        update_ball(&mut board);
        let ball = board.ball();
        assert!((ball.x - 40.3).abs() < 1e-9);
        assert!((ball.y - 14.7).abs() < 1e-9);
        assert!(board.take_sounds().is_empty());
    }

    #[test]
    fn right_wall_reflects_and_clamps() {
        let mut board = board_with_ball(77.9, 15.0, 0.5, -0.3);
        update_ball(&mut board);
        let ball = board.ball();
        assert_eq!(ball.x, RIGHT_WALL);
        assert!(ball.dx < 0.0);
        assert_eq!(board.take_sounds().as_slice(), &[Sound::WallBounce]);
    }

    #[test]
    fn corner_hit_rings_for_wall_and_ceiling() {
        let mut board = board_with_ball(1.2, 1.2, -0.5, -0.5);
        update_ball(&mut board);
        let ball = board.ball();
        assert_eq!((ball.x, ball.y), (LEFT_WALL, CEILING));
        assert!(ball.dx > 0.0 && ball.dy > 0.0);
        assert_eq!(
            board.take_sounds().as_slice(),
            &[Sound::WallBounce, Sound::WallBounce]
        );
    }

    #[test]
    fn paddle_center_sends_ball_straight_up() {
        let mut board = Board::new(7);
        let px = board.paddle_x() as f64;
        board.set_ball(Ball {
            x: px + 5.0,
            y: PADDLE_BAND_TOP + 0.5,
            dx: 0.3,
            dy: 0.3,
        });
        check_collisions(&mut board);
        let ball = board.ball();
        assert!(ball.dx.abs() < 1e-9);
        assert!(ball.dy < 0.0);
        assert_eq!(board.take_sounds().as_slice(), &[Sound::PaddleHit]);
    }

    #[test]
    fn paddle_edges_angle_the_ball() {
        let mut board = Board::new(7);
        let px = board.paddle_x() as f64;
        board.set_ball(Ball {
            x: px,
            y: PADDLE_BAND_TOP,
            dx: 0.0,
            dy: 0.3,
        });
        check_collisions(&mut board);
        assert!((board.ball().dx + 0.4).abs() < 1e-9);

        board.set_ball(Ball {
            x: px + PADDLE_WIDTH as f64,
            y: PADDLE_BAND_BOTTOM,
            dx: 0.0,
            dy: 0.3,
        });
        check_collisions(&mut board);
        assert!((board.ball().dx - 0.4).abs() < 1e-9);
    }

    #[test]
    fn scan_prefers_top_left_brick() {
        let mut board = board_with_ball(0.5, 3.5, 0.0, -0.3);
        check_collisions(&mut board);
        assert!(!board.bricks()[0][0].alive);
        assert_eq!(board.alive_bricks(), 71);
    }
}
