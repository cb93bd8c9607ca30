//! Paddle tracking heuristic
//!
//! Moves a fixed step toward the ball's center unless already within the
//! dead zone. No lookahead: the lag from the step size and dead zone is what
//! makes it beatable.

use super::state::{Paddle, Playfield};
use crate::tuning::Tuning;

/// Step `paddle` toward `target_y` (a ball center) by `tuning.ai_speed`
pub fn track(paddle: &mut Paddle, target_y: f32, tuning: &Tuning, playfield: Playfield) {
    let center = paddle.center_y();
    if center < target_y - tuning.ai_dead_zone {
        paddle.y += tuning.ai_speed;
    } else if center > target_y + tuning.ai_dead_zone {
        paddle.y -= tuning.ai_speed;
    }
    paddle.set_y(paddle.y, playfield);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PADDLE_HEIGHT;
    use crate::sim::Side;

    fn paddle_with_center(center: f32) -> Paddle {
        Paddle {
            side: Side::Right,
            y: center - PADDLE_HEIGHT / 2.0,
        }
    }

    #[test]
    fn test_moves_down_toward_ball() {
        let field = Playfield::default();
        let mut paddle = paddle_with_center(100.0);
        track(&mut paddle, 200.0, &Tuning::default(), field);
        assert_eq!(paddle.center_y(), 104.0);
    }

    #[test]
    fn test_moves_up_toward_ball() {
        let field = Playfield::default();
        let mut paddle = paddle_with_center(300.0);
        track(&mut paddle, 200.0, &Tuning::default(), field);
        assert_eq!(paddle.center_y(), 296.0);
    }

    #[test]
    fn test_holds_inside_dead_zone() {
        let field = Playfield::default();
        for offset in [-15.0, -7.5, 0.0, 7.5, 15.0] {
            let mut paddle = paddle_with_center(200.0);
            track(&mut paddle, 200.0 + offset, &Tuning::default(), field);
            assert_eq!(paddle.center_y(), 200.0, "offset {}", offset);
        }
    }

    #[test]
    fn test_clamps_at_bottom() {
        let field = Playfield::default();
        let mut paddle = Paddle {
            side: Side::Right,
            y: field.max_paddle_y() - 1.0,
        };
        track(&mut paddle, field.height, &Tuning::default(), field);
        assert_eq!(paddle.y, field.max_paddle_y());
    }

    #[test]
    fn test_custom_tuning() {
        let field = Playfield::default();
        let tuning = Tuning {
            ai_dead_zone: 0.0,
            ai_speed: 10.0,
            ..Default::default()
        };
        let mut paddle = paddle_with_center(100.0);
        track(&mut paddle, 101.0, &tuning, field);
        assert_eq!(paddle.center_y(), 110.0);
    }
}
