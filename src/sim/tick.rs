//! Fixed per-frame simulation step
//!
//! One call to [`tick`] is one displayed frame. Velocities are in units per
//! frame, so game speed follows the display refresh rate.

use super::ai;
use super::state::{Ball, GameEvent, GameState, Playfield, Side};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Latest pointer position in playfield coordinates (last write wins)
    pub pointer_y: Option<f32>,
    /// Drive the player paddle with the AI heuristic instead of the pointer
    pub autopilot: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();
    state.time_ticks += 1;

    if !input.autopilot {
        if let Some(y) = input.pointer_y {
            state.player.center_on(y, state.playfield);
        }
    }

    integrate(&mut state.ball);

    if reflect_walls(&mut state.ball, state.playfield) {
        log::debug!("Wall bounce at tick {}", state.time_ticks);
        state.events.push(GameEvent::WallBounce);
    }

    if let Some(side) = resolve_paddle_hits(state) {
        log::debug!("Paddle hit ({}) vel={:?}", side.as_str(), state.ball.vel);
        state.events.push(GameEvent::PaddleHit(side));
    }

    if let Some(side) = check_score(state) {
        log::info!(
            "Point to {}: {}-{}",
            side.as_str(),
            state.score.player,
            state.score.ai
        );
        state.events.push(GameEvent::Scored(side));
    }

    let target = state.ball.center().y;
    ai::track(&mut state.ai, target, &state.tuning, state.playfield);
    if input.autopilot {
        ai::track(&mut state.player, target, &state.tuning, state.playfield);
    }
}

/// Euler step: position += velocity
#[inline]
pub fn integrate(ball: &mut Ball) {
    ball.pos += ball.vel;
}

/// Bounce off the top and bottom walls. Returns true if a wall was hit.
pub fn reflect_walls(ball: &mut Ball, playfield: Playfield) -> bool {
    if ball.pos.y < 0.0 {
        ball.pos.y = 0.0;
        ball.vel.y = -ball.vel.y;
        true
    } else if ball.pos.y + BALL_SIZE > playfield.height {
        ball.pos.y = playfield.height - BALL_SIZE;
        ball.vel.y = -ball.vel.y;
        true
    } else {
        false
    }
}

/// Rebound off whichever paddle the ball overlaps, placing it flush against
/// that paddle's face. Returns the side that was hit.
pub fn resolve_paddle_hits(state: &mut GameState) -> Option<Side> {
    let field = state.playfield;
    let mut hit = None;

    for side in [Side::Left, Side::Right] {
        let paddle = state.paddle(side).rect(field);
        if !paddle.overlaps(&state.ball.rect()) {
            continue;
        }

        state.ball.pos.x = match side {
            Side::Left => paddle.right(),
            Side::Right => paddle.x - BALL_SIZE,
        };
        let jitter = state.bounce_jitter();
        state.ball.vel.x = -state.ball.vel.x;
        state.ball.vel.y += jitter;
        hit = Some(side);
    }

    hit
}

/// Award a point if the ball left the playfield, then re-serve.
/// At most one side scores per call.
pub fn check_score(state: &mut GameState) -> Option<Side> {
    let ball = state.ball.rect();
    let scorer = if ball.x < 0.0 {
        Side::Right
    } else if ball.right() > state.playfield.width {
        Side::Left
    } else {
        return None;
    };

    state.score.award(scorer);
    state.reset_ball();
    Some(scorer)
}
