//! Game state and core simulation types
//!
//! Everything one match needs lives in [`GameState`]; nothing is global.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// Which side of the playfield. The player always defends the left side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "player",
            Side::Right => "ai",
        }
    }
}

/// Size of the drawing surface all motion is bounded by
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Largest legal paddle top edge
    #[inline]
    pub fn max_paddle_y(&self) -> f32 {
        (self.height - PADDLE_HEIGHT).max(0.0)
    }

    #[inline]
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.max_paddle_y())
    }

    /// Top-left corner that centers the ball
    pub fn ball_home(&self) -> Vec2 {
        Vec2::new(
            self.width / 2.0 - BALL_SIZE / 2.0,
            self.height / 2.0 - BALL_SIZE / 2.0,
        )
    }
}

/// A paddle. Only the vertical position moves; x is fixed by its side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Top edge, always within [0, playfield.height - PADDLE_HEIGHT]
    pub y: f32,
}

impl Paddle {
    /// Paddle vertically centered on the playfield
    pub fn centered(side: Side, playfield: Playfield) -> Self {
        Self {
            side,
            y: playfield.clamp_paddle_y(playfield.height / 2.0 - PADDLE_HEIGHT / 2.0),
        }
    }

    /// Left edge of the paddle
    pub fn x(&self, playfield: Playfield) -> f32 {
        match self.side {
            Side::Left => PADDLE_MARGIN,
            Side::Right => playfield.width - PADDLE_MARGIN - PADDLE_WIDTH,
        }
    }

    pub fn rect(&self, playfield: Playfield) -> Rect {
        Rect::new(self.x(playfield), self.y, PADDLE_WIDTH, PADDLE_HEIGHT)
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + PADDLE_HEIGHT / 2.0
    }

    pub fn set_y(&mut self, y: f32, playfield: Playfield) {
        self.y = playfield.clamp_paddle_y(y);
    }

    /// Put the paddle's center at `y` (clamped)
    pub fn center_on(&mut self, y: f32, playfield: Playfield) {
        self.set_y(y - PADDLE_HEIGHT / 2.0, playfield);
    }
}

/// The ball, a square of side `BALL_SIZE`. `pos` is its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, BALL_SIZE, BALL_SIZE)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(BALL_SIZE / 2.0)
    }
}

/// Points per side. Only ever incremented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub ai: u32,
}

impl Score {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.player += 1,
            Side::Right => self.ai += 1,
        }
    }
}

/// Things that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// Ball rebounded off this side's paddle
    PaddleHit(Side),
    /// This side scored a point
    Scored(Side),
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from, kept for logs and replays
    pub seed: u64,
    rng: Pcg32,
    pub playfield: Playfield,
    pub tuning: Tuning,
    /// Left paddle, pointer-controlled
    pub player: Paddle,
    /// Right paddle, driven by `sim::ai`
    pub ai: Paddle,
    pub ball: Ball,
    pub score: Score,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh match: paddles centered, ball served, score 0-0
    pub fn new(seed: u64, playfield: Playfield, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            playfield,
            tuning,
            player: Paddle::centered(Side::Left, playfield),
            ai: Paddle::centered(Side::Right, playfield),
            ball: Ball {
                pos: playfield.ball_home(),
                vel: Vec2::ZERO,
            },
            score: Score::default(),
            time_ticks: 0,
            events: Vec::new(),
        };
        state.reset_ball();
        state
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.player,
            Side::Right => &self.ai,
        }
    }

    /// Recenter the ball and serve it in a random direction
    pub fn reset_ball(&mut self) {
        let serve_speed = self.tuning.serve_speed;
        let spread = self.tuning.serve_spread;

        let dir = if self.rng.random::<f32>() > 0.5 { 1.0 } else { -1.0 };
        let vy = self.rng.random::<f32>() * 2.0 * spread - spread;

        self.ball.pos = self.playfield.ball_home();
        self.ball.vel = Vec2::new(dir * serve_speed, vy);
    }

    /// Random vertical nudge applied on a paddle hit, in [-jitter, jitter)
    pub fn bounce_jitter(&mut self) -> f32 {
        (self.rng.random::<f32>() - 0.5) * 2.0 * self.tuning.bounce_jitter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_centered() {
        let state = GameState::new(7, Playfield::default(), Tuning::default());
        assert_eq!(state.player.y, 480.0 / 2.0 - PADDLE_HEIGHT / 2.0);
        assert_eq!(state.ai.y, state.player.y);
        assert_eq!(state.ball.pos, Vec2::new(392.0, 232.0));
        assert_eq!(state.ball.vel.x.abs(), 5.0);
        assert!(state.ball.vel.y >= -2.0 && state.ball.vel.y < 2.0);
        assert_eq!(state.score, Score::default());
    }

    #[test]
    fn test_paddle_x_by_side() {
        let field = Playfield::default();
        assert_eq!(Paddle::centered(Side::Left, field).x(field), 10.0);
        assert_eq!(Paddle::centered(Side::Right, field).x(field), 778.0);
    }

    #[test]
    fn test_paddle_clamps() {
        let field = Playfield::default();
        let mut paddle = Paddle::centered(Side::Left, field);

        paddle.center_on(-500.0, field);
        assert_eq!(paddle.y, 0.0);

        paddle.center_on(10_000.0, field);
        assert_eq!(paddle.y, 480.0 - PADDLE_HEIGHT);

        paddle.center_on(240.0, field);
        assert_eq!(paddle.center_y(), 240.0);
    }

    #[test]
    fn test_jitter_range() {
        let mut state = GameState::new(42, Playfield::default(), Tuning::default());
        for _ in 0..1000 {
            let j = state.bounce_jitter();
            assert!((-1.0..1.0).contains(&j));
        }
    }

    #[test]
    fn test_zero_jitter_is_exact() {
        let tuning = Tuning {
            bounce_jitter: 0.0,
            ..Default::default()
        };
        let mut state = GameState::new(42, Playfield::default(), tuning);
        assert_eq!(state.bounce_jitter(), 0.0);
    }

    #[test]
    fn test_score_award() {
        let mut score = Score::default();
        score.award(Side::Right);
        score.award(Side::Right);
        score.award(Side::Left);
        assert_eq!(score.player, 1);
        assert_eq!(score.ai, 2);
    }
}
