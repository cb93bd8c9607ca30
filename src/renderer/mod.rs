//! 2D canvas rendering
//!
//! [`draw_frame`] paints a [`GameState`] onto anything implementing
//! [`Canvas`]. The browser backend lives in `web`; [`DrawList`] records
//! commands for tests and headless runs.

#[cfg(target_arch = "wasm32")]
pub mod web;

use glam::Vec2;

use crate::consts::*;
use crate::sim::GameState;

/// Drawing primitives the game needs from a render surface
pub trait Canvas {
    /// Filled axis-aligned rectangle
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str);

    /// Filled circle centered on (x, y)
    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: &str);

    /// Stroked line with a dash pattern
    fn dashed_line(&mut self, from: Vec2, to: Vec2, dash: &[f64], color: &str);

    /// Text centered horizontally on x, baseline at y, monospace
    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: &str, size: f32);
}

/// Paint one frame: background, divider, paddles, ball, scores
pub fn draw_frame(state: &GameState, canvas: &mut impl Canvas) {
    let field = state.playfield;

    canvas.fill_rect(0.0, 0.0, field.width, field.height, BACKGROUND_COLOR);

    let mid = field.width / 2.0;
    canvas.dashed_line(
        Vec2::new(mid, 0.0),
        Vec2::new(mid, field.height),
        &DIVIDER_DASH,
        DIVIDER_COLOR,
    );

    let player = state.player.rect(field);
    canvas.fill_rect(player.x, player.y, player.w, player.h, PLAYER_COLOR);

    let ai = state.ai.rect(field);
    canvas.fill_rect(ai.x, ai.y, ai.w, ai.h, AI_COLOR);

    let ball = state.ball.rect();
    canvas.fill_rect(ball.x, ball.y, ball.w, ball.h, BALL_COLOR);

    canvas.fill_text(
        &state.score.player.to_string(),
        field.width / 4.0,
        SCORE_BASELINE_Y,
        PLAYER_COLOR,
        SCORE_FONT_SIZE,
    );
    canvas.fill_text(
        &state.score.ai.to_string(),
        field.width * 3.0 / 4.0,
        SCORE_BASELINE_Y,
        AI_COLOR,
        SCORE_FONT_SIZE,
    );
}

/// HUD drawn on top of the frame
#[derive(Debug, Clone, Copy, Default)]
pub struct Overlay {
    pub paused: bool,
    pub fps: Option<u32>,
}

pub fn draw_overlay(state: &GameState, overlay: Overlay, canvas: &mut impl Canvas) {
    let field = state.playfield;

    if overlay.paused {
        canvas.fill_text(
            "PAUSED",
            field.width / 2.0,
            field.height / 2.0,
            BALL_COLOR,
            SCORE_FONT_SIZE,
        );
    }

    if let Some(fps) = overlay.fps {
        canvas.fill_text(
            &format!("{} fps", fps),
            field.width - 48.0,
            field.height - 12.0,
            DIVIDER_COLOR,
            14.0,
        );
    }
}

/// A recorded drawing command
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: String,
    },
    Circle {
        x: f32,
        y: f32,
        r: f32,
        color: String,
    },
    DashedLine {
        from: Vec2,
        to: Vec2,
        dash: Vec<f64>,
        color: String,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        color: String,
        size: f32,
    },
}

/// Canvas that records commands instead of drawing them
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Text strings drawn, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for DrawList {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            w,
            h,
            color: color.to_string(),
        });
    }

    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: &str) {
        self.commands.push(DrawCommand::Circle {
            x,
            y,
            r,
            color: color.to_string(),
        });
    }

    fn dashed_line(&mut self, from: Vec2, to: Vec2, dash: &[f64], color: &str) {
        self.commands.push(DrawCommand::DashedLine {
            from,
            to,
            dash: dash.to_vec(),
            color: color.to_string(),
        });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: &str, size: f32) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            color: color.to_string(),
            size,
        });
    }
}
