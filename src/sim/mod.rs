//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod ai;
pub mod collision;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use state::{Ball, GameEvent, GameState, Paddle, Playfield, Score, Side};
pub use tick::{TickInput, check_score, integrate, reflect_walls, resolve_paddle_hits, tick};
