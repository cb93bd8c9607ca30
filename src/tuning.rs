//! Data-driven game balance
//!
//! Every gameplay constant that has no geometric meaning lives here so it can
//! be overridden from stored settings without touching the simulation.

use serde::{Deserialize, Serialize};

use crate::consts::PADDLE_HEIGHT;
use crate::error::{GameError, Result};
use crate::sim::Playfield;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Half-width of the band around the ball center where the AI holds still
    pub ai_dead_zone: f32,
    /// AI paddle travel per frame
    pub ai_speed: f32,
    /// Vertical velocity jitter added on a paddle hit, drawn from [-jitter, jitter)
    pub bounce_jitter: f32,
    /// Horizontal serve speed after a reset (sign is random)
    pub serve_speed: f32,
    /// Vertical serve velocity drawn from [-spread, spread)
    pub serve_spread: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ai_dead_zone: 15.0,
            ai_speed: 4.0,
            bounce_jitter: 1.0,
            serve_speed: 5.0,
            serve_spread: 2.0,
        }
    }
}

impl Tuning {
    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        let checks = [
            (self.ai_dead_zone >= 0.0, "ai_dead_zone must be >= 0"),
            (self.ai_speed > 0.0, "ai_speed must be > 0"),
            (self.bounce_jitter >= 0.0, "bounce_jitter must be >= 0"),
            (self.serve_speed > 0.0, "serve_speed must be > 0"),
            (self.serve_spread >= 0.0, "serve_spread must be >= 0"),
        ];
        // NaN fails every comparison above, so it is rejected too
        for (ok, msg) in checks {
            if !ok {
                return Err(GameError::InvalidSettings(msg.to_string()));
            }
        }
        Ok(())
    }

    /// Validate against a concrete playfield
    pub fn validate_for(&self, playfield: Playfield) -> Result<()> {
        self.validate()?;
        if playfield.height < PADDLE_HEIGHT {
            return Err(GameError::InvalidSettings(format!(
                "playfield height {} is shorter than a paddle ({})",
                playfield.height, PADDLE_HEIGHT
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.ai_dead_zone, 15.0);
        assert_eq!(tuning.ai_speed, 4.0);
        assert_eq!(tuning.bounce_jitter, 1.0);
    }

    #[test]
    fn test_rejects_out_of_range() {
        let tuning = Tuning {
            ai_speed: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(GameError::InvalidSettings(_))
        ));

        let tuning = Tuning {
            bounce_jitter: f32::NAN,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_rejects_tiny_playfield() {
        let tuning = Tuning::default();
        assert!(tuning.validate_for(Playfield::new(800.0, 60.0)).is_err());
        assert!(tuning.validate_for(Playfield::new(800.0, 480.0)).is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{"ai_speed": 6.0}"#).unwrap();
        assert_eq!(tuning.ai_speed, 6.0);
        assert_eq!(tuning.ai_dead_zone, 15.0);
    }
}
