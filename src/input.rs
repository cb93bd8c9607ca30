//! Input mapping
//!
//! Turns raw browser input into playfield coordinates and game commands.
//! Kept free of web-sys so it can be tested natively.

/// Convert a client-space pointer y into playfield y.
///
/// `rect_top`/`rect_height` come from the canvas bounding rectangle. When the
/// canvas is displayed at a different CSS size than its backing store, the
/// offset is rescaled to backing-store units.
pub fn pointer_to_playfield_y(
    client_y: f64,
    rect_top: f64,
    rect_height: f64,
    playfield_height: f32,
) -> f32 {
    let offset = client_y - rect_top;
    let scale = if rect_height > 0.0 {
        playfield_height as f64 / rect_height
    } else {
        1.0
    };
    (offset * scale) as f32
}

/// Keyboard commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Pause or resume the loop
    TogglePause,
    /// Start a fresh match with a new seed
    Restart,
    /// Show or hide the FPS readout (persisted)
    ToggleFps,
}

impl KeyCommand {
    /// Map a `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" | "p" | "P" => Some(KeyCommand::TogglePause),
            "r" | "R" => Some(KeyCommand::Restart),
            "f" | "F" => Some(KeyCommand::ToggleFps),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_offset_unscaled() {
        assert_eq!(pointer_to_playfield_y(250.0, 50.0, 480.0, 480.0), 200.0);
    }

    #[test]
    fn test_pointer_offset_scaled() {
        // Canvas drawn at half size
        assert_eq!(pointer_to_playfield_y(150.0, 50.0, 240.0, 480.0), 200.0);
    }

    #[test]
    fn test_pointer_zero_height_rect() {
        assert_eq!(pointer_to_playfield_y(80.0, 30.0, 0.0, 480.0), 50.0);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(KeyCommand::from_key("Escape"), Some(KeyCommand::TogglePause));
        assert_eq!(KeyCommand::from_key("p"), Some(KeyCommand::TogglePause));
        assert_eq!(KeyCommand::from_key("R"), Some(KeyCommand::Restart));
        assert_eq!(KeyCommand::from_key("f"), Some(KeyCommand::ToggleFps));
        assert_eq!(KeyCommand::from_key("x"), None);
    }
}
