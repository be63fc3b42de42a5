//! Reduced-motion handling.

/// Animation mode, chosen once when the backdrop mounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MotionMode {
    /// Stars fall and twinkle, decorations move.
    #[default]
    Animated,
    /// Reduced motion: everything renders as a still frame.
    Static,
}

impl MotionMode {
    /// Map a reduced-motion preference to a mode.
    pub fn from_reduced_motion(reduced: bool) -> Self {
        if reduced {
            MotionMode::Static
        } else {
            MotionMode::Animated
        }
    }

    /// Parse an environment-style boolean (`1`, `true`, `yes`, `on`).
    ///
    /// Returns `None` for anything unrecognized so callers can fall back
    /// to the next source.
    pub fn parse_flag(value: &str) -> Option<bool> {
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        }
    }

    /// Whether anything is allowed to move.
    pub fn is_animated(self) -> bool {
        self == MotionMode::Animated
    }
}
