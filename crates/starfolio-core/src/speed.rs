//! User-togglable animation speed.

use serde::{Deserialize, Serialize};

/// Discrete speed multiplier applied to every star's fall speed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedMultiplier {
    /// 1×
    #[default]
    Normal,
    /// 2×
    Double,
    /// 0.5×
    Half,
}

impl SpeedMultiplier {
    /// Cycle to the next multiplier: 1× → 2× → 0.5× → 1×.
    pub fn next(self) -> Self {
        match self {
            SpeedMultiplier::Normal => SpeedMultiplier::Double,
            SpeedMultiplier::Double => SpeedMultiplier::Half,
            SpeedMultiplier::Half => SpeedMultiplier::Normal,
        }
    }

    /// Scalar applied to per-tick movement.
    pub fn factor(self) -> f32 {
        match self {
            SpeedMultiplier::Normal => 1.0,
            SpeedMultiplier::Double => 2.0,
            SpeedMultiplier::Half => 0.5,
        }
    }

    /// Short label for the on-screen speed control.
    pub fn label(self) -> &'static str {
        match self {
            SpeedMultiplier::Normal => "1×",
            SpeedMultiplier::Double => "2×",
            SpeedMultiplier::Half => "0.5×",
        }
    }

    /// Parse `1`, `2`, `0.5` (optionally suffixed with `x` or `×`) or the
    /// variant names.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim().to_ascii_lowercase();
        let label = label.trim_end_matches(['x', '×']);
        match label {
            "1" | "normal" => Some(SpeedMultiplier::Normal),
            "2" | "double" => Some(SpeedMultiplier::Double),
            "0.5" | ".5" | "half" => Some(SpeedMultiplier::Half),
            _ => None,
        }
    }
}
