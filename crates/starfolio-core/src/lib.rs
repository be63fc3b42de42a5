//! Core types shared across the starfolio crates.

mod motion;
mod speed;
mod text;
mod version;

pub use motion::MotionMode;
pub use speed::SpeedMultiplier;
pub use text::wrap_words;
pub use version::{PageVersion, SaberColor};
