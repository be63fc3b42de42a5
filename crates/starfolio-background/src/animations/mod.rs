//! Backdrop animations.

pub mod crawl;
pub mod saber;
pub mod ships;
pub mod starfield;
