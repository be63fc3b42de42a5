//! Animated backdrop for the starfolio terminal portfolio.
//!
//! The centerpiece is a falling, twinkling starfield drawn onto any
//! [`DrawSurface`]. Ships, the opening crawl, the lightsaber scroll indicator
//! and the holographic shimmer are independent decorations layered on top.

mod animations;
mod chars;
mod color;
mod state;
mod surface;

pub use animations::crawl::{Crawl, CrawlPhase};
pub use animations::saber::{blade_length, render_saber};
pub use animations::ships::{Ship, ShipPool};
pub use animations::starfield::{ColorCategory, Star, Starfield, sample_color};
pub use color::{blend, holo_shimmer, hsl_to_rgb};
pub use state::Backdrop;
pub use surface::DrawSurface;
