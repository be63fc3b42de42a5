//! Falling starfield (stateful).
//!
//! A fixed-size pool of stars drifts down the surface, twinkling as it goes.
//! The pool is rebuilt from scratch whenever the surface size changes.

use std::f32::consts::TAU;
use std::ops::Range;

use rand::{Rng, SeedableRng, rngs::StdRng};
use starfolio_core::{MotionMode, SpeedMultiplier};

use crate::surface::DrawSurface;

/// Star radius range, in cells.
pub const RADIUS_RANGE: Range<f32> = 0.5..2.0;

/// Fall speed range, in cells per tick at 1×.
pub const SPEED_RANGE: Range<f32> = 0.02..0.12;

/// Base opacity range.
pub const OPACITY_RANGE: Range<f32> = 0.3..1.0;

/// Phase advance per tick.
pub const TWINKLE_STEP: f32 = 0.05;

/// Draws above this are bluish.
const BLUE_THRESHOLD: f32 = 0.7;

/// Draws above this (and not bluish) are purplish.
const PURPLE_THRESHOLD: f32 = 0.4;

/// Colour bucket of a star, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCategory {
    Blue,
    Purple,
    White,
}

impl ColorCategory {
    /// RGB triple for the bucket.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            ColorCategory::Blue => (155, 176, 255),
            ColorCategory::Purple => (196, 160, 255),
            ColorCategory::White => (255, 255, 255),
        }
    }
}

/// Map a uniform draw in `[0, 1)` to a colour bucket.
///
/// Top 30% of draws are bluish, the next 30% purplish, the rest white.
pub fn sample_color(draw: f32) -> ColorCategory {
    if draw > BLUE_THRESHOLD {
        ColorCategory::Blue
    } else if draw > PURPLE_THRESHOLD {
        ColorCategory::Purple
    } else {
        ColorCategory::White
    }
}

/// A single star.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
    /// Base radius.
    pub radius: f32,
    /// Fall speed at 1×.
    pub speed: f32,
    /// Base opacity.
    pub opacity: f32,
    /// Colour bucket.
    pub color: ColorCategory,
    /// Twinkle phase in radians.
    pub phase: f32,
}

impl Star {
    fn spawn(rng: &mut impl Rng, width: f32, height: f32) -> Self {
        Self {
            x: below(rng, width),
            y: below(rng, height),
            radius: rng.random_range(RADIUS_RANGE),
            speed: rng.random_range(SPEED_RANGE),
            opacity: rng.random_range(OPACITY_RANGE),
            color: sample_color(rng.random::<f32>()),
            phase: rng.random_range(0.0..TAU),
        }
    }

    /// Current brightness: base opacity modulated by the twinkle phase.
    pub fn twinkle(&self) -> f32 {
        self.opacity * (0.7 + 0.3 * self.phase.sin())
    }
}

/// Uniform draw in `[0, upper)`; collapses to 0 for empty or negative bounds.
fn below(rng: &mut impl Rng, upper: f32) -> f32 {
    if upper.is_nan() || upper <= 0.0 {
        return 0.0;
    }
    let v = rng.random::<f32>() * upper;
    // Float rounding can land exactly on the bound.
    if v >= upper { upper.next_down() } else { v }
}

/// The star pool and everything needed to animate it.
#[derive(Debug)]
pub struct Starfield {
    stars: Vec<Star>,
    width: f32,
    height: f32,
    density: usize,
    motion: MotionMode,
    speed: SpeedMultiplier,
    rng: StdRng,
}

impl Starfield {
    /// Create and populate a starfield seeded from the OS.
    pub fn new(width: f32, height: f32, density: usize, motion: MotionMode) -> Self {
        Self::with_rng(width, height, density, motion, StdRng::from_os_rng())
    }

    /// Create a starfield with a deterministic seed.
    pub fn seeded(width: f32, height: f32, density: usize, motion: MotionMode, seed: u64) -> Self {
        Self::with_rng(width, height, density, motion, StdRng::seed_from_u64(seed))
    }

    fn with_rng(width: f32, height: f32, density: usize, motion: MotionMode, rng: StdRng) -> Self {
        let mut field = Self {
            stars: Vec::new(),
            width,
            height,
            density,
            motion,
            speed: SpeedMultiplier::default(),
            rng,
        };
        field.initialize();
        field
    }

    /// Regenerate the whole pool for the current size and density.
    pub fn initialize(&mut self) {
        let (width, height) = (self.width, self.height);
        let rng = &mut self.rng;
        self.stars = (0..self.density)
            .map(|_| Star::spawn(rng, width, height))
            .collect();
        log::debug!(
            "starfield regenerated: {} stars over {}x{}",
            self.stars.len(),
            width,
            height
        );
    }

    /// Resize the field. Prior star state is discarded, not rescaled.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.initialize();
    }

    /// Change the pool size and regenerate.
    pub fn set_density(&mut self, density: usize) {
        self.density = density;
        self.initialize();
    }

    /// Cycle the speed multiplier and return the new value.
    pub fn cycle_speed(&mut self) -> SpeedMultiplier {
        self.speed = self.speed.next();
        self.speed
    }

    /// Set the speed multiplier directly.
    pub fn set_speed(&mut self, speed: SpeedMultiplier) {
        self.speed = speed;
    }

    /// Draw every star, then advance the field by one frame.
    pub fn tick<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) {
        self.draw(surface);
        self.advance(self.speed.factor());
    }

    /// Draw every star at its current position and twinkle brightness.
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        for star in &self.stars {
            surface.fill_soft_circle(star.x, star.y, star.radius, star.color.rgb(), star.twinkle());
        }
    }

    /// Move every star by `speed × multiplier` and step its twinkle.
    ///
    /// Does nothing under reduced motion.
    pub fn advance(&mut self, multiplier: f32) {
        if !self.motion.is_animated() {
            return;
        }
        for star in &mut self.stars {
            star.y += star.speed * multiplier;
            star.phase = (star.phase + TWINKLE_STEP).rem_euclid(TAU);
            if star.y >= self.height {
                star.y = 0.0;
                star.x = below(&mut self.rng, self.width);
            }
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn density(&self) -> usize {
        self.density
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn motion(&self) -> MotionMode {
        self.motion
    }

    pub fn speed(&self) -> SpeedMultiplier {
        self.speed
    }

    #[cfg(test)]
    pub(crate) fn stars_mut(&mut self) -> &mut [Star] {
        &mut self.stars
    }
}
