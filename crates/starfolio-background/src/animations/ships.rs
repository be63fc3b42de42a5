//! Ships crossing the backdrop (stateful).
//!
//! Ships live in a small pool. Each one carries the timestamp at which it
//! leaves the screen, so the pool never needs per-ship timers and clearing it
//! cancels every flight at once.

use rand::Rng;
use ratatui::{buffer::Buffer, style::Color};

use crate::chars::{SHIPS_LEFT, SHIPS_RIGHT};

/// Maximum ships on screen at once.
const MAX_SHIPS: usize = 3;

/// Delay between spawns, in milliseconds.
const SPAWN_DELAY_MS: std::ops::Range<u64> = 3_000..9_000;

/// Horizontal speed, in cells per second.
const SHIP_SPEED: std::ops::Range<f32> = 8.0..22.0;

/// Hull colours.
const SHIP_COLORS: &[(u8, u8, u8)] = &[(190, 190, 200), (150, 160, 175), (220, 120, 90)];

/// A ship in flight.
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    /// Sprite text, drawn left to right.
    pub sprite: &'static str,
    /// Row the ship flies along.
    pub row: u16,
    /// Left edge at spawn time.
    pub start_x: f32,
    /// Cells per second; negative flies left.
    pub velocity: f32,
    /// Hull colour.
    pub color: (u8, u8, u8),
    /// Elapsed time at spawn.
    pub spawned_at_ms: u64,
    /// Elapsed time after which the ship is gone.
    pub expires_at_ms: u64,
}

impl Ship {
    /// Left edge at `now_ms`.
    pub fn x_at(&self, now_ms: u64) -> f32 {
        let secs = now_ms.saturating_sub(self.spawned_at_ms) as f32 / 1000.0;
        self.start_x + self.velocity * secs
    }

    /// Sprite width in cells.
    pub fn sprite_width(&self) -> f32 {
        self.sprite.chars().count() as f32
    }
}

/// Pool of ships with explicit expiry.
#[derive(Debug, Default)]
pub struct ShipPool {
    ships: Vec<Ship>,
    next_spawn_ms: Option<u64>,
}

impl ShipPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop expired ships and spawn a new one when due.
    pub fn update(&mut self, now_ms: u64, width: u16, height: u16, rng: &mut impl Rng) {
        self.ships.retain(|ship| ship.expires_at_ms > now_ms);

        if width == 0 || height < 3 {
            return;
        }

        let due = *self
            .next_spawn_ms
            .get_or_insert_with(|| now_ms + rng.random_range(SPAWN_DELAY_MS));
        if now_ms < due {
            return;
        }

        if self.ships.len() < MAX_SHIPS {
            let ship = spawn(now_ms, width, height, rng);
            log::trace!("ship {:?} launched on row {}", ship.sprite, ship.row);
            self.ships.push(ship);
        }
        self.next_spawn_ms = Some(now_ms + rng.random_range(SPAWN_DELAY_MS));
    }

    /// Draw every ship onto `buf`, clipped to its area.
    pub fn render(&self, buf: &mut Buffer, now_ms: u64) {
        let area = buf.area;
        for ship in &self.ships {
            let color = Color::Rgb(ship.color.0, ship.color.1, ship.color.2);
            let left = ship.x_at(now_ms).floor() as i32;
            let y = area.y + ship.row;
            if ship.row >= area.height {
                continue;
            }
            for (i, ch) in ship.sprite.chars().enumerate() {
                let x = left + i as i32;
                if x < 0 || x >= area.width as i32 {
                    continue;
                }
                if let Some(cell) = buf.cell_mut((area.x + x as u16, y)) {
                    cell.set_char(ch).set_fg(color);
                }
            }
        }
    }

    /// Cancel every flight and the pending spawn.
    pub fn clear(&mut self) {
        self.ships.clear();
        self.next_spawn_ms = None;
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }
}

fn spawn(now_ms: u64, width: u16, height: u16, rng: &mut impl Rng) -> Ship {
    let rightward = rng.random_bool(0.5);
    let sprites = if rightward { SHIPS_RIGHT } else { SHIPS_LEFT };
    let sprite = sprites[rng.random_range(0..sprites.len())];
    let sprite_width = sprite.chars().count() as f32;
    let speed = rng.random_range(SHIP_SPEED);

    // Start just off-screen and travel until fully past the far edge.
    let (start_x, velocity) = if rightward {
        (-sprite_width, speed)
    } else {
        (width as f32, -speed)
    };
    let distance = width as f32 + sprite_width;
    let flight_ms = (distance / speed * 1000.0).ceil() as u64;

    // Keep ships in the upper two thirds of the sky.
    let row = rng.random_range(0..(height / 3 * 2).max(1));

    Ship {
        sprite,
        row,
        start_x,
        velocity,
        color: SHIP_COLORS[rng.random_range(0..SHIP_COLORS.len())],
        spawned_at_ms: now_ms,
        expires_at_ms: now_ms + flight_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use ratatui::layout::Rect;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(99)
    }

    #[test]
    fn test_first_spawn_waits_for_delay() {
        let mut pool = ShipPool::new();
        let mut rng = rng();
        pool.update(0, 80, 24, &mut rng);
        assert!(pool.is_empty());

        pool.update(SPAWN_DELAY_MS.end, 80, 24, &mut rng);
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_ship_expires_after_crossing() {
        let mut pool = ShipPool::new();
        let mut rng = rng();
        pool.update(0, 80, 24, &mut rng);
        pool.update(10_000, 80, 24, &mut rng);
        let ship = pool.ships()[0].clone();

        // Fully off-screen by its expiry time.
        let end_x = ship.x_at(ship.expires_at_ms);
        assert!(end_x >= 80.0 - 1e-3 || end_x + ship.sprite_width() <= 1e-3);

        pool.update(ship.expires_at_ms, 80, 24, &mut rng);
        assert!(!pool.ships().contains(&ship));
    }

    #[test]
    fn test_pool_is_capped() {
        let mut pool = ShipPool::new();
        let mut rng = rng();
        // Spawn attempts far faster than ships can expire on a huge screen.
        for step in 0..50u64 {
            pool.update(step * SPAWN_DELAY_MS.end, 10_000, 24, &mut rng);
        }
        assert_eq!(pool.len(), MAX_SHIPS);
    }

    #[test]
    fn test_clear_cancels_everything() {
        let mut pool = ShipPool::new();
        let mut rng = rng();
        pool.update(0, 80, 24, &mut rng);
        pool.update(10_000, 80, 24, &mut rng);
        assert!(!pool.is_empty());

        pool.clear();
        assert!(pool.is_empty());
        assert!(pool.next_spawn_ms.is_none());
    }

    #[test]
    fn test_tiny_screen_never_spawns() {
        let mut pool = ShipPool::new();
        let mut rng = rng();
        for t in 0..20u64 {
            pool.update(t * 10_000, 80, 2, &mut rng);
        }
        assert!(pool.is_empty());
    }

    #[test]
    fn test_render_clips_sprite() {
        let pool = ShipPool {
            ships: vec![Ship {
                sprite: "<=#=>",
                row: 1,
                start_x: -2.0,
                velocity: 0.0,
                color: (255, 255, 255),
                spawned_at_ms: 0,
                expires_at_ms: 1_000,
            }],
            next_spawn_ms: None,
        };
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 3));
        pool.render(&mut buf, 0);

        assert_eq!(buf[(0, 1)].symbol(), "#");
        assert_eq!(buf[(1, 1)].symbol(), "=");
        assert_eq!(buf[(2, 1)].symbol(), ">");
        assert_eq!(buf[(3, 1)].symbol(), " ");
    }
}
