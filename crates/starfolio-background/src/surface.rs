//! Drawing surface abstraction.

use ratatui::buffer::Buffer;

use crate::chars::{HALO_CHAR, STAR_CHARS};
use crate::color::blend;

/// Radius at which a star gains a halo.
const HALO_RADIUS: f32 = 1.5;

/// Halo brightness relative to the core.
const HALO_ALPHA: f32 = 0.25;

/// Something the starfield can paint onto.
pub trait DrawSurface {
    /// Paint a filled, softly blurred circle centred at `(x, y)`.
    ///
    /// Coordinates are in surface units; anything outside the surface is
    /// clipped.
    fn fill_soft_circle(&mut self, x: f32, y: f32, radius: f32, rgb: (u8, u8, u8), alpha: f32);
}

/// Pick a glyph for a star radius.
pub(crate) fn star_glyph(radius: f32) -> char {
    let idx = if radius < 0.9 {
        0
    } else if radius < 1.4 {
        1
    } else if radius < 1.8 {
        2
    } else {
        3
    };
    STAR_CHARS[idx]
}

/// Map surface-relative coordinates to an absolute cell inside `buf`.
fn cell_position(buf: &Buffer, x: f32, y: f32) -> Option<(u16, u16)> {
    if !(x >= 0.0 && y >= 0.0) {
        return None;
    }
    let area = buf.area;
    let (cx, cy) = (x as u16, y as u16);
    if cx >= area.width || cy >= area.height {
        return None;
    }
    Some((area.x + cx, area.y + cy))
}

impl DrawSurface for Buffer {
    fn fill_soft_circle(&mut self, x: f32, y: f32, radius: f32, rgb: (u8, u8, u8), alpha: f32) {
        let Some((cx, cy)) = cell_position(self, x, y) else {
            return;
        };

        if let Some(cell) = self.cell_mut((cx, cy)) {
            cell.set_char(star_glyph(radius)).set_fg(blend(rgb, alpha));
        }

        if radius >= HALO_RADIUS {
            let halo = blend(rgb, alpha * HALO_ALPHA);
            for nx in [cx.checked_sub(1), cx.checked_add(1)].into_iter().flatten() {
                if nx < self.area.x || nx >= self.area.right() {
                    continue;
                }
                if let Some(cell) = self.cell_mut((nx, cy))
                    && cell.symbol() == " "
                {
                    cell.set_char(HALO_CHAR).set_fg(halo);
                }
            }
        }
    }
}
