//! Lightsaber scroll indicator.
//!
//! A hilt sits at the bottom of a one-column track and the blade grows
//! upward as the page scrolls.

use ratatui::{buffer::Buffer, layout::Rect, style::Color};
use starfolio_core::SaberColor;

use crate::chars::{BLADE_CHAR, HILT_CHARS};
use crate::color::blend;

/// Rows taken by the hilt.
const HILT_ROWS: u16 = 2;

/// Hum flicker cycle in milliseconds.
const HUM_PERIOD_MS: u64 = 1_131;

const HILT_RGB: [(u8, u8, u8); 2] = [(170, 170, 180), (110, 110, 120)];

/// Blade length in rows for a scroll `progress` in `[0, 1]` along `track` rows.
pub fn blade_length(progress: f32, track: u16) -> u16 {
    let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
    (progress * track as f32).round() as u16
}

/// Blade brightness in `[0.7, 1.0]` at `elapsed_ms`.
fn hum(elapsed_ms: u64) -> f32 {
    let within = (elapsed_ms % HUM_PERIOD_MS) as f32 / HUM_PERIOD_MS as f32;
    0.85 + 0.15 * (within * std::f32::consts::TAU).sin()
}

/// Draw the saber into the single column `area`.
///
/// `animate` enables the hum flicker; without it the blade is steady.
pub fn render_saber(
    buf: &mut Buffer,
    area: Rect,
    progress: f32,
    color: SaberColor,
    elapsed_ms: u64,
    animate: bool,
) {
    let area = area.intersection(buf.area);
    if area.width == 0 || area.height <= HILT_ROWS {
        return;
    }
    let x = area.x;
    let bottom = area.bottom();

    for (i, rgb) in HILT_RGB.iter().enumerate() {
        let y = bottom - HILT_ROWS + i as u16;
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_char(HILT_CHARS[i]).set_fg(Color::Rgb(rgb.0, rgb.1, rgb.2));
        }
    }

    let track = area.height - HILT_ROWS;
    let length = blade_length(progress, track);
    let hum = if animate { hum(elapsed_ms) } else { 1.0 };
    let blade = blend(color.glow(), hum);
    let hilt_top = bottom - HILT_ROWS;
    for y in (hilt_top - length)..hilt_top {
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_char(BLADE_CHAR).set_fg(blade);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blade_length_bounds() {
        assert_eq!(blade_length(0.0, 20), 0);
        assert_eq!(blade_length(1.0, 20), 20);
        assert_eq!(blade_length(0.5, 20), 10);
        assert_eq!(blade_length(-3.0, 20), 0);
        assert_eq!(blade_length(7.0, 20), 20);
        assert_eq!(blade_length(f32::NAN, 20), 0);
    }

    #[test]
    fn test_render_full_blade() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 6));
        let column = Rect::new(2, 0, 1, 6);
        render_saber(&mut buf, column, 1.0, SaberColor::Green, 0, false);

        for y in 0..4 {
            assert_eq!(buf[(2, y)].symbol(), "┃");
            assert_eq!(buf[(2, y)].fg, Color::Rgb(60, 230, 90));
        }
        assert_eq!(buf[(2, 4)].symbol(), "▓");
        assert_eq!(buf[(2, 5)].symbol(), "▒");
        assert_eq!(buf[(1, 0)].symbol(), " ");
    }

    #[test]
    fn test_render_half_blade() {
        let area = Rect::new(0, 0, 1, 6);
        let mut buf = Buffer::empty(area);
        render_saber(&mut buf, area, 0.5, SaberColor::Blue, 0, false);
        assert_eq!(buf[(0, 0)].symbol(), " ");
        assert_eq!(buf[(0, 1)].symbol(), " ");
        assert_eq!(buf[(0, 2)].symbol(), "┃");
        assert_eq!(buf[(0, 3)].symbol(), "┃");
    }

    #[test]
    fn test_hum_steady_after_long_uptime() {
        let weeks = HUM_PERIOD_MS * 2_000_000;
        for ms in [0, 1, 250, 700, 1_130] {
            assert_eq!(hum(weeks + ms), hum(ms));
            assert!((0.7..=1.0).contains(&hum(ms)));
        }
        assert_ne!(hum(0), hum(283));
    }

    #[test]
    fn test_too_short_draws_nothing() {
        let area = Rect::new(0, 0, 1, 2);
        let mut buf = Buffer::empty(area);
        render_saber(&mut buf, area, 1.0, SaberColor::Red, 0, true);
        assert_eq!(buf, Buffer::empty(Rect::new(0, 0, 1, 2)));
    }
}
