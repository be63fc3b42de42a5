//! Color utility functions for backdrop rendering.

use ratatui::style::Color;

/// Scale an RGB triple by `alpha` against a black background.
pub fn blend(rgb: (u8, u8, u8), alpha: f32) -> Color {
    let a = alpha.clamp(0.0, 1.0);
    let scale = |c: u8| (c as f32 * a).round() as u8;
    Color::Rgb(scale(rgb.0), scale(rgb.1), scale(rgb.2))
}

/// Shimmer cycle length.
const SHIMMER_PERIOD_MS: u64 = 2_400;

/// Holographic border colour: hue drifts through cyan, blue and violet.
///
/// `offset` shifts the phase so neighbouring cells shimmer out of step.
pub fn holo_shimmer(elapsed_ms: u64, offset: f32) -> Color {
    let within = (elapsed_ms % SHIMMER_PERIOD_MS) as f32 / SHIMMER_PERIOD_MS as f32;
    let phase = (within + offset).fract();
    let wave = (phase * 2.0 * std::f32::consts::PI).sin() * 0.5 + 0.5;
    hsl_to_rgb(180.0 + wave * 90.0, 0.85, 0.6)
}

/// Convert HSL to RGB color.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Color {
    if s == 0.0 {
        let v = (l * 255.0) as u8;
        return Color::Rgb(v, v, v);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    let h = h / 360.0;

    let r = hue_to_rgb(p, q, h + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h);
    let b = hue_to_rgb(p, q, h - 1.0 / 3.0);

    Color::Rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_extremes() {
        assert_eq!(blend((200, 100, 50), 1.0), Color::Rgb(200, 100, 50));
        assert_eq!(blend((200, 100, 50), 0.0), Color::Rgb(0, 0, 0));
        assert_eq!(blend((200, 100, 50), 0.5), Color::Rgb(100, 50, 25));
        // Out-of-range alpha is clamped
        assert_eq!(blend((10, 10, 10), 3.0), Color::Rgb(10, 10, 10));
    }

    #[test]
    fn test_hsl_gray() {
        assert_eq!(hsl_to_rgb(0.0, 0.0, 0.5), Color::Rgb(127, 127, 127));
    }

    #[test]
    fn test_holo_shimmer_stays_cool() {
        for ms in (0..2400).step_by(100) {
            let Color::Rgb(r, _, b) = holo_shimmer(ms, 0.0) else {
                panic!("expected rgb");
            };
            // Cyan..violet never goes warm
            assert!(b >= r, "hue drifted warm at {ms}ms: r={r} b={b}");
        }
    }

    #[test]
    fn test_holo_shimmer_steady_after_long_uptime() {
        let weeks = SHIMMER_PERIOD_MS * 1_000_000;
        for ms in [0, 1, 600, 1_199, 2_399] {
            assert_eq!(holo_shimmer(weeks + ms, 0.1), holo_shimmer(ms, 0.1));
        }
    }
}
