//! Character constants for backdrop rendering.

/// Star glyphs from smallest to largest radius.
pub const STAR_CHARS: &[char] = &['·', '•', '✶', '✦'];

/// Halo glyph painted next to large stars.
pub const HALO_CHAR: char = '·';

/// Ship sprites flying to the right.
pub const SHIPS_RIGHT: &[&str] = &["=<>=", "-=>", "|o|", "<=#=>"];

/// Ship sprites flying to the left.
pub const SHIPS_LEFT: &[&str] = &["=<>=", "<=-", "|o|", "<=#=>"];

/// Lightsaber blade core.
pub const BLADE_CHAR: char = '┃';

/// Lightsaber hilt, top row then bottom row.
pub const HILT_CHARS: [char; 2] = ['▓', '▒'];
