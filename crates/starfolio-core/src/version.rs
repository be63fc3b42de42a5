//! Selectable page versions.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// One of the three visual versions of the portfolio.
///
/// They share content and only differ in backdrop density and styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageVersion {
    /// Plain dark page with a sparse starfield.
    Classic,
    /// Denser starfield with gold accents.
    Starfield,
    /// Full theme: ships, opening crawl, lightsaber scrollbar.
    #[default]
    Saga,
}

/// Blade colour for the lightsaber scroll indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaberColor {
    Blue,
    Green,
    Red,
}

impl SaberColor {
    /// Glow colour of the blade.
    pub fn glow(self) -> (u8, u8, u8) {
        match self {
            SaberColor::Blue => (47, 140, 255),
            SaberColor::Green => (60, 230, 90),
            SaberColor::Red => (255, 48, 48),
        }
    }
}

impl PageVersion {
    /// All versions in cycling order.
    pub const ALL: [PageVersion; 3] = [
        PageVersion::Classic,
        PageVersion::Starfield,
        PageVersion::Saga,
    ];

    /// Cycle to the next version.
    pub fn next(self) -> Self {
        match self {
            PageVersion::Classic => PageVersion::Starfield,
            PageVersion::Starfield => PageVersion::Saga,
            PageVersion::Saga => PageVersion::Classic,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            PageVersion::Classic => "classic",
            PageVersion::Starfield => "starfield",
            PageVersion::Saga => "saga",
        }
    }

    /// Parse a version name as accepted on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Number of stars in the backdrop.
    pub fn density(self) -> usize {
        match self {
            PageVersion::Classic => 120,
            PageVersion::Starfield => 200,
            PageVersion::Saga => 260,
        }
    }

    /// Whether ships fly across the backdrop.
    pub fn has_ships(self) -> bool {
        self == PageVersion::Saga
    }

    /// Whether the opening crawl plays on start.
    pub fn has_crawl(self) -> bool {
        self == PageVersion::Saga
    }

    /// Accent colour for headings and highlights.
    pub fn accent(self) -> Color {
        match self {
            PageVersion::Classic => Color::Rgb(59, 130, 246),
            PageVersion::Starfield => Color::Rgb(255, 232, 31),
            PageVersion::Saga => Color::Rgb(255, 232, 31),
        }
    }

    /// Lightsaber colour for the scroll indicator.
    pub fn saber(self) -> SaberColor {
        match self {
            PageVersion::Classic => SaberColor::Blue,
            PageVersion::Starfield => SaberColor::Blue,
            PageVersion::Saga => SaberColor::Green,
        }
    }
}
