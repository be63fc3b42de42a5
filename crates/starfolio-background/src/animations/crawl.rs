//! Opening crawl (stateless apart from the skip flag).
//!
//! A short prelude fades in and out, then the text block rises from the
//! bottom of the screen, narrowing toward the top to fake perspective.

use ratatui::{buffer::Buffer, style::Modifier};
use starfolio_core::wrap_words;

use crate::color::blend;

/// How long the prelude stays up.
pub const PRELUDE_MS: u64 = 3_000;

/// Time for the crawl to rise by one row.
pub const ROW_MS: u64 = 250;

/// Prelude fade-in and fade-out duration.
const FADE_MS: u64 = 600;

/// Column width the crawl body is wrapped to.
const CRAWL_WIDTH: usize = 44;

/// Width fraction visible at the very top row.
const TOP_NARROWING: f32 = 0.45;

pub const PRELUDE_TEXT: &str = "A long time ago in a galaxy far, far away....";

const PRELUDE_RGB: (u8, u8, u8) = (75, 213, 238);
const CRAWL_RGB: (u8, u8, u8) = (255, 232, 31);

/// Where the crawl is at a given moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CrawlPhase {
    /// Blue prelude line.
    Prelude,
    /// Text rising; `offset` is how many rows it has risen.
    Rolling { offset: f32 },
    /// Nothing left to show.
    Finished,
}

/// The opening crawl.
#[derive(Debug, Clone)]
pub struct Crawl {
    lines: Vec<String>,
    title_rows: usize,
    skipped: bool,
}

impl Crawl {
    /// Build a crawl with an episode line, a title and wrapped body paragraphs.
    pub fn new(episode: &str, title: &str, paragraphs: &[String]) -> Self {
        let mut lines = vec![episode.to_string(), title.to_uppercase(), String::new()];
        let title_rows = 2;
        for paragraph in paragraphs {
            lines.extend(wrap_words(paragraph, CRAWL_WIDTH));
            lines.push(String::new());
        }
        Self {
            lines,
            title_rows,
            skipped: false,
        }
    }

    /// Stop the crawl immediately.
    pub fn skip(&mut self) {
        self.skipped = true;
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Phase at `elapsed_ms` since the crawl started, for a screen `height` rows tall.
    pub fn phase(&self, elapsed_ms: u64, height: u16) -> CrawlPhase {
        if self.skipped {
            return CrawlPhase::Finished;
        }
        if elapsed_ms < PRELUDE_MS {
            return CrawlPhase::Prelude;
        }
        let offset = (elapsed_ms - PRELUDE_MS) as f32 / ROW_MS as f32;
        if offset > height as f32 + self.lines.len() as f32 {
            CrawlPhase::Finished
        } else {
            CrawlPhase::Rolling { offset }
        }
    }

    /// Whether the crawl still has something to show.
    pub fn is_active(&self, elapsed_ms: u64, height: u16) -> bool {
        self.phase(elapsed_ms, height) != CrawlPhase::Finished
    }

    /// Draw the current frame onto `buf`.
    pub fn render(&self, buf: &mut Buffer, elapsed_ms: u64) {
        let area = buf.area;
        if area.width == 0 || area.height == 0 {
            return;
        }
        match self.phase(elapsed_ms, area.height) {
            CrawlPhase::Finished => {}
            CrawlPhase::Prelude => {
                let alpha = prelude_alpha(elapsed_ms);
                let row = area.height / 2;
                let color = blend(PRELUDE_RGB, alpha);
                put_centered(buf, row, PRELUDE_TEXT, area.width as usize, color, false);
            }
            CrawlPhase::Rolling { offset } => {
                let height = area.height as f32;
                for (i, line) in self.lines.iter().enumerate() {
                    let row = height - offset + i as f32;
                    if row < 0.0 || row >= height {
                        continue;
                    }
                    let depth = row / height;
                    let visible = visible_width(area.width, depth);
                    let color = blend(CRAWL_RGB, (depth * 2.0).min(1.0));
                    put_centered(buf, row as u16, line, visible, color, i < self.title_rows);
                }
            }
        }
    }
}

/// Prelude brightness: fade in, hold, fade out.
fn prelude_alpha(elapsed_ms: u64) -> f32 {
    let fade_in = elapsed_ms as f32 / FADE_MS as f32;
    let fade_out = PRELUDE_MS.saturating_sub(elapsed_ms) as f32 / FADE_MS as f32;
    fade_in.min(fade_out).clamp(0.0, 1.0)
}

/// Columns visible on a row at relative `depth` (0 = top, 1 = bottom).
fn visible_width(width: u16, depth: f32) -> usize {
    let fraction = TOP_NARROWING + (1.0 - TOP_NARROWING) * depth.clamp(0.0, 1.0);
    (width as f32 * fraction).round() as usize
}

/// Write `text` centred on `row`, keeping only its middle `max_width` chars.
fn put_centered(
    buf: &mut Buffer,
    row: u16,
    text: &str,
    max_width: usize,
    color: ratatui::style::Color,
    bold: bool,
) {
    let area = buf.area;
    let chars: Vec<char> = text.chars().collect();
    let keep = chars.len().min(max_width).min(area.width as usize);
    let skip = (chars.len() - keep) / 2;
    let start = area.x + (area.width - keep as u16) / 2;
    for (i, ch) in chars[skip..skip + keep].iter().enumerate() {
        if let Some(cell) = buf.cell_mut((start + i as u16, area.y + row)) {
            cell.set_char(*ch).set_fg(color);
            if bold {
                cell.modifier.insert(Modifier::BOLD);
            }
        }
    }
}
