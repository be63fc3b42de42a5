//! Portfolio page layout.
//!
//! The page is a flat list of styled lines. Cards are tracked as line ranges
//! so the pointer can be mapped back to the card under it.

use std::ops::Range;

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use starfolio_background::holo_shimmer;
use starfolio_config::Profile;
use starfolio_core::wrap_words;

const TEXT: Color = Color::Rgb(228, 228, 231);
const MUTED: Color = Color::Rgb(161, 161, 170);
const FAINT: Color = Color::Rgb(113, 113, 122);
const CARD_BORDER: Color = Color::Rgb(63, 63, 70);
/// Hovered border when motion is off.
const HOVER_STATIC: Color = Color::Rgb(34, 211, 238);
const LIVE: Color = Color::Rgb(74, 222, 128);

/// Label column width in the contact card.
const LABEL_WIDTH: usize = 10;

/// Shimmer phase step between consecutive border rows.
const SHIMMER_STEP: f32 = 0.08;

/// Sections the keyboard can jump to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Projects,
    Contact,
}

/// Per-frame paint settings.
#[derive(Debug, Clone, Copy)]
pub struct PageStyle {
    pub accent: Color,
    /// Card under the pointer.
    pub hovered: Option<usize>,
    pub elapsed_ms: u64,
    /// Whether the hover border shimmers.
    pub animate: bool,
}

/// A laid-out page.
#[derive(Debug, Default)]
pub struct Page {
    lines: Vec<Line<'static>>,
    cards: Vec<Range<usize>>,
    projects: usize,
    contact: usize,
}

impl Page {
    /// Lay out `profile` for a column `width` cells wide.
    pub fn build(profile: &Profile, style: PageStyle, width: u16, year: i32) -> Self {
        let mut builder = Builder::new(width.max(1) as usize, style);

        builder.hero(profile);

        builder.heading("About Me");
        builder.about(profile);

        builder.heading("Tech Stack");
        for group in &profile.tech_stack {
            let mut content = builder.wrapped_styled(&group.title, builder.accent_bold());
            content.extend(builder.wrapped(&group.items.join("  •  "), MUTED));
            builder.card(content);
            builder.blank();
        }

        let projects = builder.lines.len();
        builder.heading("Projects");
        for project in &profile.projects {
            let mut content = builder.wrapped_styled(
                &project.name,
                Style::new().fg(TEXT).add_modifier(Modifier::BOLD),
            );
            if let Some(status) = &project.status {
                content.extend(builder.wrapped(&format!("● {status}"), LIVE));
            }
            content.extend(builder.wrapped(&project.description, MUTED));
            if !project.tech.is_empty() {
                content.push(Line::default());
                let tags = project
                    .tech
                    .iter()
                    .map(|tag| format!("[{tag}]"))
                    .collect::<Vec<_>>()
                    .join(" ");
                content.extend(builder.wrapped(&tags, FAINT));
            }
            builder.card(content);
            builder.blank();
        }

        builder.heading("Beyond Code");
        for interest in &profile.interests {
            let mut content = builder.wrapped_styled(&interest.title, builder.accent_bold());
            content.extend(builder.wrapped(&interest.description, MUTED));
            builder.card(content);
            builder.blank();
        }

        let contact = builder.lines.len();
        builder.heading("Let's Connect");
        builder.contact(profile);

        builder.blank();
        builder.blank();
        builder.centered(
            &format!("© {year} {} · Built with Rust and ratatui", profile.name),
            Style::new().fg(FAINT),
        );
        builder.blank();

        Self {
            lines: builder.lines,
            cards: builder.cards,
            projects,
            contact,
        }
    }

    #[cfg(test)]
    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Line ranges covered by cards, in page order.
    #[cfg(test)]
    pub fn cards(&self) -> &[Range<usize>] {
        &self.cards
    }

    /// Index of the card covering `line`.
    pub fn card_at(&self, line: usize) -> Option<usize> {
        self.cards.iter().position(|card| card.contains(&line))
    }

    /// First line of `section`.
    pub fn anchor(&self, section: Section) -> usize {
        match section {
            Section::Projects => self.projects,
            Section::Contact => self.contact,
        }
    }

    pub fn max_scroll(&self, viewport: u16) -> usize {
        self.lines.len().saturating_sub(viewport as usize)
    }

    /// Clamp `scroll` to `[0, len - viewport]`.
    pub fn clamp_scroll(&self, scroll: usize, viewport: u16) -> usize {
        scroll.min(self.max_scroll(viewport))
    }

    /// Scroll progress in `[0, 1]`. A page that fits counts as fully read.
    pub fn progress(&self, scroll: usize, viewport: u16) -> f32 {
        let max = self.max_scroll(viewport);
        if max == 0 {
            return 1.0;
        }
        scroll.min(max) as f32 / max as f32
    }

    /// Lines visible at `scroll` in a `viewport` rows tall window.
    pub fn visible(&self, scroll: usize, viewport: u16) -> &[Line<'static>] {
        let start = self.clamp_scroll(scroll, viewport);
        let end = (start + viewport as usize).min(self.lines.len());
        &self.lines[start..end]
    }
}

struct Builder {
    width: usize,
    style: PageStyle,
    lines: Vec<Line<'static>>,
    cards: Vec<Range<usize>>,
}

impl Builder {
    fn new(width: usize, style: PageStyle) -> Self {
        Self {
            width,
            style,
            lines: Vec::new(),
            cards: Vec::new(),
        }
    }

    fn accent_bold(&self) -> Style {
        Style::new()
            .fg(self.style.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Inner text width of a card.
    fn inner_width(&self) -> usize {
        self.width.saturating_sub(4).max(1)
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn centered(&mut self, text: &str, style: Style) {
        for row in wrap_words(text, self.width) {
            self.lines.push(Line::from(Span::styled(row, style)).centered());
        }
    }

    /// Wrap `text` to the card width.
    fn wrapped(&self, text: &str, color: Color) -> Vec<Line<'static>> {
        self.wrapped_styled(text, Style::new().fg(color))
    }

    fn wrapped_styled(&self, text: &str, style: Style) -> Vec<Line<'static>> {
        wrap_words(text, self.inner_width())
            .into_iter()
            .map(|row| Line::from(Span::styled(row, style)))
            .collect()
    }

    fn heading(&mut self, title: &str) {
        self.blank();
        self.centered(&format!("─── {title} ───"), self.accent_bold());
        self.blank();
    }

    fn border_style(&self, index: usize, row: usize) -> Style {
        if self.style.hovered != Some(index) {
            return Style::new().fg(CARD_BORDER);
        }
        let color = if self.style.animate {
            holo_shimmer(self.style.elapsed_ms, row as f32 * SHIMMER_STEP)
        } else {
            HOVER_STATIC
        };
        Style::new().fg(color)
    }

    /// Box `content` in a rounded border and record its line range.
    fn card(&mut self, content: Vec<Line<'static>>) {
        let index = self.cards.len();
        let inner = self.inner_width();
        let start = self.lines.len();
        let rule = "─".repeat(inner + 2);

        self.lines.push(Line::from(Span::styled(
            format!("╭{rule}╮"),
            self.border_style(index, 0),
        )));
        for (i, line) in content.into_iter().enumerate() {
            let border = self.border_style(index, i + 1);
            let pad = inner.saturating_sub(line.width());
            let mut spans = Vec::with_capacity(line.spans.len() + 3);
            spans.push(Span::styled("│ ", border));
            spans.extend(line.spans);
            spans.push(Span::raw(" ".repeat(pad)));
            spans.push(Span::styled(" │", border));
            self.lines.push(Line::from(spans));
        }
        let rows = self.lines.len() - start;
        self.lines.push(Line::from(Span::styled(
            format!("╰{rule}╯"),
            self.border_style(index, rows),
        )));

        self.cards.push(start..self.lines.len());
    }

    fn hero(&mut self, profile: &Profile) {
        self.blank();
        self.blank();
        self.centered(&format!("✦ {} ✦", profile.kicker), self.accent_bold());
        self.blank();

        let name_style = Style::new().fg(TEXT).add_modifier(Modifier::BOLD);
        match profile.name.rsplit_once(' ') {
            Some((first, last)) if profile.name.chars().count() <= self.width => {
                let name = Line::from(vec![
                    Span::styled(format!("{first} "), name_style),
                    Span::styled(last.to_string(), self.accent_bold()),
                ]);
                self.lines.push(name.centered());
            }
            _ => self.centered(&profile.name, name_style),
        }
        self.centered(&profile.headline, Style::new().fg(MUTED));
        self.blank();
        self.centered(&profile.summary, Style::new().fg(TEXT));
        self.blank();

        let buttons = "[ Get in Touch · c ]   [ View Projects · p ]";
        if buttons.chars().count() <= self.width {
            self.lines.push(
                Line::from(vec![
                    Span::styled("[ Get in Touch · c ]", self.accent_bold()),
                    Span::raw("   "),
                    Span::styled(
                        "[ View Projects · p ]",
                        Style::new().fg(TEXT).add_modifier(Modifier::BOLD),
                    ),
                ])
                .centered(),
            );
        } else {
            self.centered("[ Get in Touch · c ]", self.accent_bold());
            self.centered("[ View Projects · p ]", Style::new().fg(TEXT));
        }
        if let Some(resume) = &profile.resume {
            self.centered(&format!("Resume: {resume}"), Style::new().fg(FAINT));
        }
        self.blank();
    }

    fn about(&mut self, profile: &Profile) {
        let mut content = Vec::new();
        for (i, paragraph) in profile.about.iter().enumerate() {
            if i > 0 {
                content.push(Line::default());
            }
            content.extend(self.wrapped(paragraph, TEXT));
        }

        let education = &profile.education;
        if !content.is_empty() {
            content.push(Line::default());
        }
        content.push(Line::from(Span::styled("Education", self.accent_bold())));
        content.extend(
            wrap_words(&education.degree, self.inner_width())
                .into_iter()
                .map(|row| {
                    Line::from(Span::styled(
                        row,
                        Style::new().fg(TEXT).add_modifier(Modifier::BOLD),
                    ))
                }),
        );
        content.extend(self.wrapped(&education.school, MUTED));
        if !education.grade.is_empty() {
            content.extend(self.wrapped(&education.grade, self.style.accent));
        }
        self.card(content);
    }

    /// Label column followed by wrapped values.
    fn labelled(&self, label: &str, value: &str, color: Color) -> Vec<Line<'static>> {
        let value_width = self.inner_width().saturating_sub(LABEL_WIDTH).max(1);
        wrap_words(value, value_width)
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                let head = if i == 0 { label } else { "" };
                Line::from(vec![
                    Span::styled(format!("{head:<LABEL_WIDTH$}"), self.accent_bold()),
                    Span::styled(row, Style::new().fg(color)),
                ])
            })
            .collect()
    }

    fn contact(&mut self, profile: &Profile) {
        let contact = &profile.contact;
        self.centered(&contact.blurb, Style::new().fg(MUTED));
        self.blank();

        let mut content = Vec::new();
        content.extend(self.labelled("Email", &contact.email, TEXT));
        content.extend(self.labelled("", &contact.email_uri(), FAINT));
        content.extend(self.labelled("Phone", &contact.phone, TEXT));
        content.extend(self.labelled("", &contact.phone_uri(), FAINT));
        if !profile.socials.is_empty() {
            content.push(Line::default());
        }
        for link in &profile.socials {
            content.extend(self.labelled(&link.label, &link.url, MUTED));
        }
        if let Some(resume) = &profile.resume {
            content.push(Line::default());
            content.extend(self.labelled("Resume", resume, MUTED));
        }
        self.card(content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> PageStyle {
        PageStyle {
            accent: Color::Rgb(255, 232, 31),
            hovered: None,
            elapsed_ms: 0,
            animate: true,
        }
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn page(width: u16) -> Page {
        Page::build(&Profile::default(), style(), width, 2026)
    }

    #[test]
    fn test_card_count_matches_profile() {
        let profile = Profile::default();
        let page = page(70);
        let expected = 1
            + profile.tech_stack.len()
            + profile.projects.len()
            + profile.interests.len()
            + 1;
        assert_eq!(page.cards().len(), expected);
    }

    #[test]
    fn test_lines_fit_width() {
        for width in [30u16, 50, 84] {
            let page = page(width);
            for line in page.lines() {
                assert!(
                    line.width() <= width as usize,
                    "line {:?} wider than {width}",
                    text(line)
                );
            }
        }
    }

    #[test]
    fn test_card_at_maps_lines() {
        let page = page(70);
        let first = page.cards()[0].clone();
        assert_eq!(page.card_at(first.start), Some(0));
        assert_eq!(page.card_at(first.end - 1), Some(0));
        assert_eq!(page.card_at(0), None);

        let last = page.cards().len() - 1;
        let range = page.cards()[last].clone();
        assert_eq!(page.card_at(range.start + 1), Some(last));
    }

    #[test]
    fn test_anchors_point_at_headings() {
        let page = page(70);
        let projects = page.anchor(Section::Projects);
        let heading: Vec<String> = page.lines()[projects..projects + 3]
            .iter()
            .map(text)
            .collect();
        assert!(heading.iter().any(|l| l.contains("Projects")));

        let contact = page.anchor(Section::Contact);
        assert!(contact > projects);
        let heading: Vec<String> = page.lines()[contact..contact + 3]
            .iter()
            .map(text)
            .collect();
        assert!(heading.iter().any(|l| l.contains("Let's Connect")));
    }

    #[test]
    fn test_scroll_clamping() {
        let page = page(70);
        let len = page.len();
        assert_eq!(page.clamp_scroll(0, 20), 0);
        assert_eq!(page.clamp_scroll(usize::MAX, 20), len - 20);
        assert_eq!(page.clamp_scroll(5, len as u16 + 10), 0);
        assert_eq!(page.visible(usize::MAX, 20).len(), 20);
    }

    #[test]
    fn test_progress() {
        let page = page(70);
        let max = page.max_scroll(20);
        assert_eq!(page.progress(0, 20), 0.0);
        assert_eq!(page.progress(max, 20), 1.0);
        assert_eq!(page.progress(max * 10, 20), 1.0);
        assert_eq!(page.progress(0, u16::MAX), 1.0);
    }

    #[test]
    fn test_footer_has_year_and_name() {
        let page = page(70);
        let footer = page
            .lines()
            .iter()
            .map(text)
            .find(|line| line.contains('©'))
            .unwrap_or_default();
        assert!(footer.contains("2026"));
        assert!(footer.contains("Ada Calloway"));
    }

    #[test]
    fn test_contact_lists_uris() {
        let all: Vec<String> = page(70).lines().iter().map(text).collect();
        assert!(all.iter().any(|l| l.contains("mailto:ada@example.com")));
        assert!(all.iter().any(|l| l.contains("tel:+15550100")));
        assert!(all.iter().any(|l| l.contains("Live on Play Store")));
    }

    fn border_color(page: &Page, card: usize) -> Option<Color> {
        let start = page.cards()[card].start;
        page.lines()[start].spans[0].style.fg
    }

    #[test]
    fn test_hovered_card_border() {
        let plain = page(70);
        let hovered = Page::build(
            &Profile::default(),
            PageStyle {
                hovered: Some(1),
                ..style()
            },
            70,
            2026,
        );
        assert_eq!(border_color(&plain, 1), Some(CARD_BORDER));
        assert_ne!(border_color(&hovered, 1), Some(CARD_BORDER));
        assert_eq!(border_color(&hovered, 0), Some(CARD_BORDER));
    }

    #[test]
    fn test_static_hover_does_not_shimmer() {
        let build = |elapsed_ms| {
            Page::build(
                &Profile::default(),
                PageStyle {
                    hovered: Some(0),
                    elapsed_ms,
                    animate: false,
                    ..style()
                },
                70,
                2026,
            )
        };
        assert_eq!(border_color(&build(0), 0), Some(HOVER_STATIC));
        assert_eq!(border_color(&build(1_200), 0), Some(HOVER_STATIC));
    }

    #[test]
    fn test_shimmer_moves_over_time() {
        let build = |elapsed_ms| {
            Page::build(
                &Profile::default(),
                PageStyle {
                    hovered: Some(0),
                    elapsed_ms,
                    ..style()
                },
                70,
                2026,
            )
        };
        assert_ne!(border_color(&build(0), 0), border_color(&build(600), 0));
    }
}
