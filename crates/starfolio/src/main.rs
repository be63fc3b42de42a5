mod frame;
mod logging;
mod page;

use std::io::stdout;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use chrono::{Datelike, Local};
use clap::Parser;
use color_eyre::eyre::bail;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::Paragraph,
};
use starfolio_background::{Backdrop, Crawl, render_saber};
use starfolio_config::{Config, Profile};
use starfolio_core::{MotionMode, PageVersion, SpeedMultiplier};

use crate::frame::FrameScheduler;
use crate::page::{Page, PageStyle, Section};

/// Environment override for the reduced-motion preference.
const REDUCED_MOTION_ENV: &str = "STARFOLIO_REDUCED_MOTION";

/// Widest the page column gets.
const MAX_PAGE_WIDTH: u16 = 84;

/// Lines per mouse wheel notch.
const WHEEL_STEP: isize = 3;

/// Input poll timeout while no frame is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// A terminal portfolio with a galactic starfield backdrop.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Write the default config file and exit
    #[arg(long)]
    write_config: bool,

    /// Let --write-config replace an existing file
    #[arg(long, requires = "write_config")]
    force: bool,

    /// Render a static backdrop with no movement
    #[arg(long)]
    reduced_motion: bool,

    /// Page version: classic, starfield or saga
    #[arg(long, value_parser = parse_page)]
    page: Option<PageVersion>,

    /// Initial star speed: 1, 2 or 0.5
    #[arg(long, value_parser = parse_speed)]
    speed: Option<SpeedMultiplier>,

    /// Config file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
}

fn parse_page(value: &str) -> Result<PageVersion, String> {
    PageVersion::from_name(value)
        .ok_or_else(|| format!("unknown page version '{value}' (classic, starfield, saga)"))
}

fn parse_speed(value: &str) -> Result<SpeedMultiplier, String> {
    SpeedMultiplier::from_label(value)
        .ok_or_else(|| format!("unknown speed '{value}' (1, 2, 0.5)"))
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if args.write_config {
        let path = match args.config {
            Some(path) => path,
            None => Config::path()?,
        };
        write_default_config(&path, args.force)?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    if let Some(path) = logging::log_path()
        && let Err(err) = logging::init(&path)
    {
        eprintln!("starfolio: file logging disabled: {err}");
    }
    log::info!("starfolio {} starting", env!("CARGO_PKG_VERSION"));

    let config = load_config(args.config.as_deref());
    let reduced = resolve_reduced_motion(
        args.reduced_motion,
        std::env::var(REDUCED_MOTION_ENV).ok().as_deref(),
        config.reduced_motion,
    );
    let motion = MotionMode::from_reduced_motion(reduced);
    let version = args.page.unwrap_or(config.version);
    let speed = args.speed.unwrap_or(config.speed);
    log::info!("motion={motion:?} version={} speed={}", version.name(), speed.label());

    let app = App::new(config, version, speed, motion);
    let terminal = ratatui::init();
    let result = match execute!(stdout(), EnableMouseCapture) {
        Ok(()) => app.run(terminal),
        Err(err) => Err(err.into()),
    };
    if let Err(err) = execute!(stdout(), DisableMouseCapture) {
        log::warn!("could not disable mouse capture: {err}");
    }
    ratatui::restore();
    result
}

/// Write the defaults to `path`, leaving an existing file alone unless `force`.
fn write_default_config(path: &Path, force: bool) -> color_eyre::Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists; pass --force to replace it",
            path.display()
        );
    }
    Config::default().save_to(path)?;
    Ok(())
}

/// Load the config, falling back to defaults when it cannot be read.
fn load_config(path: Option<&Path>) -> Config {
    let loaded = match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    loaded.unwrap_or_else(|err| {
        log::warn!("{err}; using default config");
        Config::default()
    })
}

/// The command line flag wins, then the environment, then the config file.
fn resolve_reduced_motion(flag: bool, env: Option<&str>, config: Option<bool>) -> bool {
    if flag {
        return true;
    }
    env.and_then(MotionMode::parse_flag)
        .or(config)
        .unwrap_or(false)
}

/// Opening crawl text for `profile`.
fn opening_crawl(profile: &Profile) -> Crawl {
    let mut paragraphs = vec![profile.summary.clone()];
    paragraphs.extend(profile.about.iter().cloned());
    Crawl::new("Episode I", &profile.name, &paragraphs)
}

fn is_quit(key: &KeyEvent) -> bool {
    matches!(
        (key.modifiers, key.code),
        (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C'))
    )
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Loaded configuration, including the portfolio content.
    config: Config,
    /// Active page version.
    version: PageVersion,
    /// Motion mode, fixed at startup.
    motion: MotionMode,
    /// Starfield, ships and crawl.
    backdrop: Backdrop,
    /// Next-frame deadline.
    scheduler: FrameScheduler,
    /// Animation clock origin.
    started: Instant,
    /// First visible page line.
    scroll: usize,
    /// Page laid out on the last frame.
    page: Page,
    /// Where the page was drawn on the last frame.
    page_area: Rect,
    /// Clickable speed control in the status bar.
    speed_button: Rect,
    /// Last known pointer position.
    pointer: Option<Position>,
    /// Card under the pointer.
    hovered: Option<usize>,
    /// Year shown in the footer.
    year: i32,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(
        config: Config,
        version: PageVersion,
        speed: SpeedMultiplier,
        motion: MotionMode,
    ) -> Self {
        let density = config.effective_density(version);
        let mut backdrop = Backdrop::new(version, density, motion, speed);
        if config.show_crawl {
            backdrop = backdrop.with_crawl(opening_crawl(&config.profile));
        }
        let scheduler = FrameScheduler::new(config.frame_interval());

        Self {
            running: false,
            config,
            version,
            motion,
            backdrop,
            scheduler,
            started: Instant::now(),
            scroll: 0,
            page: Page::default(),
            page_area: Rect::default(),
            speed_button: Rect::default(),
            pointer: None,
            hovered: None,
            year: Local::now().year(),
        }
    }

    /// Run the application's main loop, tearing down on exit or error.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        self.started = Instant::now();
        self.scheduler.start(self.started);
        let result = self.event_loop(&mut terminal);
        self.teardown();
        result
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while self.running {
            if self.scheduler.poll(Instant::now()) {
                terminal.draw(|frame| self.render(frame))?;
            }
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Stop frame scheduling and dispose of the backdrop.
    fn teardown(mut self) {
        self.scheduler.cancel();
        self.backdrop.teardown();
        log::info!("starfolio stopped");
    }

    fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let elapsed_ms = self.elapsed_ms();
        let area = frame.area();

        self.backdrop.render(frame.buffer_mut(), elapsed_ms);

        if self.backdrop.render_crawl(frame.buffer_mut(), elapsed_ms) {
            self.page_area = Rect::default();
            self.speed_button = Rect::default();
            let [_, hint] =
                Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);
            frame.render_widget(
                Line::from("press any key to skip").dark_gray().centered(),
                hint,
            );
            return;
        }

        let [body, status] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);
        let page_width = body.width.saturating_sub(4).min(MAX_PAGE_WIDTH);
        let page_area = Rect {
            x: body.x + (body.width - page_width) / 2,
            width: page_width,
            ..body
        };

        // Card ranges only depend on the width, so the last layout is good
        // enough to resolve the hover.
        self.hovered = self.pointer.and_then(|pos| self.card_under(pos));
        self.page = Page::build(
            &self.config.profile,
            PageStyle {
                accent: self.version.accent(),
                hovered: self.hovered,
                elapsed_ms,
                animate: self.motion.is_animated(),
            },
            page_width,
            self.year,
        );
        self.page_area = page_area;
        self.scroll = self.page.clamp_scroll(self.scroll, page_area.height);

        let visible = self.page.visible(self.scroll, page_area.height).to_vec();
        frame.render_widget(Paragraph::new(visible), page_area);

        if body.width > 0 {
            let saber = Rect {
                x: body.right() - 1,
                width: 1,
                ..body
            };
            render_saber(
                frame.buffer_mut(),
                saber,
                self.page.progress(self.scroll, page_area.height),
                self.version.saber(),
                elapsed_ms,
                self.motion.is_animated(),
            );
        }

        self.render_status(frame, status);
    }

    /// Help line with the clickable speed control.
    fn render_status(&mut self, frame: &mut Frame, area: Rect) {
        let accent = self.version.accent();
        let speed = format!("[ {} ]", self.backdrop.speed().label());
        let spans: Vec<Span> = vec![
            "q".bold().fg(accent),
            " quit  ".dark_gray(),
            "s".bold().fg(accent),
            " speed ".dark_gray(),
            speed.bold().fg(accent),
            "  v".bold().fg(accent),
            format!(" {}  ", self.version.name()).dark_gray(),
            "↑↓".bold().fg(accent),
            " scroll  ".dark_gray(),
            "p".bold().fg(accent),
            " projects  ".dark_gray(),
            "c".bold().fg(accent),
            " contact".dark_gray(),
        ];
        let before: usize = spans[..4].iter().map(Span::width).sum();
        let button_width = spans[4].width() as u16;
        let line = Line::from(spans);
        let total = line.width() as u16;

        let (line, start) = if total <= area.width {
            (line.centered(), area.x + (area.width - total) / 2)
        } else {
            (line, area.x)
        };
        self.speed_button =
            Rect::new(start + before as u16, area.y, button_width, 1).intersection(area);
        frame.render_widget(line, area);
    }

    /// Card under the screen position `pos`.
    fn card_under(&self, pos: Position) -> Option<usize> {
        if !self.page_area.contains(pos) {
            return None;
        }
        let line = self.scroll + (pos.y - self.page_area.y) as usize;
        self.page.card_at(line)
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Blocks until the next frame is due at most.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let timeout = self
            .scheduler
            .timeout(Instant::now())
            .unwrap_or(IDLE_POLL);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::Resize(width, height) => self.backdrop.resize(width, height),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        if self.backdrop.has_crawl() {
            self.backdrop.skip_crawl();
            if is_quit(&key) {
                self.quit();
            }
            return;
        }

        let page_step = self.page_area.height.saturating_sub(2).max(1) as isize;
        match key.code {
            _ if is_quit(&key) => self.quit(),
            KeyCode::Char('s') => self.cycle_speed(),
            KeyCode::Char('v') => self.cycle_version(),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-page_step),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_by(page_step),
            KeyCode::Home => self.scroll = 0,
            KeyCode::End => self.scroll = self.page.max_scroll(self.page_area.height),
            KeyCode::Char('p') => self.jump_to(Section::Projects),
            KeyCode::Char('c') => self.jump_to(Section::Contact),
            _ => {}
        }
    }

    /// Handles pointer movement, clicks and the wheel.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        let pos = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.pointer = Some(pos);
                self.hovered = self.card_under(pos);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if self.backdrop.has_crawl() {
                    self.backdrop.skip_crawl();
                } else if self.speed_button.contains(pos) {
                    self.cycle_speed();
                }
            }
            MouseEventKind::ScrollDown => self.scroll_by(WHEEL_STEP),
            MouseEventKind::ScrollUp => self.scroll_by(-WHEEL_STEP),
            _ => {}
        }
    }

    fn scroll_by(&mut self, delta: isize) {
        let scroll = self.scroll.saturating_add_signed(delta);
        self.scroll = self.page.clamp_scroll(scroll, self.page_area.height);
    }

    fn jump_to(&mut self, section: Section) {
        let anchor = self.page.anchor(section);
        self.scroll = self.page.clamp_scroll(anchor, self.page_area.height);
    }

    /// Cycle the star speed multiplier.
    fn cycle_speed(&mut self) {
        self.backdrop.cycle_speed();
    }

    /// Cycle through the page versions.
    fn cycle_version(&mut self) {
        self.version = self.version.next();
        let density = self.config.effective_density(self.version);
        self.backdrop.set_version(self.version, density);
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn new_app(version: PageVersion, motion: MotionMode) -> App {
        let mut app = App::new(Config::default(), version, SpeedMultiplier::Normal, motion);
        app.running = true;
        app
    }

    fn draw(app: &mut App, width: u16, height: u16) {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
        terminal.draw(|frame| app.render(frame)).expect("draw");
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_reduced_motion_precedence() {
        assert!(resolve_reduced_motion(true, Some("0"), Some(false)));
        assert!(resolve_reduced_motion(false, Some("yes"), Some(false)));
        assert!(!resolve_reduced_motion(false, Some("off"), Some(true)));
        assert!(resolve_reduced_motion(false, None, Some(true)));
        assert!(resolve_reduced_motion(false, Some("maybe"), Some(true)));
        assert!(!resolve_reduced_motion(false, None, None));
    }

    #[test]
    fn test_write_config_keeps_existing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[profile]\nname = \"Kept\"\n").expect("seed");

        assert!(write_default_config(&path, false).is_err());
        let kept = Config::load_from(&path).expect("load");
        assert_eq!(kept.profile.name, "Kept");

        write_default_config(&path, true).expect("forced write");
        let replaced = Config::load_from(&path).expect("load");
        assert_eq!(replaced, Config::default());
    }

    #[test]
    fn test_write_config_creates_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");
        write_default_config(&path, false).expect("write");
        assert_eq!(Config::load_from(&path).expect("load"), Config::default());
    }

    #[test]
    fn test_cli_parsers() {
        assert_eq!(parse_page("starfield"), Ok(PageVersion::Starfield));
        assert!(parse_page("prequel").is_err());
        assert_eq!(parse_speed("0.5"), Ok(SpeedMultiplier::Half));
        assert!(parse_speed("fast").is_err());
    }

    #[test]
    fn test_opening_crawl_uses_profile() {
        let profile = Profile::default();
        let crawl = opening_crawl(&profile);
        assert_eq!(crawl.lines()[0], "Episode I");
        assert_eq!(crawl.lines()[1], profile.name.to_uppercase());
    }

    #[test]
    fn test_key_skips_crawl_without_acting() {
        let mut app = new_app(PageVersion::Saga, MotionMode::Animated);
        assert!(app.backdrop.has_crawl());

        app.on_key_event(key(KeyCode::Char('s')));
        assert!(app.running);
        assert_eq!(app.backdrop.speed(), SpeedMultiplier::Normal);

        draw(&mut app, 80, 24);
        assert!(!app.backdrop.has_crawl());
    }

    #[test]
    fn test_quit_keys() {
        for event in [
            key(KeyCode::Char('q')),
            key(KeyCode::Esc),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            let mut app = new_app(PageVersion::Classic, MotionMode::Animated);
            app.on_key_event(event);
            assert!(!app.running);
        }
    }

    #[test]
    fn test_plain_c_jumps_instead_of_quitting() {
        let mut app = new_app(PageVersion::Classic, MotionMode::Static);
        draw(&mut app, 80, 24);
        app.on_key_event(key(KeyCode::Char('c')));
        assert!(app.running);
        assert!(app.scroll > 0);
    }

    #[test]
    fn test_speed_and_version_keys() {
        let mut app = new_app(PageVersion::Classic, MotionMode::Animated);
        app.on_key_event(key(KeyCode::Char('s')));
        assert_eq!(app.backdrop.speed(), SpeedMultiplier::Double);

        app.on_key_event(key(KeyCode::Char('v')));
        assert_eq!(app.version, PageVersion::Starfield);
        assert_eq!(app.backdrop.version(), PageVersion::Starfield);
        assert_eq!(
            app.backdrop.starfield().len(),
            PageVersion::Starfield.density()
        );
        assert_eq!(app.backdrop.speed(), SpeedMultiplier::Double);
    }

    #[test]
    fn test_scrolling_is_clamped() {
        let mut app = new_app(PageVersion::Classic, MotionMode::Static);
        draw(&mut app, 80, 24);

        app.on_key_event(key(KeyCode::Up));
        assert_eq!(app.scroll, 0);

        app.on_key_event(key(KeyCode::End));
        let max = app.page.max_scroll(app.page_area.height);
        assert!(max > 0);
        assert_eq!(app.scroll, max);

        app.on_key_event(key(KeyCode::PageDown));
        assert_eq!(app.scroll, max);

        app.on_key_event(key(KeyCode::Home));
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_jump_to_projects() {
        let mut app = new_app(PageVersion::Classic, MotionMode::Static);
        draw(&mut app, 80, 24);
        app.on_key_event(key(KeyCode::Char('p')));
        assert_eq!(
            app.scroll,
            app.page
                .clamp_scroll(app.page.anchor(Section::Projects), app.page_area.height)
        );
        assert!(app.scroll > 0);
    }

    #[test]
    fn test_click_speed_button() {
        let mut app = new_app(PageVersion::Classic, MotionMode::Animated);
        draw(&mut app, 100, 30);
        let button = app.speed_button;
        assert!(button.width > 0);

        app.on_mouse_event(mouse(
            MouseEventKind::Down(MouseButton::Left),
            button.x,
            button.y,
        ));
        assert_eq!(app.backdrop.speed(), SpeedMultiplier::Double);

        app.on_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 0, 0));
        assert_eq!(app.backdrop.speed(), SpeedMultiplier::Double);
    }

    #[test]
    fn test_wheel_scrolls() {
        let mut app = new_app(PageVersion::Classic, MotionMode::Static);
        draw(&mut app, 80, 24);
        app.on_mouse_event(mouse(MouseEventKind::ScrollDown, 10, 10));
        assert_eq!(app.scroll, WHEEL_STEP as usize);
        app.on_mouse_event(mouse(MouseEventKind::ScrollUp, 10, 10));
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_hover_tracks_card() {
        let mut app = new_app(PageVersion::Classic, MotionMode::Static);
        draw(&mut app, 80, 40);

        let card = app.page.cards()[0].clone();
        let row = app.page_area.y + (card.start - app.scroll) as u16 + 1;
        app.on_mouse_event(mouse(MouseEventKind::Moved, app.page_area.x + 2, row));
        assert_eq!(app.hovered, Some(0));

        app.on_mouse_event(mouse(MouseEventKind::Moved, 0, 0));
        assert_eq!(app.hovered, None);
    }
}
