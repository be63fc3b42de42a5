//! Backdrop state management.

use rand::{SeedableRng, rngs::StdRng};
use ratatui::buffer::Buffer;
use starfolio_core::{MotionMode, PageVersion, SpeedMultiplier};

use crate::animations::{crawl::Crawl, ships::ShipPool, starfield::Starfield};

/// Everything drawn behind the page: starfield, ships and the opening crawl.
///
/// One instance owns all animation state. Build it with [`Backdrop::new`],
/// call [`Backdrop::render`] once per frame and finish with
/// [`Backdrop::teardown`].
#[derive(Debug)]
pub struct Backdrop {
    /// Star pool.
    starfield: Starfield,
    /// Ships in flight.
    ships: ShipPool,
    /// Opening crawl, dropped once finished.
    crawl: Option<Crawl>,
    /// Active page version.
    version: PageVersion,
    /// Motion mode chosen at mount.
    motion: MotionMode,
    /// Last known surface width.
    last_width: u16,
    /// Last known surface height.
    last_height: u16,
    /// Randomness for ship spawns.
    rng: StdRng,
}

impl Backdrop {
    /// Create a backdrop. The star pool is sized on the first render.
    pub fn new(
        version: PageVersion,
        density: usize,
        motion: MotionMode,
        speed: SpeedMultiplier,
    ) -> Self {
        let mut starfield = Starfield::new(0.0, 0.0, density, motion);
        starfield.set_speed(speed);
        log::info!(
            "backdrop mounted: version={} density={} motion={:?}",
            version.name(),
            density,
            motion
        );
        Self {
            starfield,
            ships: ShipPool::new(),
            crawl: None,
            version,
            motion,
            last_width: 0,
            last_height: 0,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Attach an opening crawl. Ignored under reduced motion or for
    /// versions without one.
    pub fn with_crawl(mut self, crawl: Crawl) -> Self {
        if self.motion.is_animated() && self.version.has_crawl() {
            self.crawl = Some(crawl);
        }
        self
    }

    /// Draw the starfield and ships onto `buf` and advance them one frame.
    pub fn render(&mut self, buf: &mut Buffer, elapsed_ms: u64) {
        let area = buf.area;

        // Regenerate on first use and whenever the surface size changed.
        if area.width != self.last_width || area.height != self.last_height {
            self.resize(area.width, area.height);
        }

        self.starfield.tick(buf);

        if self.ships_enabled() {
            self.ships
                .update(elapsed_ms, area.width, area.height, &mut self.rng);
            self.ships.render(buf, elapsed_ms);
        }
    }

    /// Draw the opening crawl if it is still running.
    ///
    /// Returns `false` once the crawl is over, after which it is dropped.
    pub fn render_crawl(&mut self, buf: &mut Buffer, elapsed_ms: u64) -> bool {
        let height = buf.area.height;
        if let Some(crawl) = &self.crawl
            && crawl.is_active(elapsed_ms, height)
        {
            crawl.render(buf, elapsed_ms);
            return true;
        }
        if self.crawl.take().is_some() {
            log::debug!("opening crawl finished");
        }
        false
    }

    /// Skip the opening crawl.
    pub fn skip_crawl(&mut self) {
        if let Some(crawl) = &mut self.crawl {
            crawl.skip();
        }
    }

    pub fn has_crawl(&self) -> bool {
        self.crawl.is_some()
    }

    /// Regenerate the star pool for a new surface size.
    pub fn resize(&mut self, width: u16, height: u16) {
        log::debug!("backdrop resized to {width}x{height}");
        self.last_width = width;
        self.last_height = height;
        self.starfield.resize(width as f32, height as f32);
    }

    /// Cycle the star speed multiplier.
    pub fn cycle_speed(&mut self) -> SpeedMultiplier {
        let speed = self.starfield.cycle_speed();
        log::info!("star speed set to {}", speed.label());
        speed
    }

    /// Switch page version, regenerating the pool with `density` stars.
    pub fn set_version(&mut self, version: PageVersion, density: usize) {
        self.version = version;
        self.starfield.set_density(density);
        if !self.ships_enabled() {
            self.ships.clear();
        }
        if !version.has_crawl() {
            self.crawl = None;
        }
        log::info!("page version set to {} ({} stars)", version.name(), density);
    }

    /// Dispose of all animation state. Nothing is left scheduled afterwards.
    pub fn teardown(mut self) {
        self.ships.clear();
        self.crawl = None;
        log::info!("backdrop torn down");
    }

    fn ships_enabled(&self) -> bool {
        self.motion.is_animated() && self.version.has_ships()
    }

    pub fn starfield(&self) -> &Starfield {
        &self.starfield
    }

    pub fn ships(&self) -> &ShipPool {
        &self.ships
    }

    pub fn speed(&self) -> SpeedMultiplier {
        self.starfield.speed()
    }

    pub fn version(&self) -> PageVersion {
        self.version
    }

    pub fn motion(&self) -> MotionMode {
        self.motion
    }
}
