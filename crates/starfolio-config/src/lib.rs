//! Configuration loading and saving for starfolio.
//!
//! The config lives at `<config dir>/starfolio/config.toml`. Every field is
//! optional; a missing file yields the defaults.

mod profile;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use starfolio_core::{PageVersion, SpeedMultiplier};

pub use profile::{Contact, Education, Interest, Link, Profile, Project, TechGroup};

/// File name of the config inside the config directory.
const CONFIG_FILE: &str = "config.toml";

/// Default frames per second.
const DEFAULT_FRAME_RATE: u32 = 30;

/// Highest accepted frame rate.
const MAX_FRAME_RATE: u32 = 120;

/// Errors raised while reading or writing the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine a config directory for this platform")]
    NoConfigDir,
    #[error("config I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("could not serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Page version shown on start.
    pub version: PageVersion,
    /// Initial star speed multiplier.
    pub speed: SpeedMultiplier,
    /// Star count override; the page version decides when unset.
    pub density: Option<usize>,
    /// Reduced-motion preference, used when the environment does not say.
    pub reduced_motion: Option<bool>,
    /// Play the opening crawl for versions that have one.
    pub show_crawl: bool,
    /// Target frames per second.
    pub frame_rate: u32,
    /// Portfolio content.
    pub profile: Profile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: PageVersion::default(),
            speed: SpeedMultiplier::default(),
            density: None,
            reduced_motion: None,
            show_crawl: true,
            frame_rate: DEFAULT_FRAME_RATE,
            profile: Profile::default(),
        }
    }
}

impl Config {
    /// Platform directories for starfolio.
    pub fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("dev", "starfolio", "starfolio")
    }

    /// Default config file path.
    pub fn path() -> Result<PathBuf, ConfigError> {
        Self::project_dirs()
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config: Config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Star count for the given version, honoring the override.
    pub fn effective_density(&self, version: PageVersion) -> usize {
        self.density.unwrap_or_else(|| version.density())
    }

    /// Time between frames.
    pub fn frame_interval(&self) -> Duration {
        let fps = self.frame_rate.clamp(1, MAX_FRAME_RATE);
        Duration::from_secs_f64(1.0 / fps as f64)
    }
}
