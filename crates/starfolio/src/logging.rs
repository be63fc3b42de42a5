//! File logging.
//!
//! The terminal belongs to the UI, so log records go to a file in the data
//! directory. `STARFOLIO_LOG` takes the usual `env_logger` filter syntax.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use env_logger::{Env, Target};
use starfolio_config::Config;

const LOG_FILE: &str = "starfolio.log";
const LOG_ENV: &str = "STARFOLIO_LOG";

/// Default log file location.
pub fn log_path() -> Option<PathBuf> {
    Config::project_dirs().map(|dirs| dirs.data_local_dir().join(LOG_FILE))
}

/// Route the `log` facade to `path`, appending.
pub fn init(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    env_logger::Builder::from_env(Env::new().filter_or(LOG_ENV, "info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .init();
    Ok(())
}
