//! Log records go to `<data dir>/nook.log`. The dashboard owns the terminal,
//! so nothing is ever written to stderr.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use env_logger::{Builder, Env, Target};

pub const LOG_FILE: &str = "nook.log";

/// Environment variable holding the filter (`env_logger` syntax)
pub const LOG_ENV: &str = "NOOK_LOG";

pub fn log_path(data_dir: &Path) -> PathBuf {
    data_dir.join(LOG_FILE)
}

/// Install the global logger, appending to the log file in `data_dir`.
/// The filter comes from `NOOK_LOG` and defaults to `info`.
pub fn init(data_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(data_dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path(data_dir))?;

    let result = Builder::from_env(Env::default().filter_or(LOG_ENV, "info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_secs()
        .try_init();
    if result.is_err() {
        // a logger is already installed (tests)
        return Ok(());
    }
    log::debug!("logging to {}", log_path(data_dir).display());
    Ok(())
}
