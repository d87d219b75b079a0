use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Name of the lock file kept next to `store.json`. It is created once and
/// never removed: every writer has to contend on the same inode.
pub const LOCK_FILE: &str = "store.lock";

const WRITE_TIMEOUT: Duration = Duration::from_secs(2);
const RETRY_EVERY: Duration = Duration::from_millis(10);

#[derive(Debug, thiserror::Error)]
pub enum LockError {
    #[error("could not open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("store at {path} is busy: another nook process is writing")]
    Busy { path: PathBuf },
}

/// Exclusive hold on the store directory for one read-modify-write cycle.
///
/// The dashboard and any number of CLI invocations share the data directory;
/// a `StoreLock` is taken around each write and released on drop when the
/// descriptor closes.
pub struct StoreLock {
    _file: File,
}

impl StoreLock {
    /// Wait up to the write timeout for the lock on `dir`.
    pub fn hold(dir: &Path) -> Result<Self, LockError> {
        Self::hold_for(dir, WRITE_TIMEOUT)
    }

    pub fn hold_for(dir: &Path, timeout: Duration) -> Result<Self, LockError> {
        let path = dir.join(LOCK_FILE);
        let file = open_lock_file(&path).map_err(|source| LockError::Open {
            path: path.clone(),
            source,
        })?;

        let deadline = Instant::now() + timeout;
        while !try_exclusive(&file)? {
            if Instant::now() >= deadline {
                log::warn!("gave up waiting for {}", path.display());
                return Err(LockError::Busy { path });
            }
            std::thread::sleep(RETRY_EVERY);
        }
        Ok(StoreLock { _file: file })
    }
}

fn open_lock_file(path: &Path) -> std::io::Result<File> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(false)
        .open(path)
}

/// Non-blocking exclusive flock. `Ok(false)` while another descriptor holds it.
#[cfg(unix)]
fn try_exclusive(file: &File) -> Result<bool, LockError> {
    use std::os::unix::io::AsRawFd;
    let rc = unsafe { libc::flock(file.as_raw_fd(), libc::LOCK_EX | libc::LOCK_NB) };
    Ok(rc == 0)
}

#[cfg(not(unix))]
fn try_exclusive(_file: &File) -> Result<bool, LockError> {
    Ok(true)
}
