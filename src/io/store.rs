use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tempfile::NamedTempFile;

use crate::io::lock::{LockError, StoreLock};

/// File name of the store inside the data directory
pub const STORE_FILE: &str = "store.json";

/// Store keys owned by the dashboard widgets
pub mod keys {
    pub const WALLPAPER: &str = "wallpaperState";
    pub const NOTEPAD: &str = "notepadContent";
    pub const CHECKLIST: &str = "checklistItems";
    pub const ACCENT_COLOR: &str = "accentColor";

    /// Namespaced key for one calendar month (`month0` is zero-based)
    pub fn calendar_notes(year: i32, month0: u32) -> String {
        format!("calendarNotes-{}-{}", year, month0)
    }
}

/// Error type for store reads and writes
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not back up unreadable store to {path}: {source}")]
    BackupError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not serialize store: {0}")]
    SerializeError(#[from] serde_json::Error),
    #[error("{0}")]
    LockError(#[from] LockError),
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Synchronous string-keyed, string-valued store.
///
/// Reads never fail: a missing key is `None`. Writes go through to the
/// backing medium before returning.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
    fn keys(&self) -> Vec<String>;
}

// ---------------------------------------------------------------------------
// File-backed store
// ---------------------------------------------------------------------------

/// Store persisted as a single JSON object in `<dir>/store.json`.
///
/// The file is the only copy: every read goes to disk, so a handle sees keys
/// written by other processes. Every write re-reads the file under the
/// directory lock, applies the one key change and writes the whole object
/// back atomically.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
    path: PathBuf,
}

impl FileStore {
    /// Open (or create) the store in `dir`. Fails when an existing store file
    /// cannot be read at all.
    pub fn open(dir: &Path) -> Result<Self, StoreError> {
        fs::create_dir_all(dir)?;
        let path = dir.join(STORE_FILE);
        let entries = read_entries(&path)?;
        log::debug!("opened store {} ({} keys)", path.display(), entries.len());
        Ok(FileStore {
            dir: dir.to_path_buf(),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn snapshot(&self) -> IndexMap<String, String> {
        read_entries(&self.path).unwrap_or_else(|e| {
            log::error!("{}", e);
            IndexMap::new()
        })
    }

    fn write_through(
        &mut self,
        apply: impl FnOnce(&mut IndexMap<String, String>),
    ) -> Result<(), StoreError> {
        let _lock = StoreLock::hold(&self.dir)?;
        let mut entries = read_entries(&self.path)?;
        apply(&mut entries);
        let content = serde_json::to_string_pretty(&entries)?;
        atomic_write(&self.path, content.as_bytes()).map_err(|e| StoreError::WriteError {
            path: self.path.clone(),
            source: e,
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.snapshot().shift_remove(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.write_through(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.write_through(|entries| {
            entries.shift_remove(key);
        })
    }

    fn keys(&self) -> Vec<String> {
        self.snapshot().into_keys().collect()
    }
}

/// Read the store file. A missing or blank file is empty. A file that is not
/// a UTF-8 JSON object of strings is copied to `store.json.bak` and read as
/// empty; if that copy fails the error is returned so nothing overwrites it.
/// Any other I/O error is returned as is.
fn read_entries(path: &Path) -> Result<IndexMap<String, String>, StoreError> {
    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(IndexMap::new()),
        Err(source) => {
            return Err(StoreError::ReadError {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(IndexMap::new());
    }
    match serde_json::from_slice::<IndexMap<String, String>>(&bytes) {
        Ok(entries) => Ok(entries),
        Err(e) => {
            let bak = path.with_extension("json.bak");
            fs::copy(path, &bak).map_err(|source| StoreError::BackupError {
                path: bak.clone(),
                source,
            })?;
            log::warn!(
                "could not parse {} (backed up as {}): {}",
                path.display(),
                bak.display(),
                e
            );
            Ok(IndexMap::new())
        }
    }
}

/// Write `content` to `path` through a temp file in the same directory.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// Volatile store for tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: IndexMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `set`/`remove` calls so far
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.shift_remove(key);
        self.writes += 1;
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}
