use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::config::StoreConfig;
use crate::error::Result;
use crate::storage::codec::{decode_records, encode_record, header_line};
use crate::storage::ScoreEntry;

/// Append-only score file.
///
/// Every operation holds the store lock for its whole duration, so reads
/// and writes from threads in this process never interleave. Other
/// processes writing the same file are not coordinated with.
#[derive(Debug)]
pub struct ScoreStore {
    config: StoreConfig,
    lock: Mutex<()>,
}

impl Default for ScoreStore {
    fn default() -> Self {
        Self::from_valid_config(StoreConfig::default())
    }
}

impl ScoreStore {
    /// Store at `path` using the default delimiter
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self::from_valid_config(StoreConfig::new(path))
    }

    pub fn with_config(config: StoreConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: StoreConfig) -> Self {
        Self {
            config,
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Append a new entry stamped with the current time.
    ///
    /// Creates the file (and its parent directories) with a header row if
    /// it does not exist yet.
    pub fn append(&self, username: &str, score: u32) -> Result<ScoreEntry> {
        let _guard = self.acquire();

        let entry = ScoreEntry::now(username, score);
        let line = encode_record(&entry, self.config.delimiter)?;

        let path = self.path();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;

        let mut buf = Vec::with_capacity(line.len() + 32);
        if file.metadata()?.len() == 0 {
            debug!("Creating score file {}", path.display());
            buf.extend_from_slice(header_line(self.config.delimiter).as_bytes());
        }
        buf.extend_from_slice(&line);

        file.write_all(&buf)?;
        file.flush()?;

        debug!("Recorded score {} for {:?}", entry.score, entry.username);
        Ok(entry)
    }

    /// All valid entries in file order. A missing file reads as empty.
    pub fn read_all(&self) -> Result<Vec<ScoreEntry>> {
        let _guard = self.acquire();
        self.read_locked()
    }

    /// Highest score recorded for `username`, or 0 if there is none
    pub fn user_high_score(&self, username: &str) -> Result<u32> {
        let _guard = self.acquire();
        let best = self
            .read_locked()?
            .into_iter()
            .filter(|e| e.username == username)
            .map(|e| e.score)
            .max()
            .unwrap_or(0);
        Ok(best)
    }

    /// Up to `n` entries by descending score, ties in file order.
    ///
    /// A negative `n`, or one larger than the entry count, returns every entry.
    pub fn top_n(&self, n: i64) -> Result<Vec<ScoreEntry>> {
        let _guard = self.acquire();
        let mut entries = self.read_locked()?;

        // sort_by is stable
        entries.sort_by(|a, b| b.score.cmp(&a.score));

        if let Ok(limit) = usize::try_from(n) {
            entries.truncate(limit);
        }
        Ok(entries)
    }

    fn read_locked(&self) -> Result<Vec<ScoreEntry>> {
        let file = match File::open(self.path()) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        decode_records(file, self.config.delimiter)
    }

    // The guard protects the file, not in-memory state, so a poisoned
    // lock is still usable.
    fn acquire(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
