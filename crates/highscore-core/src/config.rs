//! Store configuration.
//!
//! A store is identified by its backing file and the field delimiter used
//! inside that file. Both default to the plain `scores.csv` layout.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// File name used when no path is injected.
pub const DEFAULT_STORE_FILE: &str = "scores.csv";

/// Delimiter used when none is configured.
pub const DEFAULT_DELIMITER: u8 = b',';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub path: PathBuf,
    pub delimiter: u8,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_STORE_FILE),
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl StoreConfig {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Reject delimiters that would collide with quoting or line breaks
    pub fn validate(&self) -> Result<()> {
        match self.delimiter {
            b'"' | b'\n' | b'\r' => Err(Error::InvalidConfig(format!(
                "delimiter {:?} conflicts with record quoting",
                self.delimiter as char
            ))),
            d if !d.is_ascii() => Err(Error::InvalidConfig(format!(
                "delimiter {:#04x} is not ASCII",
                d
            ))),
            _ => Ok(()),
        }
    }
}
