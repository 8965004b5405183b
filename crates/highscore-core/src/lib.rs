pub mod config;
pub mod error;
pub mod storage;

pub use config::{DEFAULT_STORE_FILE, StoreConfig};
pub use error::{Error, Result};
pub use storage::{ScoreEntry, ScoreStore};
