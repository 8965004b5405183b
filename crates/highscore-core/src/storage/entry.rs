use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One recorded game result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// ISO-8601 instant, kept exactly as stored
    pub timestamp: String,
    pub username: String,
    pub score: u32,
}

impl ScoreEntry {
    pub fn new(timestamp: impl Into<String>, username: impl Into<String>, score: u32) -> Self {
        Self {
            timestamp: timestamp.into(),
            username: username.into(),
            score,
        }
    }

    /// Create an entry stamped with the current UTC instant
    pub fn now(username: impl Into<String>, score: u32) -> Self {
        Self::new(format_timestamp(Utc::now()), username, score)
    }

    /// Parse the stored timestamp. `None` if it is not an RFC 3339 instant.
    pub fn recorded_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Render an instant the way new entries are stamped
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
