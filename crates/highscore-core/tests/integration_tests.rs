//! Integration tests for highscore-core
//!
//! These tests drive the public store API against real files and check the
//! on-disk format other tools rely on.

use std::fs;

use highscore_core::storage::{decode_records, encode_record, header_line};
use highscore_core::{Error, ScoreEntry, ScoreStore, StoreConfig};
use tempfile::TempDir;

/// Stores written by hand or by older versions of the game
mod existing_file_tests {
    use super::*;

    #[test]
    fn test_reads_file_written_by_other_tools() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scores.csv");
        fs::write(
            &path,
            "Timestamp,Username,Score\n\
             2024-03-01T10:00:00Z,alice,120\n\
             2024-03-01T10:05:00.123456Z,\"bob \"\"the builder\"\"\",300\n\
             2024-03-01T10:06:00Z,carol,not-a-number\n\
             \n\
             2024-03-01T10:07:00Z,dave,45\n",
        )
        .unwrap();

        let store = ScoreStore::new(&path);
        let entries = store.read_all().unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].username, "bob \"the builder\"");
        assert!(entries[1].recorded_at().is_some());
        assert_eq!(store.user_high_score("carol").unwrap(), 0);
    }

    #[test]
    fn test_append_continues_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scores.csv");
        fs::write(&path, "timestamp,username,score\n2024-03-01T10:00:00Z,alice,120\n").unwrap();

        let store = ScoreStore::new(&path);
        store.append("alice", 150).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches("timestamp,username,score").count(), 1);
        assert_eq!(store.user_high_score("alice").unwrap(), 150);
    }

    #[test]
    fn test_file_without_trailing_newline() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scores.csv");
        fs::write(&path, "timestamp,username,score\n2024-03-01T10:00:00Z,alice,120").unwrap();

        let store = ScoreStore::new(&path);
        assert_eq!(store.read_all().unwrap().len(), 1);
    }
}

/// Leaderboard queries over a populated store
mod leaderboard_tests {
    use super::*;

    fn populated_store() -> (ScoreStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = ScoreStore::new(temp_dir.path().join("scores.csv"));
        for (name, score) in [("alice", 10), ("bob", 50), ("carol", 30)] {
            store.append(name, score).unwrap();
        }
        (store, temp_dir)
    }

    #[test]
    fn test_top_two() {
        let (store, _temp) = populated_store();
        let top = store.top_n(2).unwrap();
        let names: Vec<&str> = top.iter().map(|e| e.username.as_str()).collect();
        assert_eq!(names, vec!["bob", "carol"]);
    }

    #[test]
    fn test_top_n_bounds() {
        let (store, _temp) = populated_store();
        assert_eq!(store.top_n(-1).unwrap().len(), 3);
        assert_eq!(store.top_n(3).unwrap().len(), 3);
        assert_eq!(store.top_n(100).unwrap().len(), 3);
    }

    #[test]
    fn test_top_n_does_not_reorder_file() {
        let (store, _temp) = populated_store();
        store.top_n(1).unwrap();

        let names: Vec<String> = store
            .read_all()
            .unwrap()
            .into_iter()
            .map(|e| e.username)
            .collect();
        assert_eq!(names, vec!["alice", "bob", "carol"]);
    }
}

/// Codec functions exported for callers that manage their own files
mod codec_tests {
    use super::*;

    #[test]
    fn test_header_and_records_decode_together() {
        let mut content = header_line(b',').into_bytes();
        let entries = vec![
            ScoreEntry::new("2024-03-01T10:00:00.000Z", "x, y", 1),
            ScoreEntry::new("2024-03-01T10:00:01.000Z", "plain", 2),
        ];
        for entry in &entries {
            content.extend(encode_record(entry, b',').unwrap());
        }

        assert_eq!(decode_records(content.as_slice(), b',').unwrap(), entries);
    }
}

mod config_tests {
    use super::*;

    #[test]
    fn test_invalid_config_error_message() {
        let config = StoreConfig::new("scores.csv").with_delimiter(b'\n');
        let err = ScoreStore::with_config(config).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
        assert!(err.to_string().starts_with("Invalid store config"));
    }

    #[test]
    fn test_io_error_keeps_source() {
        let temp_dir = TempDir::new().unwrap();
        let store = ScoreStore::new(temp_dir.path());

        let err = store.append("alice", 1).unwrap_err();
        assert!(std::error::Error::source(&err).is_some());
    }
}
