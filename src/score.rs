use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::mode::GameMode;

const APP_DIR_NAME: &str = "snake-arcade";
const SCORE_FILE_NAME: &str = "scores.json";

/// Errors raised while reading or writing the score file.
///
/// These are never fatal: callers fall back to an empty in-memory table and
/// surface the message as a warning.
#[derive(Debug, Error)]
pub enum ScoreStoreError {
    #[error("score file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("score file is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),
}

/// Persisted best score per mode, keyed by mode name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct HighScoreTable {
    scores: HashMap<String, u32>,
}

impl HighScoreTable {
    /// Returns the best recorded score for `mode`, defaulting to zero.
    #[must_use]
    pub fn best(&self, mode: GameMode) -> u32 {
        self.scores.get(mode.name()).copied().unwrap_or(0)
    }

    /// Records `score` if it beats the stored best for a tracked mode.
    ///
    /// Returns true when the table changed. Untracked modes (Zen) are
    /// never stored.
    pub fn record(&mut self, mode: GameMode, score: u32) -> bool {
        if !mode.tracks_high_score() || score <= self.best(mode) {
            return false;
        }
        self.scores.insert(mode.name().to_owned(), score);
        true
    }
}

/// Returns the platform-correct score file path.
#[must_use]
pub fn scores_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SCORE_FILE_NAME);
    base
}

/// Loads the score table from disk.
///
/// A missing file is a normal first run and yields an empty table; an
/// unreadable or malformed file is an error so the caller can warn.
pub fn load_scores() -> Result<HighScoreTable, ScoreStoreError> {
    load_scores_from_path(&scores_path())
}

/// Writes the full score table to disk, creating parent directories.
pub fn save_scores(table: &HighScoreTable) -> Result<(), ScoreStoreError> {
    save_scores_to_path(&scores_path(), table)
}

fn load_scores_from_path(path: &Path) -> Result<HighScoreTable, ScoreStoreError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(HighScoreTable::default()),
        Err(e) => return Err(e.into()),
    };

    Ok(serde_json::from_str(&raw)?)
}

fn save_scores_to_path(path: &Path, table: &HighScoreTable) -> Result<(), ScoreStoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(table)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use crate::mode::GameMode;

    use super::{load_scores_from_path, save_scores_to_path, HighScoreTable};

    #[test]
    fn record_keeps_the_maximum_per_mode() {
        let mut table = HighScoreTable::default();

        assert!(table.record(GameMode::Classic, 120));
        assert!(!table.record(GameMode::Classic, 80));
        assert!(!table.record(GameMode::Classic, 120));
        assert!(table.record(GameMode::Classic, 150));

        assert_eq!(table.best(GameMode::Classic), 150);
        assert_eq!(table.best(GameMode::Timed), 0);
    }

    #[test]
    fn zen_scores_are_never_recorded() {
        let mut table = HighScoreTable::default();

        assert!(!table.record(GameMode::Zen, 500));
        assert_eq!(table.best(GameMode::Zen), 0);
    }

    #[test]
    fn table_round_trips_through_disk() {
        let path = unique_test_path("round_trip");

        let mut table = HighScoreTable::default();
        table.record(GameMode::Classic, 90);
        table.record(GameMode::Survival, 40);

        save_scores_to_path(&path, &table).expect("score save should succeed");
        let loaded = load_scores_from_path(&path).expect("load should succeed");

        assert_eq!(loaded, table);
        cleanup_test_path(&path);
    }

    #[test]
    fn missing_score_file_yields_empty_table() {
        let path = unique_test_path("missing");
        // Deliberately do not create the file.
        let loaded = load_scores_from_path(&path).expect("missing file should be a first run");
        assert_eq!(loaded, HighScoreTable::default());
    }

    #[test]
    fn malformed_score_file_returns_error() {
        let path = unique_test_path("malformed");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(&path, "not-json").expect("test file write should succeed");

        assert!(
            load_scores_from_path(&path).is_err(),
            "malformed file should return Err"
        );

        cleanup_test_path(&path);
    }

    #[test]
    fn save_then_load_never_loses_a_high_score() {
        let path = unique_test_path("monotone");

        let mut table = HighScoreTable::default();
        table.record(GameMode::Timed, 200);
        save_scores_to_path(&path, &table).expect("save should succeed");

        // A later, lower score must not overwrite the stored best.
        let mut reloaded = load_scores_from_path(&path).expect("load should succeed");
        reloaded.record(GameMode::Timed, 50);
        save_scores_to_path(&path, &reloaded).expect("save should succeed");

        let after = load_scores_from_path(&path).expect("load should succeed");
        assert_eq!(after.best(GameMode::Timed), 200);
        cleanup_test_path(&path);
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("snake-arcade-score-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
