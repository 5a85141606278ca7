//! High-score storage: one integer under the `seagullHighScore` key.

use super::persistence::{load_json_file_or_default, save_json_file, save_path};
use crate::core::constants::HIGH_SCORE_FILE;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;
use tracing::warn;

/// Where the best score lives between runs.
pub trait HighScoreStore {
    /// Stored score, `None` if nothing has been saved yet.
    fn load(&self) -> io::Result<Option<u32>>;
    fn save(&mut self, score: u32) -> io::Result<()>;
}

/// On-disk record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    #[serde(rename = "seagullHighScore")]
    pub high_score: Option<u32>,
    /// RFC 3339 timestamp of the last write.
    #[serde(default)]
    pub recorded_at: Option<String>,
}

/// JSON file store, `~/.seagull/highscore.json` by default.
#[derive(Debug, Clone)]
pub struct JsonHighScoreStore {
    path: PathBuf,
}

impl JsonHighScoreStore {
    pub fn new() -> io::Result<Self> {
        Ok(Self::at(save_path(HIGH_SCORE_FILE)?))
    }

    /// Default store, or `None` when the save directory is unavailable.
    /// A `None` store plays with no high score and logs failed saves.
    pub fn open() -> Option<Self> {
        match Self::new() {
            Ok(store) => Some(store),
            Err(e) => {
                warn!(error = %e, "high score storage unavailable, scores will not be kept");
                None
            }
        }
    }

    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Remove the stored score. Missing file is not an error.
    pub fn clear(&self) -> io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

impl HighScoreStore for JsonHighScoreStore {
    fn load(&self) -> io::Result<Option<u32>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let record: HighScoreRecord = load_json_file_or_default(&self.path);
        Ok(record.high_score)
    }

    fn save(&mut self, score: u32) -> io::Result<()> {
        let record = HighScoreRecord {
            high_score: Some(score),
            recorded_at: Some(Utc::now().to_rfc3339()),
        };
        save_json_file(&self.path, &record)
    }
}

/// A missing store has nothing saved and refuses writes.
impl<S: HighScoreStore> HighScoreStore for Option<S> {
    fn load(&self) -> io::Result<Option<u32>> {
        match self {
            Some(store) => store.load(),
            None => Ok(None),
        }
    }

    fn save(&mut self, score: u32) -> io::Result<()> {
        match self {
            Some(store) => store.save(score),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                "no high score storage",
            )),
        }
    }
}

/// In-memory store that counts writes. Used by the simulator and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScoreStore {
    pub value: Option<u32>,
    pub writes: u32,
    /// Fail every save, to exercise the best-effort path.
    pub fail_writes: bool,
}

impl MemoryHighScoreStore {
    pub fn with_value(value: u32) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load(&self) -> io::Result<Option<u32>> {
        Ok(self.value)
    }

    fn save(&mut self, score: u32) -> io::Result<()> {
        self.writes += 1;
        if self.fail_writes {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "store is read-only",
            ));
        }
        self.value = Some(score);
        Ok(())
    }
}
