//! JSON persistence helpers for files under ~/.seagull/.

use crate::core::constants::SAVE_DIR_NAME;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Get the ~/.seagull/ directory path, creating it if needed.
pub fn seagull_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(SAVE_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.seagull/.
pub fn save_path(filename: &str) -> io::Result<PathBuf> {
    Ok(seagull_dir()?.join(filename))
}

/// Load a JSON file from ~/.seagull/, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(filename: &str) -> T {
    match save_path(filename) {
        Ok(path) => load_json_file_or_default(&path),
        Err(e) => {
            warn!(error = %e, filename, "save directory unavailable, using defaults");
            T::default()
        }
    }
}

/// Load JSON from an explicit path. A missing file is silent; a corrupt one is logged.
pub fn load_json_file_or_default<T: Default + serde::de::DeserializeOwned>(path: &Path) -> T {
    match fs::read_to_string(path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
            warn!(error = %e, path = %path.display(), "ignoring unreadable JSON");
            T::default()
        }),
        Err(_) => T::default(),
    }
}

/// Save a value as pretty-printed JSON to an explicit path.
pub fn save_json_file<T: serde::Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)
}
