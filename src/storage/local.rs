use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::error::{AppError, AppResult};

pub const SETTINGS_FILE: &str = "settings.json";
pub const SAVED_PROGRAMS_FILE: &str = "saved_programs.json";

/// Load a JSON value from the app data dir.
///
/// A missing file and a file that no longer parses both fall back to
/// `T::default()`; per-field defaults inside `T` cover partial state.
pub fn load_json<T: DeserializeOwned + Default>(app_data_path: &Path, file: &str) -> AppResult<T> {
    let path = app_data_path.join(file);

    if !path.exists() {
        return Ok(T::default());
    }

    let content = fs::read_to_string(&path).map_err(|e| AppError::storage(e.to_string()))?;
    Ok(serde_json::from_str(&content).unwrap_or_default())
}

/// Save a JSON value into the app data dir. Whole-file write, last write wins.
pub fn save_json<T: Serialize>(app_data_path: &Path, file: &str, value: &T) -> AppResult<()> {
    let path = app_data_path.join(file);
    let content =
        serde_json::to_string_pretty(value).map_err(|e| AppError::storage(e.to_string()))?;
    fs::write(&path, content).map_err(|e| AppError::storage(e.to_string()))
}
