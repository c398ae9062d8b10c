//! Durable key-value preferences.
//!
//! One JSON object per file, mapping slot names to arbitrary JSON
//! values. The task list lives under [`TASKS_SLOT`], the display
//! language under [`LANGUAGE_SLOT`].

use crate::error::{Result, TaskpadError};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;
use tracing::warn;

/// Slot holding the JSON-serialized ordered task list.
pub const TASKS_SLOT: &str = "Tasks";

/// Slot holding the selected display-language tag.
pub const LANGUAGE_SLOT: &str = "AppLanguage";

/// On-disk key-value store. Writes go through to disk on every `set`;
/// a missing or corrupt file loads as an empty map.
#[derive(Debug)]
pub struct Prefs {
    path: PathBuf,
    values: Map<String, Value>,
}

impl Prefs {
    /// Opens the store at `path`, swallowing read and parse failures.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = std::fs::read(&path)
            .ok()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
            .unwrap_or_default();
        Self { path, values }
    }

    /// Default store location under the platform data directory.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("taskpad")
            .join("settings.json")
    }

    /// Returns the value stored under `key`, or `None` when the slot is
    /// absent or holds a value of the wrong shape.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.values
            .get(key)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    /// Stores `value` under `key` and writes through to disk. Write
    /// failures are logged; the in-memory value is kept either way.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) {
        match serde_json::to_value(value) {
            Ok(json) => {
                self.values.insert(key.to_owned(), json);
            }
            Err(e) => {
                warn!("cannot serialize preference '{key}': {e}");
                return;
            }
        }
        if let Err(e) = self.save() {
            warn!("cannot write preferences: {e}");
        }
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                TaskpadError::Storage(format!("cannot create {}: {e}", parent.display()))
            })?;
        }
        let json = serde_json::to_string_pretty(&self.values)
            .map_err(|e| TaskpadError::Storage(format!("cannot serialize preferences: {e}")))?;
        std::fs::write(&self.path, json).map_err(|e| {
            TaskpadError::Storage(format!("cannot write {}: {e}", self.path.display()))
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_prefs(dir: &tempfile::TempDir) -> Prefs {
        Prefs::open(dir.path().join("settings.json"))
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = temp_prefs(&dir);
        assert_eq!(prefs.get::<String>(LANGUAGE_SLOT), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut prefs = temp_prefs(&dir);
        prefs.set(LANGUAGE_SLOT, &"English");
        assert_eq!(prefs.get::<String>(LANGUAGE_SLOT).as_deref(), Some("English"));
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        {
            let mut prefs = Prefs::open(&path);
            prefs.set("counts", &vec![1, 2, 3]);
        }
        let prefs = Prefs::open(&path);
        assert_eq!(prefs.get::<Vec<i32>>("counts"), Some(vec![1, 2, 3]));
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, b"{not json").unwrap();
        let prefs = Prefs::open(&path);
        assert_eq!(prefs.get::<String>(TASKS_SLOT), None);
    }

    #[test]
    fn wrong_shape_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let mut prefs = temp_prefs(&dir);
        prefs.set("n", &42);
        assert_eq!(prefs.get::<String>("n"), None);
        assert_eq!(prefs.get::<i32>("n"), Some(42));
    }

    #[test]
    fn slots_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let mut prefs = temp_prefs(&dir);
        prefs.set(TASKS_SLOT, &Vec::<String>::new());
        prefs.set(LANGUAGE_SLOT, &"Türkçe");
        assert_eq!(prefs.get::<Vec<String>>(TASKS_SLOT), Some(vec![]));
        assert_eq!(prefs.get::<String>(LANGUAGE_SLOT).as_deref(), Some("Türkçe"));
    }
}
