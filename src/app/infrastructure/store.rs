//! Key-value preference storage.
//!
//! Preferences live in a flat JSON object on disk, one file per
//! organization/application pair under the user's config directory.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::AppError;

/// Durable key-value store for primitive preferences.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<Value>;

    fn set(&mut self, key: &str, value: Value);

    /// Flush pending writes to the backing medium.
    fn sync(&mut self) -> Result<(), AppError>;

    /// Typed read. Absent keys and values of the wrong type yield `default`.
    fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.get(key)
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or(default)
    }

    fn set_value<T: Serialize>(&mut self, key: &str, value: T) -> Result<(), AppError> {
        let value = serde_json::to_value(value)?;
        self.set(key, value);
        Ok(())
    }
}

/// Application identity the store is scoped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreIdentity {
    pub organization: String,
    pub application: String,
}

impl StoreIdentity {
    pub fn new(organization: impl Into<String>, application: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            application: application.into(),
        }
    }

    /// Get config file path (cross-platform)
    pub fn config_path(&self) -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(&self.organization);
        path.push(format!("{}.json", self.application));
        path
    }
}

impl Default for StoreIdentity {
    fn default() -> Self {
        Self::new("Teleprompter", "Teleprompter")
    }
}

/// Store backed by a pretty-printed JSON object on disk.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: Map<String, Value>,
}

impl JsonFileStore {
    pub fn open(identity: &StoreIdentity) -> Self {
        Self::open_at(identity.config_path())
    }

    /// Load the store at `path`. An absent, unreadable or malformed file
    /// starts an empty store; it is overwritten on the next `sync`.
    pub fn open_at(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match read_values(&path) {
            Ok(values) => {
                log::info!("Loaded settings from {}", path.display());
                values
            }
            Err(AppError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                Map::new()
            }
            Err(e) => {
                log::warn!("Failed to read settings from {}: {}. Using defaults.", path.display(), e);
                Map::new()
            }
        };
        Self { path, values }
    }
}

fn read_values(path: &Path) -> Result<Map<String, Value>, AppError> {
    let contents = fs::read_to_string(path)?;
    match serde_json::from_str(&contents)? {
        Value::Object(map) => Ok(map),
        other => Err(AppError::Settings(format!(
            "expected a JSON object, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl SettingsStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
    }

    fn sync(&mut self) -> Result<(), AppError> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, json)?;
        log::info!("Saved settings to {}", self.path.display());

        Ok(())
    }
}

/// Non-durable store, for tests and for running without a config directory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, Value>,
    syncs: usize,
}

impl MemoryStore {
    pub fn sync_count(&self) -> usize {
        self.syncs
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
    }

    fn sync(&mut self) -> Result<(), AppError> {
        self.syncs += 1;
        Ok(())
    }
}
