//! Durable key/value preference store.
//!
//! Preferences are a flat string-to-string map persisted as one JSON file
//! under the user config directory. Values are stored as strings so the file
//! stays a plain key/value map; the controller owns the interpretation
//! (`"true"` / `"false"` for the collapsed flag).

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// Fixed key for the persisted wide-viewport collapse preference.
pub const COLLAPSED_KEY: &str = "sidebar.collapsed";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no config directory available")]
    NoConfigDir,
    #[error("preference file io: {0}")]
    Io(#[from] std::io::Error),
    #[error("preference file parse: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Origin-scoped durable key/value storage, desktop style.
pub trait PrefStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// JSON map file backend.
///
/// The default location is `<config_dir>/atrium-studio/preferences.json`.
/// When no config directory can be determined every access fails with
/// [`StoreError::NoConfigDir`]; callers are expected to degrade rather than
/// surface the error to the user.
pub struct JsonPrefStore {
    path: Option<PathBuf>,
}

impl JsonPrefStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    pub fn from_default_location() -> Self {
        Self {
            path: Self::default_path(),
        }
    }

    /// Store with no backing file; every access fails with
    /// [`StoreError::NoConfigDir`]. Stands in for disabled storage.
    pub fn unavailable() -> Self {
        Self { path: None }
    }

    /// Preference file path under the user config directory.
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("atrium-studio");
        path.push("preferences.json");
        Some(path)
    }

    fn path(&self) -> Result<&PathBuf, StoreError> {
        self.path.as_ref().ok_or(StoreError::NoConfigDir)
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let path = self.path()?;
        match fs::read_to_string(path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl Default for JsonPrefStore {
    fn default() -> Self {
        Self::from_default_location()
    }
}

impl PrefStore for JsonPrefStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_map()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        // A corrupt file is ours to own: start from an empty map and let the
        // write replace it with well-formed JSON.
        let mut map = match self.read_map() {
            Ok(map) => map,
            Err(StoreError::Parse(e)) => {
                log::warn!("preference file malformed ({e}), rewriting");
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        map.insert(key.to_string(), value.to_string());

        let path = self.path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&map)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// In-memory backend for tests and headless use.
#[derive(Debug, Default, Clone)]
pub struct MemoryPrefStore {
    map: BTreeMap<String, String>,
}

impl MemoryPrefStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefStore for MemoryPrefStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.map.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
