//! The persisted preference store.
//!
//! Preferences are an opaque string-to-string map behind the [`PrefStore`]
//! trait. The production implementation keeps them in a small TOML file;
//! tests use the in-memory variant. Only one key is in use today (the
//! active language), but the store does not know that.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access preference file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),
}

pub trait PrefStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Preferences persisted to a TOML file.
///
/// A missing or malformed file is treated as empty: startup must never fail
/// because of preference state.
pub struct TomlPrefStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl TomlPrefStore {
    /// Opens the store at the default location,
    /// `$XDG_CONFIG_HOME/folio/prefs.toml` (falling back to
    /// `~/.config/folio/prefs.toml`).
    pub fn open_default() -> Self {
        Self::open(default_prefs_path())
    }

    pub fn open(path: PathBuf) -> Self {
        let values = match fs::read_to_string(&path) {
            Ok(raw) => match toml::from_str::<BTreeMap<String, String>>(&raw) {
                Ok(values) => values,
                Err(err) => {
                    warn!("ignoring malformed preference file {}: {}", path.display(), err);
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };
        Self { path, values }
    }

    fn flush(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let serialized = toml::to_string_pretty(&self.values)?;
        fs::write(&self.path, serialized)?;
        Ok(())
    }
}

impl PrefStore for TomlPrefStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

/// A throwaway in-memory store for tests.
#[derive(Debug, Default)]
pub struct MemoryPrefStore {
    values: BTreeMap<String, String>,
}

impl MemoryPrefStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefStore for MemoryPrefStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

fn default_prefs_path() -> PathBuf {
    let config_root = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| Path::new(&home).join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));
    config_root.join("folio").join("prefs.toml")
}
