//! Durable client storage for the selected language.
//!
//! The site keeps one entry, `"language"`, in a small key/value store that
//! survives restarts. `FileStore` keeps it in a JSON object on disk;
//! `MemoryStore` keeps it in process for tests and throwaway sessions.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use enum_dispatch::enum_dispatch;
use serde_json::{Map, Value};

/// Storage key holding the persisted language identifier.
pub const STORAGE_KEY: &str = "language";

/// A string key/value store that outlives the session.
#[enum_dispatch]
pub trait ClientStore {
    /// Read `key`. `Ok(None)` when it was never written.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Write `key`, replacing any previous value.
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Store backed by a JSON object file.
///
/// A missing file reads as empty. Writes keep entries for other keys.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read storage file: {:?}", self.path))?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&content)
            .with_context(|| format!("Failed to parse storage file: {:?}", self.path))?
        {
            Value::Object(map) => Ok(map),
            _ => bail!("Storage file {:?} must contain a JSON object", self.path),
        }
    }
}

impl ClientStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let map = self.read_map()?;
        Ok(map.get(key).and_then(Value::as_str).map(str::to_string))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        // An unreadable file is replaced rather than blocking the write.
        let mut map = self.read_map().unwrap_or_default();
        map.insert(key.to_string(), Value::String(value.to_string()));

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(&Value::Object(map))
            .context("Failed to serialize storage")?;
        fs::write(&self.path, format!("{}\n", json))
            .with_context(|| format!("Failed to write storage file: {:?}", self.path))
    }
}

/// In-process store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(key.into(), value.into());
        Self { entries }
    }
}

impl ClientStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The store a session owns.
#[enum_dispatch(ClientStore)]
#[derive(Debug, Clone)]
pub enum Store {
    File(FileStore),
    Memory(MemoryStore),
}
