//! Key-value persistence
//!
//! Backends:
//! - `MemoryStorage`: in-process map (tests, headless runs)
//! - `FileStorage`: one JSON object on disk (native)
//! - `LocalStorage`: browser LocalStorage (wasm32)
//!
//! Reads never fail: a missing or unreadable value is simply absent.
//! Writes report errors so callers can log them, but nothing depends on a
//! write succeeding.

use std::collections::BTreeMap;
#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

/// Durable string key-value store
pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// Volatile storage backed by a map
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// All keys in a single JSON file, rewritten on every set
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStorage {
    /// Open (or lazily create) the store at `path`. A corrupt file starts empty.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = match std::fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                log::warn!("Ignoring unreadable store {}: {}", path.display(), e);
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        };
        log::info!("Opened store {} ({} keys)", path.display(), entries.len());
        Self { path, entries }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        let json = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Browser LocalStorage
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl Storage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        let storage = Self::storage().ok_or_else(|| anyhow::anyhow!("LocalStorage unavailable"))?;
        storage
            .set_item(key, value)
            .map_err(|e| anyhow::anyhow!("LocalStorage write failed: {:?}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_round_trip() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("highScore"), None);
        storage.set("highScore", "42").unwrap();
        assert_eq!(storage.get("highScore").as_deref(), Some("42"));
    }

    #[test]
    fn test_file_storage_persists_across_opens() {
        let path = std::env::temp_dir().join(format!("climb_high_store_{}.json", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let mut storage = FileStorage::open(&path);
        storage.set("highScore", "1234").unwrap();

        let reopened = FileStorage::open(&path);
        assert_eq!(reopened.get("highScore").as_deref(), Some("1234"));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_file_storage_survives_corrupt_file() {
        let path = std::env::temp_dir().join(format!("climb_high_corrupt_{}.json", std::process::id()));
        std::fs::write(&path, "not json {").unwrap();

        let storage = FileStorage::open(&path);
        assert_eq!(storage.get("highScore"), None);

        let _ = std::fs::remove_file(&path);
    }
}
