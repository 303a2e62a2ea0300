//! String-keyed JSON file store.
//!
//! The durable key-value store backing the persistence adapter: each key maps
//! to one `<key>.json` file in the store directory. Removing a key deletes
//! its file, so a subsequent load behaves as "never set".

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use jibun_core::error::{JibunError, Result};

use crate::paths::JibunPaths;

/// A local string-keyed JSON store.
#[derive(Debug, Clone)]
pub struct JsonSliceStore {
    dir: PathBuf,
}

impl JsonSliceStore {
    /// Creates a store rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Opens the store in the default application config directory.
    pub fn open_default() -> Result<Self> {
        let dir = JibunPaths::config_dir().map_err(|e| JibunError::config(e.to_string()))?;
        Self::new(dir)
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Returns the directory backing this store.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Reads and deserializes the value under `key`.
    ///
    /// Returns `Ok(None)` when the key has never been set; a present but
    /// unreadable or unparsable value is an error the caller decides how to
    /// degrade from.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        let value = serde_json::from_str(&content)?;
        Ok(Some(value))
    }

    /// Serializes and writes `value` under `key`.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        fs::write(self.key_path(key), json)?;
        Ok(())
    }

    /// Removes `key` from the store. Removing an absent key is not an error.
    pub fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, JsonSliceStore) {
        let dir = TempDir::new().unwrap();
        let store = JsonSliceStore::new(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_get_absent_key_is_none() {
        let (_dir, store) = store();
        let value: Option<Vec<String>> = store.get("missing").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_set_then_get() {
        let (_dir, store) = store();
        store.set("greeting", &"こんにちは".to_string()).unwrap();
        let value: Option<String> = store.get("greeting").unwrap();
        assert_eq!(value.as_deref(), Some("こんにちは"));
    }

    #[test]
    fn test_remove_deletes_the_key() {
        let (_dir, store) = store();
        store.set("key", &1u32).unwrap();
        store.remove("key").unwrap();
        let value: Option<u32> = store.get("key").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_remove_absent_key_is_ok() {
        let (_dir, store) = store();
        assert!(store.remove("never_set").is_ok());
    }

    #[test]
    fn test_corrupt_value_is_an_error_not_a_panic() {
        let (dir, store) = store();
        fs::write(dir.path().join("broken.json"), "{not json").unwrap();
        let result: Result<Option<Vec<u32>>> = store.get("broken");
        assert!(result.is_err());
    }

    #[test]
    fn test_type_mismatch_is_an_error() {
        let (_dir, store) = store();
        store.set("number", &42u32).unwrap();
        let result: Result<Option<Vec<String>>> = store.get("number");
        assert!(result.is_err());
    }
}
