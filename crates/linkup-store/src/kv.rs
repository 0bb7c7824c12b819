use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

/// Directory-backed key-value store: one file per key, values are plain
/// strings (JSON for the structured keys). This is the durable stand-in for
/// the browser's local storage, with the same tolerance rules: a missing
/// key is an empty default and a value that fails to deserialize is
/// discarded with a warning, never an error back to the caller.
#[derive(Debug, Clone)]
pub struct KvStore {
    dir: PathBuf,
}

impl KvStore {
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    pub fn load_string(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.path(key)) {
            Ok(value) => Some(value),
            Err(error) if error.kind() == ErrorKind::NotFound => None,
            Err(error) => {
                warn!(key, %error, "failed to read storage key, treating as absent");
                None
            }
        }
    }

    pub fn save_string(&self, key: &str, value: &str) -> Result<()> {
        fs::write(self.path(key), value)?;
        Ok(())
    }

    pub fn load_json_or_default<T>(&self, key: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        let Some(raw) = self.load_string(key) else {
            return T::default();
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(error) => {
                warn!(key, %error, "discarding undeserializable storage value");
                T::default()
            }
        }
    }

    pub fn save_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        self.save_string(key, &serde_json::to_string(value)?)
    }

    /// Remove a key. Returns whether it existed.
    pub fn remove(&self, key: &str) -> Result<bool> {
        match fs::remove_file(self.path(key)) {
            Ok(()) => Ok(true),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(false),
            Err(error) => Err(error.into()),
        }
    }
}
