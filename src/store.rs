pub mod file;
pub mod memory;
pub mod storage_port;

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use crate::errors::AppError;

pub use file::FileStore;
pub use memory::MemStore;

/// Default root for contact slots when no `--storage-path` or
/// `STORAGE_PATH` override is given.
pub const DEFAULT_STORAGE_ROOT: &str = "./.instance";

/// A named slot of durable storage. Backends hold raw strings; the typed
/// layer on top of this trait handles (de)serialization.
pub trait SlotStore {
    /// The raw value saved under `key`, or None when the slot was never
    /// written.
    fn read(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Store `raw` under `key`, overwriting any prior value.
    fn write(&mut self, key: &str, raw: &str) -> Result<(), AppError>;
}

/// Load the value saved under `key`, falling back to `default` when the
/// slot is missing, empty, unreadable, or does not parse. A bad slot is
/// never an error the caller sees.
pub fn load_or<T: DeserializeOwned>(store: &dyn SlotStore, key: &str, default: T) -> T {
    match store.read(key) {
        // serde_json will give an error if data is empty
        Ok(Some(raw)) if !raw.is_empty() => serde_json::from_str(&raw).unwrap_or(default),
        _ => default,
    }
}

/// Serialize `value` as JSON and store it under `key`.
pub fn save<T: Serialize>(store: &mut dyn SlotStore, key: &str, value: &T) -> Result<(), AppError> {
    let raw = serde_json::to_string(value)?;
    store.write(key, &raw)
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
