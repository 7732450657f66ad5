use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::path::PathBuf;

use super::{SlotStore, create_file_parent};
use crate::errors::AppError;

/// Durable slot store: one `<key>.json` file per slot under a root
/// directory. The directory is created on first write.
pub struct FileStore {
    pub root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl SlotStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, AppError> {
        let path = self.slot_path(key);

        if !fs::exists(&path)? {
            return Ok(None);
        }

        let mut file = OpenOptions::new().read(true).open(&path)?;
        let mut data = String::new();
        file.read_to_string(&mut data)?;

        Ok(Some(data))
    }

    fn write(&mut self, key: &str, raw: &str) -> Result<(), AppError> {
        let path = self.slot_path(key);
        create_file_parent(&path)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;

        file.write_all(raw.as_bytes())?;
        Ok(())
    }
}
