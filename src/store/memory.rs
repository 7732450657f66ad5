use std::collections::HashMap;

use super::SlotStore;
use crate::errors::AppError;

/// Slot store backed by a plain map. Keeps repository and editor tests
/// off the filesystem.
#[derive(Debug, Default)]
pub struct MemStore {
    pub slots: HashMap<String, String>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStore for MemStore {
    fn read(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, raw: &str) -> Result<(), AppError> {
        self.slots.insert(key.to_string(), raw.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn unwritten_key_reads_as_none() -> Result<(), AppError> {
        let store = MemStore::new();
        assert_eq!(store.read("contacts")?, None);
        Ok(())
    }

    #[test]
    fn write_overwrites_prior_value() -> Result<(), AppError> {
        let mut store = MemStore::new();

        store.write("contacts", "[]")?;
        store.write("contacts", "[1]")?;

        assert_eq!(store.read("contacts")?, Some("[1]".to_string()));
        Ok(())
    }
}
