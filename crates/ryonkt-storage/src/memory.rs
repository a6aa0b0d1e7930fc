use std::cell::RefCell;
use std::collections::HashMap;

use ryonkt_core::ports::{KeyValueStore, StoreError};

/// Almacén en memoria: vive lo que vive el proceso.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
  entries: RefCell<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.entries.borrow().len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.borrow().is_empty()
  }
}

impl KeyValueStore for MemoryKeyValueStore {
  fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
    Ok(self.entries.borrow().get(key).cloned())
  }

  fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
    self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    Ok(())
  }
}
