use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::ports::{Clock, KeyValueStore, StoreError};

/// Almacén en memoria que además cuenta las escrituras.
#[derive(Debug, Default)]
pub struct CountingStore {
  entries: RefCell<HashMap<String, String>>,
  writes: Cell<usize>,
}

impl CountingStore {
  pub fn with_value(key: &str, value: &str) -> Self {
    let store = Self::default();
    store.entries.borrow_mut().insert(key.to_string(), value.to_string());
    store
  }

  pub fn raw(&self, key: &str) -> Option<String> {
    self.entries.borrow().get(key).cloned()
  }

  pub fn writes(&self) -> usize {
    self.writes.get()
  }
}

impl KeyValueStore for CountingStore {
  fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
    Ok(self.entries.borrow().get(key).cloned())
  }

  fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
    self.writes.set(self.writes.get() + 1);
    self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    Ok(())
  }
}

/// Almacén que falla siempre.
pub struct BrokenStore;

impl KeyValueStore for BrokenStore {
  fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
    Err(StoreError::Io("disk unplugged".into()))
  }

  fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
    Err(StoreError::Io("disk unplugged".into()))
  }
}

/// Reloj congelado: siempre el mismo instante.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
  pub millis: u64,
  pub year: i32,
}

impl Default for FixedClock {
  fn default() -> Self {
    FixedClock { millis: 1_760_000_000_000, year: 2025 }
  }
}

impl Clock for FixedClock {
  fn now_millis(&self) -> u64 {
    self.millis
  }

  fn current_year(&self) -> i32 {
    self.year
  }
}
