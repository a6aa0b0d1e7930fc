#[derive(Debug, thiserror::Error)]
pub enum StoreError {
  #[error("io error: {0}")]
  Io(String),

  #[error("backend error: {0}")]
  Backend(String),
}

/// Port de almacenamiento clave-valor de texto.
///
/// Equivale al almacén local del navegador: claves y valores son cadenas,
/// `set` sobrescribe sin condiciones y no hay transacciones.
///
/// Implementaciones posibles:
/// - SQLite (`ryonkt-storage`)
/// - memoria (tests, ejecuciones efímeras)
pub trait KeyValueStore {
  fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
  fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
  fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
    (**self).get(key)
  }

  fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
    (**self).set(key, value)
  }
}
