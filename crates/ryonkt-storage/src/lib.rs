pub mod config;
pub mod memory;
pub mod models;
pub mod schema;
pub mod sqlite;

use ryonkt_config::ConfigError;
use ryonkt_core::ports::StoreError;
use ryonkt_core::services::ContentPersistence;

pub use config::StorageConfig;
pub use memory::MemoryKeyValueStore;
pub use sqlite::SqliteKeyValueStore;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
  #[error("connection error: {0}")]
  Connection(#[from] diesel::ConnectionError),

  #[error("query error: {0}")]
  Query(#[from] diesel::result::Error),

  #[error("migration error: {0}")]
  Migration(String),

  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("config error: {0}")]
  Config(#[from] ConfigError),
}

impl From<StorageError> for StoreError {
  fn from(e: StorageError) -> Self {
    match e {
      StorageError::Io(io) => StoreError::Io(io.to_string()),
      other => StoreError::Backend(other.to_string()),
    }
  }
}

/// Persistencia del contenido sobre SQLite según `[storage]`.
pub fn open_persistence(cfg: &StorageConfig) -> Result<ContentPersistence<SqliteKeyValueStore>, StorageError> {
  let store = SqliteKeyValueStore::open(&cfg.db_path)?;
  Ok(ContentPersistence::new(store).with_key(cfg.content_key.clone()).with_policy(cfg.on_corrupt))
}

/// Igual que [`open_persistence`] pero cargando la config global.
pub fn open_persistence_from_config() -> Result<ContentPersistence<SqliteKeyValueStore>, StorageError> {
  let cfg = StorageConfig::load()?;
  open_persistence(&cfg)
}
