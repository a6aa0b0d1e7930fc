use std::cell::RefCell;
use std::path::Path;

use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::Text;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info};

use ryonkt_core::ports::{KeyValueStore, StoreError};

use crate::StorageError;
use crate::models::{ContentRow, NewContentRow};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Almacén clave-valor sobre una tabla SQLite (`content`).
///
/// Una fila por clave; `set` hace upsert. La conexión va en un `RefCell`
/// porque todo ocurre en un único hilo.
pub struct SqliteKeyValueStore {
  conn: RefCell<SqliteConnection>,
}

impl SqliteKeyValueStore {
  /// Abre (o crea) la base de datos y aplica las migraciones pendientes.
  pub fn open(db_path: &Path) -> Result<Self, StorageError> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
      std::fs::create_dir_all(parent)?;
    }

    let store = Self::establish(&db_path.to_string_lossy())?;
    info!(path = %db_path.display(), "content database ready");
    Ok(store)
  }

  /// Base de datos en memoria, descartada al soltar el store.
  pub fn in_memory() -> Result<Self, StorageError> {
    Self::establish(":memory:")
  }

  fn establish(database_url: &str) -> Result<Self, StorageError> {
    let mut conn = SqliteConnection::establish(database_url)?;

    let applied =
      conn.run_pending_migrations(MIGRATIONS).map_err(|e| StorageError::Migration(e.to_string()))?;
    if !applied.is_empty() {
      debug!(count = applied.len(), "migrations applied");
    }

    Ok(Self { conn: RefCell::new(conn) })
  }

  /// Fila completa de `key`, con su marca de última escritura.
  pub fn entry(&self, entry_key: &str) -> Result<Option<ContentRow>, StorageError> {
    use crate::schema::content::dsl::*;

    let mut conn = self.conn.borrow_mut();
    let row = content
      .filter(key.eq(entry_key))
      .select(ContentRow::as_select())
      .first(&mut *conn)
      .optional()?;

    Ok(row)
  }

  fn read(&self, entry_key: &str) -> Result<Option<String>, StorageError> {
    use crate::schema::content::dsl::*;

    let mut conn = self.conn.borrow_mut();
    let found = content.filter(key.eq(entry_key)).select(value).first::<String>(&mut *conn).optional()?;

    Ok(found)
  }

  fn write(&self, entry_key: &str, entry_value: &str) -> Result<(), StorageError> {
    use crate::schema::content::dsl::*;

    let new_row = NewContentRow { key: entry_key, value: entry_value };
    let mut conn = self.conn.borrow_mut();

    diesel::insert_into(content)
      .values(&new_row)
      .on_conflict(key)
      .do_update()
      .set((value.eq(entry_value), updated_at.eq(sql::<Text>("CURRENT_TIMESTAMP"))))
      .execute(&mut *conn)?;

    Ok(())
  }
}

impl KeyValueStore for SqliteKeyValueStore {
  fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
    Ok(self.read(key)?)
  }

  fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
    Ok(self.write(key, value)?)
  }
}
