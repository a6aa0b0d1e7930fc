use ryonkt_config::{ConfigBackend, ConfigError, TomlConfigBackend, config_backend};
use ryonkt_core::services::{CorruptPolicy, DEFAULT_CONTENT_KEY};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Nombre del fichero SQLite dentro del directorio de datos.
pub const DB_FILENAME: &str = "ryonkt.db";

/// Sección `[storage]` de `ryonkt.toml`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct StorageConfig {
  /// Ruta de la base de datos. Vacía → `<data_dir>/ryonkt.db`.
  #[serde(default)]
  pub db_path: PathBuf,

  /// Clave bajo la que vive el bundle.
  #[serde(default = "default_content_key")]
  pub content_key: String,

  /// `"fallback"` o `"fail"` cuando lo guardado no se puede leer.
  #[serde(default)]
  pub on_corrupt: CorruptPolicy,
}

fn default_content_key() -> String {
  DEFAULT_CONTENT_KEY.to_string()
}

impl Default for StorageConfig {
  fn default() -> Self {
    StorageConfig {
      db_path: PathBuf::new(),
      content_key: default_content_key(),
      on_corrupt: CorruptPolicy::default(),
    }
  }
}

impl StorageConfig {
  /// Carga desde la sección `[storage]` usando el backend global.
  pub fn load() -> Result<Self, ConfigError> {
    Self::load_from(config_backend()?)
  }

  /// Variante para tests: inyectar un backend distinto.
  ///
  /// Completa la ruta por defecto y vuelve a escribir la sección para que
  /// el usuario vea los valores efectivos.
  pub fn load_from(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    let mut cfg: StorageConfig = backend.load_section_with_default("storage")?;
    if cfg.db_path.as_os_str().is_empty() {
      cfg.db_path = backend.paths().data_dir.join(DB_FILENAME);
    }
    backend.save_section("storage", &cfg)?;
    Ok(cfg)
  }

  pub fn save(&self) -> Result<(), ConfigError> {
    config_backend()?.save_section("storage", self)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use ryonkt_config::RyonktPaths;
  use tempfile::tempdir;

  #[test]
  fn fills_defaults_and_writes_them_back() {
    let tmp = tempdir().unwrap();
    let backend = TomlConfigBackend::new(RyonktPaths::under(tmp.path()).unwrap());

    let cfg = StorageConfig::load_from(&backend).unwrap();
    assert_eq!(cfg.db_path, tmp.path().join("data").join(DB_FILENAME));
    assert_eq!(cfg.content_key, DEFAULT_CONTENT_KEY);
    assert_eq!(cfg.on_corrupt, CorruptPolicy::Fallback);

    let written = std::fs::read_to_string(backend.paths().config_file()).unwrap();
    assert!(written.contains("[storage]"));
    assert!(written.contains("on_corrupt = \"fallback\""));
  }

  #[test]
  fn keeps_user_values() {
    let tmp = tempdir().unwrap();
    let backend = TomlConfigBackend::new(RyonktPaths::under(tmp.path()).unwrap());
    std::fs::write(
      backend.paths().config_file(),
      "[storage]\ndb_path = \"/srv/site.db\"\ncontent_key = \"portfolio\"\non_corrupt = \"fail\"\n",
    )
    .unwrap();

    let cfg = StorageConfig::load_from(&backend).unwrap();
    assert_eq!(cfg.db_path, PathBuf::from("/srv/site.db"));
    assert_eq!(cfg.content_key, "portfolio");
    assert_eq!(cfg.on_corrupt, CorruptPolicy::Fail);
  }
}
