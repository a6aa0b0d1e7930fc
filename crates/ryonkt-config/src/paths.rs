use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Variable de entorno que fuerza un directorio base (modo portable / tests).
pub const BASE_DIR_ENV: &str = "RYONKT_BASE_DIR";

const CONFIG_FILE: &str = "ryonkt.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("toml error: {0}")]
  Toml(#[from] toml::de::Error),
  #[error("directories error: could not determine home directory")]
  Directories,
  #[error("other: {0}")]
  Other(String),
}

/// Directorios de la aplicación. Existen en disco en cuanto se construye.
#[derive(Debug, Clone)]
pub struct RyonktPaths {
  pub base_dir: PathBuf,
  pub config_dir: PathBuf,
  pub data_dir: PathBuf,
}

impl RyonktPaths {
  /// `$RYONKT_BASE_DIR/{config,data}` si la variable existe; si no, los
  /// directorios del sistema (`ProjectDirs`).
  pub fn new() -> Result<Self, ConfigError> {
    match std::env::var_os(BASE_DIR_ENV) {
      Some(base) => Self::under(base),
      None => {
        let dirs = ProjectDirs::from("com", "ryonkt", "ryonkt").ok_or(ConfigError::Directories)?;
        Self::create(dirs.config_dir(), dirs.config_dir(), dirs.data_dir())
      }
    }
  }

  /// Paths bajo un directorio dado, sin mirar el entorno.
  pub fn under(base: impl Into<PathBuf>) -> Result<Self, ConfigError> {
    let base = base.into();
    Self::create(&base, &base.join("config"), &base.join("data"))
  }

  pub fn detect() -> Result<Self, ConfigError> {
    Self::new()
  }

  fn create(base: &Path, config: &Path, data: &Path) -> Result<Self, ConfigError> {
    for dir in [config, data] {
      std::fs::create_dir_all(dir)?;
    }
    tracing::debug!(config = %config.display(), data = %data.display(), "paths ready");

    Ok(Self { base_dir: base.to_path_buf(), config_dir: config.to_path_buf(), data_dir: data.to_path_buf() })
  }

  pub fn config_file(&self) -> PathBuf {
    self.config_dir.join(CONFIG_FILE)
  }
}
