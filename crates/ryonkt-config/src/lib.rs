mod backend;
mod paths;

pub use backend::{ConfigBackend, TomlConfigBackend};
pub use paths::{BASE_DIR_ENV, ConfigError, RyonktPaths};

use once_cell::sync::Lazy;

// Singleton de paths (portable / system)
pub static PATHS: Lazy<Result<RyonktPaths, String>> = Lazy::new(|| RyonktPaths::detect().map_err(|e| e.to_string()));

/// Devuelve los paths globales, o el error con el que falló su detección.
pub fn paths() -> Result<&'static RyonktPaths, ConfigError> {
  PATHS.as_ref().map_err(|e| ConfigError::Other(format!("init paths: {e}")))
}

// Singleton del backend de config
pub static CONFIG_BACKEND: Lazy<Result<TomlConfigBackend, String>> =
  Lazy::new(|| paths().map(|p| TomlConfigBackend::new(p.clone())).map_err(|e| e.to_string()));

/// Backend global sobre `ryonkt.toml`.
pub fn config_backend() -> Result<&'static TomlConfigBackend, ConfigError> {
  CONFIG_BACKEND.as_ref().map_err(|e| ConfigError::Other(e.clone()))
}
