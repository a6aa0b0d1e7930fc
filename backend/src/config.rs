use ryonkt_config::{config_backend, ConfigBackend, ConfigError, TomlConfigBackend};
use serde::{Deserialize, Serialize};

/// Section `[logging]` of `ryonkt.toml`.
///
/// `RUST_LOG`, when set, wins over this value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
  /// Any `EnvFilter` directive, e.g. `"warn"` or `"ryonkt_core=debug,info"`.
  #[serde(default = "default_level")]
  pub level: String,
}

fn default_level() -> String {
  "warn".to_string()
}

impl Default for LoggingConfig {
  fn default() -> Self {
    LoggingConfig { level: default_level() }
  }
}

impl LoggingConfig {
  pub fn load() -> Result<Self, ConfigError> {
    Self::load_from(config_backend()?)
  }

  pub fn load_from(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    backend.load_section_with_default("logging")
  }
}
