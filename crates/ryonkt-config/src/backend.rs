use crate::paths::{ConfigError, RyonktPaths};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;

// Escritura con toml_edit para preservar comentarios del usuario.
use toml_edit::{DocumentMut, Item};

pub trait ConfigBackend {
  /// Carga la sección `[section]`; falla si el fichero o la sección no existen.
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError>;

  /// Igual que `load_section`, pero fichero o sección ausentes → `T::default()`.
  fn load_section_with_default<T: DeserializeOwned + Default>(&self, section: &str) -> Result<T, ConfigError>;

  /// Reemplaza `[section]` y deja intacto el resto del documento.
  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError>;
}

pub struct TomlConfigBackend {
  paths: RyonktPaths,
}

impl TomlConfigBackend {
  pub fn new(paths: RyonktPaths) -> Self {
    Self { paths }
  }

  pub fn paths(&self) -> &RyonktPaths {
    &self.paths
  }

  /// Contenido de `ryonkt.toml`, o `None` si todavía no existe.
  fn read_config(&self) -> Result<Option<String>, ConfigError> {
    Ok(ryonkt_fs::read_to_string_if_exists(&self.paths.config_file())?)
  }

  fn decode_section<T: DeserializeOwned>(section: &str, value: toml::Value) -> Result<T, ConfigError> {
    value.try_into().map_err(|e| ConfigError::Other(format!("decode section [{section}]: {e}")))
  }
}

impl ConfigBackend for TomlConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError> {
    let path = self.paths.config_file();
    let content = fs::read_to_string(&path)?;
    let mut table: toml::Table = toml::from_str(&content)?;

    let value = table
      .remove(section)
      .ok_or_else(|| ConfigError::Other(format!("missing section [{section}] in {}", path.display())))?;

    Self::decode_section(section, value)
  }

  fn load_section_with_default<T: DeserializeOwned + Default>(&self, section: &str) -> Result<T, ConfigError> {
    let Some(content) = self.read_config()? else {
      tracing::debug!(section, "no config file, using defaults");
      return Ok(T::default());
    };

    let mut table: toml::Table = toml::from_str(&content)?;

    let Some(value) = table.remove(section) else {
      return Ok(T::default());
    };

    Self::decode_section(section, value)
  }

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError> {
    let path = self.paths.config_file();

    // 1) Documento actual, o uno vacío si no existe.
    let mut doc: DocumentMut = match self.read_config()? {
      Some(content) => {
        content.parse::<DocumentMut>().map_err(|e| ConfigError::Other(format!("parse toml_edit doc: {e}")))?
      }
      None => DocumentMut::new(),
    };

    // 2) Serializar la sección con `toml` normal (serde).
    let section_str = toml::to_string(value)
      .map_err(|e| ConfigError::Other(format!("encode section [{section}]: {e}")))?;

    // 3) Reparsear como tabla: `section_str` viene sin cabecera ("a = 1\nb = 2\n").
    let section_doc = section_str
      .parse::<DocumentMut>()
      .map_err(|e| ConfigError::Other(format!("parse section as doc: {e}")))?;

    // 4) Reemplazar la sección en la raíz; los comentarios de fuera se conservan.
    doc[section] = Item::Table(section_doc.as_table().clone());

    // 5) Escritura atómica.
    ryonkt_fs::atomic_write_str(&path, &doc.to_string())?;

    tracing::debug!(section, path = %path.display(), "config section saved");
    Ok(())
  }
}
