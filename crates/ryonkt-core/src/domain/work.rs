use serde::{Deserialize, Serialize};

use crate::domain::ids::WorkId;
use crate::domain::work_type::WorkType;

/// Una entrada de la discografía.
///
/// Ningún campo se valida: el panel acepta cualquier texto, incluido vacío.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Work {
  /// Identificador único y estable.
  pub id: WorkId,

  /// Título (no vacío por convención, no se exige).
  pub title: String,

  /// Año de publicación. Por convención 4 dígitos, pero es texto libre.
  pub year: String,

  /// Tipo/formato de la obra.
  #[serde(rename = "type")]
  pub kind: WorkType,

  /// Enlace externo. Cadena vacía significa "sin enlace".
  #[serde(default)]
  pub url: String,

  /// Sello discográfico, mostrado en la discografía pública.
  #[serde(default)]
  pub label: String,

  /// Nota libre opcional (cadena vacía = sin nota).
  #[serde(default)]
  pub note: String,
}

impl Work {
  /// Título que recibe una obra recién creada desde el panel.
  pub const PLACEHOLDER_TITLE: &'static str = "NEW WORK";

  /// Obra con valores por defecto para edición inmediata.
  pub fn placeholder(id: WorkId, year: i32) -> Self {
    Work {
      id,
      title: Self::PLACEHOLDER_TITLE.to_string(),
      year: format!("{year:04}"),
      kind: WorkType::Album,
      url: String::new(),
      label: String::new(),
      note: String::new(),
    }
  }

  pub fn link(&self) -> Option<&str> {
    non_empty(&self.url)
  }

  pub fn note(&self) -> Option<&str> {
    non_empty(&self.note)
  }
}

fn non_empty(s: &str) -> Option<&str> {
  if s.is_empty() { None } else { Some(s) }
}
