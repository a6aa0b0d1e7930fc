use serde::{Deserialize, Serialize};

/// Colaboración o aparición en compilaciones.
///
/// Solo se muestra en el sitio público; el panel no la edita.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collaboration {
  /// Nombre con el que se acredita (p. ej. `ryonkt & offthesky`).
  pub artist: String,
  pub title: String,
  pub year: String,
  pub format: String,
  pub label: String,
  #[serde(default)]
  pub note: String,
}
