use serde::{Deserialize, Serialize};

/// Texto de la sección "about".
///
/// Todos los campos son texto libre sin restricciones de longitud.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
  /// Primer párrafo de la descripción.
  pub description1: String,
  /// Segundo párrafo de la descripción.
  pub description2: String,
  /// Técnicas (en el sitio público aparece como "approach").
  pub techniques: String,
  pub influences: String,
  pub tools: String,
}
