use serde::{Deserialize, Serialize};

/// Datos de contacto del artista.
///
/// Ni el email ni los perfiles se validan; los enlaces salientes se
/// construyen concatenando estos textos (ver `site::links`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
  pub email: String,
  /// Dominio de bandcamp, p. ej. `ryonkt.bandcamp.com`.
  pub bandcamp: String,
  /// Ruta de soundcloud sin esquema, p. ej. `soundcloud.com/ryonkt`.
  pub soundcloud: String,
  /// Usuario de instagram, con o sin `@`.
  pub instagram: String,
}
