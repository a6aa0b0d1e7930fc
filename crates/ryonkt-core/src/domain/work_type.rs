use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::{fmt, str::FromStr};

/// Tipo (formato) de una obra de la discografía.
///
/// Sigue la clasificación que ofrece el panel de edición
/// (Album, EP, Single, etc.) pero el conjunto es abierto: cualquier otro
/// texto se conserva tal cual mediante [`WorkType::Custom`].
///
/// Ejemplos típicos:
/// - `Album`
/// - `Live Recording`
/// - `album (2xcd)` (entraría como `Custom("album (2xcd)")`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WorkType {
  /// Un álbum completo.
  Album,
  /// Extended Play: más corto que un álbum, más largo que un single.
  EP,
  /// Una sola pista o muy pocas.
  Single,
  /// Grabación en directo.
  LiveRecording,
  /// Recopilación de pistas de varios lanzamientos o artistas.
  Compilation,
  /// Texto libre no estándar.
  Custom(String),
}

impl WorkType {
  /// Valores que el panel ofrece en su selector, en orden.
  pub const PRESETS: [WorkType; 5] =
    [WorkType::Album, WorkType::EP, WorkType::Single, WorkType::LiveRecording, WorkType::Compilation];

  /// Etiqueta tal como se guarda y se muestra.
  pub fn as_str(&self) -> &str {
    match self {
      WorkType::Album => "Album",
      WorkType::EP => "EP",
      WorkType::Single => "Single",
      WorkType::LiveRecording => "Live Recording",
      WorkType::Compilation => "Compilation",
      WorkType::Custom(s) => s,
    }
  }

  pub fn is_custom(&self) -> bool {
    matches!(self, WorkType::Custom(_))
  }
}

// Se compara por el texto guardado: `Custom("Album")` y `Album` son el mismo tipo.
impl PartialEq for WorkType {
  fn eq(&self, other: &Self) -> bool {
    self.as_str() == other.as_str()
  }
}

impl Eq for WorkType {}

impl Hash for WorkType {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.as_str().hash(state);
  }
}

impl Default for WorkType {
  fn default() -> Self {
    WorkType::Album
  }
}

impl FromStr for WorkType {
  type Err = std::convert::Infallible;

  /// Convierte una cadena en un `WorkType`.
  ///
  /// Solo las etiquetas exactas del selector se reconocen; cualquier otro
  /// texto (incluido `"album"` en minúsculas) queda como `Custom` sin tocar,
  /// de modo que guardar y volver a cargar devuelve exactamente el mismo texto.
  ///
  /// Parsear **nunca falla**.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let wt = match s {
      "Album" => WorkType::Album,
      "EP" => WorkType::EP,
      "Single" => WorkType::Single,
      "Live Recording" => WorkType::LiveRecording,
      "Compilation" => WorkType::Compilation,
      _ => WorkType::Custom(s.to_string()),
    };

    Ok(wt)
  }
}

impl From<String> for WorkType {
  fn from(s: String) -> Self {
    match s.parse() {
      Ok(WorkType::Custom(_)) => WorkType::Custom(s),
      Ok(known) => known,
      Err(never) => match never {},
    }
  }
}

impl From<&str> for WorkType {
  fn from(s: &str) -> Self {
    WorkType::from(s.to_string())
  }
}

impl From<WorkType> for String {
  fn from(wt: WorkType) -> Self {
    match wt {
      WorkType::Custom(s) => s,
      known => known.as_str().to_string(),
    }
  }
}

impl fmt::Display for WorkType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn presets_parse_to_known_variants() {
    for preset in WorkType::PRESETS {
      assert_eq!(WorkType::from(preset.as_str()), preset);
    }
  }

  #[test]
  fn free_text_is_kept_verbatim() {
    let wt = WorkType::from("album (2xcd)");
    assert_eq!(wt, WorkType::Custom("album (2xcd)".into()));
    assert_eq!(wt.to_string(), "album (2xcd)");

    // las minúsculas no se normalizan
    assert!(WorkType::from("album").is_custom());
  }

  #[test]
  fn custom_spelling_of_a_preset_round_trips_equal() {
    let hand_built = WorkType::Custom("Album".into());
    let json = serde_json::to_string(&hand_built).unwrap();
    let back: WorkType = serde_json::from_str(&json).unwrap();

    assert_eq!(back, WorkType::Album);
    assert_eq!(back, hand_built);
    assert_ne!(WorkType::Custom("album".into()), WorkType::Album);
  }

  #[test]
  fn serializes_as_string() {
    let json = serde_json::to_string(&WorkType::LiveRecording).unwrap();
    assert_eq!(json, "\"Live Recording\"");

    let back: WorkType = serde_json::from_str("\"cassette\"").unwrap();
    assert_eq!(back, WorkType::Custom("cassette".into()));
  }
}
