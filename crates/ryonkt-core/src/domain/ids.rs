use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identificador único de una obra (`Work`) de la discografía.
///
/// Es un entero opaco: los ids nuevos se derivan del reloj en milisegundos
/// y nunca se reutilizan tras un borrado (ver `Dashboard::add_work`).
/// Se serializa como número plano para mantener la forma del JSON guardado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkId(u64);

impl WorkId {
  /// Construye un `WorkId` a partir de un valor existente.
  pub const fn new(value: u64) -> Self {
    WorkId(value)
  }

  /// Devuelve el valor interno.
  pub const fn get(&self) -> u64 {
    self.0
  }

  /// Siguiente id, o `None` si ya es `u64::MAX`.
  pub fn successor(&self) -> Option<Self> {
    self.0.checked_add(1).map(WorkId)
  }
}

impl From<u64> for WorkId {
  fn from(v: u64) -> Self {
    WorkId(v)
  }
}

impl From<WorkId> for u64 {
  fn from(id: WorkId) -> Self {
    id.0
  }
}

impl FromStr for WorkId {
  type Err = std::num::ParseIntError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    s.trim().parse::<u64>().map(WorkId)
  }
}

impl fmt::Display for WorkId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn serializes_as_plain_number() {
    let json = serde_json::to_string(&WorkId::new(1_700_000_000_000)).unwrap();
    assert_eq!(json, "1700000000000");
  }

  #[test]
  fn successor_stops_at_max() {
    assert_eq!(WorkId::new(7).successor(), Some(WorkId::new(8)));
    assert_eq!(WorkId::new(u64::MAX).successor(), None);
  }

  #[test]
  fn parses_from_cli_text() {
    assert_eq!(" 42 ".parse::<WorkId>().unwrap(), WorkId::new(42));
    assert!("abc".parse::<WorkId>().is_err());
  }
}
