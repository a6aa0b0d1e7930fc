use serde::{Deserialize, Serialize};

use crate::domain::about::About;
use crate::domain::collaboration::Collaboration;
use crate::domain::contact::Contact;
use crate::domain::ids::WorkId;
use crate::domain::work::Work;

/// Versión de esquema con la que se escriben los bundles nuevos.
///
/// Los datos guardados sin este campo se leen como versión `0` (forma legacy).
/// No hay migraciones: el número es solo informativo.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Todo el contenido editable del sitio, persistido como una sola unidad.
///
/// Se construye una vez al arrancar (desde el almacén o desde
/// [`ContentBundle::default`]) y se reemplaza entero en cada carga.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBundle {
  #[serde(default)]
  pub schema_version: u32,

  /// Discografía. El orden de inserción es el orden de visualización.
  pub works: Vec<Work>,

  pub about: About,

  pub contact: Contact,

  /// Datos de solo lectura del sitio público.
  #[serde(default)]
  pub collaborations: Vec<Collaboration>,
}

impl ContentBundle {
  /// Bundle vacío (sin obras ni colaboraciones) con la versión actual.
  pub fn empty() -> Self {
    ContentBundle {
      schema_version: CURRENT_SCHEMA_VERSION,
      works: Vec::new(),
      about: About::default(),
      contact: Contact::default(),
      collaborations: Vec::new(),
    }
  }

  pub fn find_work(&self, id: WorkId) -> Option<&Work> {
    self.works.iter().find(|w| w.id == id)
  }

  pub(crate) fn find_work_mut(&mut self, id: WorkId) -> Option<&mut Work> {
    self.works.iter_mut().find(|w| w.id == id)
  }

  /// Id más alto presente en la discografía.
  pub fn max_work_id(&self) -> Option<WorkId> {
    self.works.iter().map(|w| w.id).max()
  }
}

impl Default for ContentBundle {
  /// Contenido de fábrica: la discografía real del artista.
  fn default() -> Self {
    crate::domain::defaults::default_bundle()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn legacy_shape_without_version_reads_as_zero() {
    let json = r#"{
      "works": [{"id": 1, "title": "VOID//ECHO", "year": "2025", "type": "Album", "url": ""}],
      "about": {"description1": "", "description2": "", "techniques": "", "influences": "", "tools": ""},
      "contact": {"email": "", "bandcamp": "", "soundcloud": "", "instagram": ""}
    }"#;

    let bundle: ContentBundle = serde_json::from_str(json).unwrap();
    assert_eq!(bundle.schema_version, 0);
    assert_eq!(bundle.works.len(), 1);
    assert!(bundle.collaborations.is_empty());
  }

  #[test]
  fn missing_about_is_a_parse_error() {
    let json = r#"{"works": [], "contact": {"email": "", "bandcamp": "", "soundcloud": "", "instagram": ""}}"#;
    assert!(serde_json::from_str::<ContentBundle>(json).is_err());
  }

  #[test]
  fn default_bundle_has_unique_ids() {
    let bundle = ContentBundle::default();
    let mut ids: Vec<_> = bundle.works.iter().map(|w| w.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), bundle.works.len());
    assert_eq!(bundle.schema_version, CURRENT_SCHEMA_VERSION);
  }
}
