use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::ContentBundle;
use crate::errors::CoreError;
use crate::ports::KeyValueStore;

/// Clave fija bajo la que se guarda el bundle completo.
pub const DEFAULT_CONTENT_KEY: &str = "ryonkt-content";

/// Qué hacer cuando hay datos guardados que no se pueden parsear.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorruptPolicy {
  /// Usar el contenido de fábrica (y avisar en el log).
  #[default]
  Fallback,
  /// Abortar la sesión con [`CoreError::CorruptContent`].
  Fail,
}

/// Resultado detallado de una carga.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
  /// Había datos y se parsearon.
  Stored(ContentBundle),
  /// No había nada bajo la clave: contenido de fábrica.
  Missing(ContentBundle),
  /// Había datos corruptos y se usó el contenido de fábrica.
  Recovered(ContentBundle),
}

impl LoadOutcome {
  pub fn bundle(&self) -> &ContentBundle {
    match self {
      LoadOutcome::Stored(b) | LoadOutcome::Missing(b) | LoadOutcome::Recovered(b) => b,
    }
  }

  pub fn into_bundle(self) -> ContentBundle {
    match self {
      LoadOutcome::Stored(b) | LoadOutcome::Missing(b) | LoadOutcome::Recovered(b) => b,
    }
  }
}

/// Adaptador de persistencia: guarda el `ContentBundle` entero bajo una sola clave.
///
/// - `load` nunca mezcla: o devuelve lo guardado o el contenido de fábrica.
/// - `save` serializa todo y sobrescribe sin condiciones (sin escrituras
///   parciales, sin transacciones, sin migraciones).
pub struct ContentPersistence<S> {
  store: S,
  key: String,
  on_corrupt: CorruptPolicy,
}

impl<S> ContentPersistence<S>
where
  S: KeyValueStore,
{
  pub fn new(store: S) -> Self {
    Self { store, key: DEFAULT_CONTENT_KEY.to_string(), on_corrupt: CorruptPolicy::default() }
  }

  pub fn with_key(mut self, key: impl Into<String>) -> Self {
    self.key = key.into();
    self
  }

  pub fn with_policy(mut self, on_corrupt: CorruptPolicy) -> Self {
    self.on_corrupt = on_corrupt;
    self
  }

  pub fn key(&self) -> &str {
    &self.key
  }

  pub fn policy(&self) -> CorruptPolicy {
    self.on_corrupt
  }

  pub fn store(&self) -> &S {
    &self.store
  }

  /// Carga el bundle; ausente (o corrupto con `Fallback`) → contenido de fábrica.
  pub fn load(&self) -> Result<ContentBundle, CoreError> {
    self.load_outcome().map(LoadOutcome::into_bundle)
  }

  pub fn load_outcome(&self) -> Result<LoadOutcome, CoreError> {
    let Some(raw) = self.store.get(&self.key)? else {
      debug!(key = %self.key, "no stored content, using defaults");
      return Ok(LoadOutcome::Missing(ContentBundle::default()));
    };

    match serde_json::from_str::<ContentBundle>(&raw) {
      Ok(bundle) => {
        debug!(key = %self.key, works = bundle.works.len(), version = bundle.schema_version, "content loaded");
        Ok(LoadOutcome::Stored(bundle))
      }
      Err(source) => match self.on_corrupt {
        CorruptPolicy::Fallback => {
          warn!(key = %self.key, error = %source, "stored content is corrupt, using defaults");
          Ok(LoadOutcome::Recovered(ContentBundle::default()))
        }
        CorruptPolicy::Fail => Err(CoreError::CorruptContent { key: self.key.clone(), source }),
      },
    }
  }

  /// Serializa el bundle completo y lo escribe bajo la clave.
  pub fn save(&self, bundle: &ContentBundle) -> Result<(), CoreError> {
    let raw = serde_json::to_string(bundle).map_err(CoreError::Serialize)?;
    self.store.set(&self.key, &raw)?;
    debug!(key = %self.key, bytes = raw.len(), "content saved");
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{About, WorkId};
  use crate::services::test_support::{BrokenStore, CountingStore};

  #[test]
  fn missing_key_yields_defaults() {
    let p = ContentPersistence::new(CountingStore::default());
    let outcome = p.load_outcome().unwrap();

    assert!(matches!(outcome, LoadOutcome::Missing(_)));
    assert_eq!(outcome.into_bundle(), ContentBundle::default());
  }

  #[test]
  fn load_after_save_returns_same_bundle() {
    let p = ContentPersistence::new(CountingStore::default());
    let mut bundle = ContentBundle::default();
    bundle.works.truncate(2);
    bundle.works[0].url = "https://ryonkt.bandcamp.com/album/breathing".into();
    bundle.about = About { tools: String::new(), ..bundle.about };

    p.save(&bundle).unwrap();

    assert_eq!(p.load().unwrap(), bundle);
  }

  #[test]
  fn saving_twice_stores_identical_value() {
    let p = ContentPersistence::new(CountingStore::default());
    let bundle = ContentBundle::default();

    p.save(&bundle).unwrap();
    let first = p.store().raw(DEFAULT_CONTENT_KEY).unwrap();
    p.save(&bundle).unwrap();
    let second = p.store().raw(DEFAULT_CONTENT_KEY).unwrap();

    assert_eq!(first, second);
    assert_eq!(p.store().writes(), 2);
  }

  #[test]
  fn corrupt_content_falls_back_by_default() {
    let store = CountingStore::with_value(DEFAULT_CONTENT_KEY, "{\"works\": [");
    let p = ContentPersistence::new(store);

    let outcome = p.load_outcome().unwrap();
    assert!(matches!(outcome, LoadOutcome::Recovered(_)));
    assert_eq!(outcome.bundle(), &ContentBundle::default());

    // lo corrupto sigue ahí hasta el próximo save
    assert_eq!(p.store().raw(DEFAULT_CONTENT_KEY).unwrap(), "{\"works\": [");
    assert_eq!(p.store().writes(), 0);
  }

  #[test]
  fn corrupt_content_fails_with_fail_policy() {
    let store = CountingStore::with_value("custom", "not json");
    let p = ContentPersistence::new(store).with_key("custom").with_policy(CorruptPolicy::Fail);

    match p.load() {
      Err(CoreError::CorruptContent { key, .. }) => assert_eq!(key, "custom"),
      other => panic!("expected CorruptContent, got {other:?}"),
    }
  }

  #[test]
  fn wrong_shape_counts_as_corrupt() {
    let store = CountingStore::with_value(DEFAULT_CONTENT_KEY, r#"{"works": "nope"}"#);
    let p = ContentPersistence::new(store);
    assert_eq!(p.load().unwrap(), ContentBundle::default());
  }

  #[test]
  fn store_errors_propagate() {
    let p = ContentPersistence::new(BrokenStore);
    assert!(matches!(p.load(), Err(CoreError::Store(_))));
    assert!(matches!(p.save(&ContentBundle::empty()), Err(CoreError::Store(_))));
  }

  #[test]
  fn stored_json_uses_plain_field_names() {
    let p = ContentPersistence::new(CountingStore::default());
    let mut bundle = ContentBundle::empty();
    bundle.works.push(crate::domain::Work::placeholder(WorkId::new(1), 2024));
    p.save(&bundle).unwrap();

    let value: serde_json::Value = serde_json::from_str(&p.store().raw(DEFAULT_CONTENT_KEY).unwrap()).unwrap();
    assert_eq!(value["works"][0]["id"], 1);
    assert_eq!(value["works"][0]["type"], "Album");
    assert!(value["about"].is_object());
    assert!(value["contact"].is_object());
  }

  #[test]
  fn policy_parses_from_lowercase() {
    let p: CorruptPolicy = serde_json::from_str("\"fail\"").unwrap();
    assert_eq!(p, CorruptPolicy::Fail);
    let p: CorruptPolicy = serde_json::from_str("\"fallback\"").unwrap();
    assert_eq!(p, CorruptPolicy::Fallback);
  }
}
