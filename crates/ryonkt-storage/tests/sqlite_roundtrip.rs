//! Ciclo completo panel → SQLite → nueva sesión.

use ryonkt_core::domain::{About, ContentBundle, WorkId};
use ryonkt_core::ports::{Clock, KeyValueStore};
use ryonkt_core::services::{ContentPersistence, CorruptPolicy, Dashboard, LoadOutcome};
use ryonkt_core::CoreError;
use ryonkt_storage::{SqliteKeyValueStore, StorageConfig, open_persistence};
use tempfile::tempdir;

struct Frozen;

impl Clock for Frozen {
  fn now_millis(&self) -> u64 {
    1_735_689_600_000
  }

  fn current_year(&self) -> i32 {
    2025
  }
}

fn config_for(dir: &std::path::Path) -> StorageConfig {
  StorageConfig { db_path: dir.join("data").join("ryonkt.db"), ..StorageConfig::default() }
}

#[test]
fn edits_survive_a_new_session() {
  let tmp = tempdir().unwrap();
  let cfg = config_for(tmp.path());

  let new_id = {
    let mut dashboard = Dashboard::open(open_persistence(&cfg).unwrap(), Frozen).unwrap();
    let id = dashboard.add_work().unwrap();

    let draft = dashboard.work_draft_mut().unwrap();
    draft.title = "window to the room (reissue)".into();
    draft.url = "https://ryonkt.bandcamp.com".into();
    assert!(dashboard.commit_edit().unwrap());

    dashboard.delete_work(WorkId::new(1), &true).unwrap();
    dashboard
      .replace_about(About { description1: "ambient // drone".into(), ..dashboard.bundle().about.clone() })
      .unwrap();
    id
  };

  let reopened = Dashboard::open(open_persistence(&cfg).unwrap(), Frozen).unwrap();
  let bundle = reopened.bundle();

  assert_eq!(bundle.works[0].id, new_id);
  assert_eq!(bundle.works[0].title, "window to the room (reissue)");
  assert!(bundle.find_work(WorkId::new(1)).is_none());
  assert_eq!(bundle.about.description1, "ambient // drone");
  assert_eq!(bundle.works.len(), ContentBundle::default().works.len());
}

#[test]
fn round_trip_is_field_for_field() {
  let tmp = tempdir().unwrap();
  let persistence = open_persistence(&config_for(tmp.path())).unwrap();

  let mut bundle = ContentBundle::default();
  bundle.works[2].note = "unicode ok: 札幌".into();
  bundle.contact.instagram = String::new();

  persistence.save(&bundle).unwrap();
  persistence.save(&bundle).unwrap();

  assert_eq!(persistence.load().unwrap(), bundle);
}

#[test]
fn corrupt_row_follows_policy() {
  let tmp = tempdir().unwrap();
  let cfg = config_for(tmp.path());
  SqliteKeyValueStore::open(&cfg.db_path).unwrap().set(&cfg.content_key, "{ broken").unwrap();

  let lenient = open_persistence(&cfg).unwrap();
  assert!(matches!(lenient.load_outcome().unwrap(), LoadOutcome::Recovered(_)));

  let strict_cfg = StorageConfig { on_corrupt: CorruptPolicy::Fail, ..cfg };
  let strict = open_persistence(&strict_cfg).unwrap();
  assert!(matches!(strict.load(), Err(CoreError::CorruptContent { .. })));
}

#[test]
fn custom_key_is_used() {
  let tmp = tempdir().unwrap();
  let cfg = StorageConfig { content_key: "portfolio-v2".into(), ..config_for(tmp.path()) };
  let persistence = open_persistence(&cfg).unwrap();
  persistence.save(&ContentBundle::empty()).unwrap();

  let raw = ContentPersistence::new(SqliteKeyValueStore::open(&cfg.db_path).unwrap());
  assert!(raw.store().get("portfolio-v2").unwrap().is_some());
  assert_eq!(raw.store().get(raw.key()).unwrap(), None);

  let stored: serde_json::Value =
    serde_json::from_str(&raw.store().get("portfolio-v2").unwrap().unwrap()).unwrap();
  assert_eq!(stored["works"], serde_json::json!([]));
}
