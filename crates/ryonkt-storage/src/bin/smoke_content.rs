use std::path::Path;

use ryonkt_core::domain::ContentBundle;
use ryonkt_core::services::ContentPersistence;
use ryonkt_storage::SqliteKeyValueStore;

fn main() -> Result<(), Box<dyn std::error::Error>> {
  // ajusta la ruta si quieres probar contra otra base de datos
  let store = SqliteKeyValueStore::open(Path::new("ryonkt-smoke.db"))?;
  let persistence = ContentPersistence::new(store);

  let bundle = ContentBundle::default();
  println!("Saving bundle with {} works under `{}`", bundle.works.len(), persistence.key());

  persistence.save(&bundle)?;

  let loaded = persistence.load()?;
  let row = persistence.store().entry(persistence.key())?;

  println!("Loaded {} works, equal = {}", loaded.works.len(), loaded == bundle);
  println!("Row updated_at = {:?}", row.map(|r| r.updated_at));
  Ok(())
}
