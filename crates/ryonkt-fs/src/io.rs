use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::Path;

/// Escribe `contents` en un temporal hermano y lo renombra sobre `path`.
///
/// Un lector nunca ve el fichero a medio escribir.
pub fn atomic_write_str(path: &Path, contents: &str) -> io::Result<()> {
  let tmp_path = path.with_extension("tmp");

  {
    let mut tmp_file = fs::File::create(&tmp_path)?;
    tmp_file.write_all(contents.as_bytes())?;
    tmp_file.sync_all()?;
  }

  fs::rename(&tmp_path, path)?;
  Ok(())
}

/// Lee el fichero entero; `Ok(None)` si no existe.
pub fn read_to_string_if_exists(path: &Path) -> io::Result<Option<String>> {
  match fs::read_to_string(path) {
    Ok(content) => Ok(Some(content)),
    Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
    Err(e) => Err(e),
  }
}
