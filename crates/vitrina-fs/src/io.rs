use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Escribe `contents` en `path` sin dejar nunca un archivo a medias.
///
/// Primero vuelca todo en `<path>.tmp`, fuerza el `fsync` y después
/// renombra encima del destino. Si el proceso muere a mitad, el archivo
/// original sigue intacto.
pub fn atomic_write_str(path: &Path, contents: &str) -> io::Result<()> {
  let tmp_path = path.with_extension("tmp");

  {
    let mut tmp_file = fs::File::create(&tmp_path)?;
    tmp_file.write_all(contents.as_bytes())?;
    tmp_file.sync_all()?;
  }

  fs::rename(&tmp_path, path)?;
  tracing::trace!(path = %path.display(), bytes = contents.len(), "atomic write done");
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn writes_and_replaces_contents() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("vitrina.toml");

    atomic_write_str(&path, "a = 1\n").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "a = 1\n");

    atomic_write_str(&path, "a = 2\n").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "a = 2\n");
  }

  #[test]
  fn leaves_no_tmp_file_behind() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("vitrina.toml");

    atomic_write_str(&path, "x = true\n").unwrap();

    assert!(!path.with_extension("tmp").exists());
  }
}
