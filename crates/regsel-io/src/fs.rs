use std::fs::{self, File};
use std::path::Path;

use log::debug;
use tempfile::NamedTempFile;

use crate::error::{IoError, IoResult};

/// Create `dir` and any missing parents.
pub fn ensure_dir(dir: &Path) -> IoResult<()> {
    if !dir.is_dir() {
        debug!("creating directory {}", dir.display());
    }
    fs::create_dir_all(dir).map_err(|e| IoError::io(dir, e))
}

/// Write `path` through a temporary file in the same directory that is
/// renamed over the destination once `write` succeeds and the data is synced.
/// A failed write leaves any previous file at `path` untouched.
pub fn write_atomic<F>(path: &Path, write: F) -> IoResult<()>
where
    F: FnOnce(&mut File) -> IoResult<()>,
{
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| IoError::io(dir, e))?;
    write(tmp.as_file_mut())?;
    tmp.as_file().sync_all().map_err(|e| IoError::io(path, e))?;
    tmp.persist(path).map_err(|e| IoError::io(path, e.error))?;
    debug!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_ensure_dir_nested() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a").join("b");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
        // Idempotent
        ensure_dir(&nested).unwrap();
    }

    #[test]
    fn test_write_atomic_replaces_file() {
        let root = tempfile::tempdir().unwrap();
        let path = root.path().join("out.txt");
        fs::write(&path, "old").unwrap();

        write_atomic(&path, |f| {
            f.write_all(b"new").map_err(|e| IoError::io("out.txt", e))
        })
        .unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_failed_write_keeps_previous_file() {
        let root = tempfile::tempdir().unwrap();
        let path = root.path().join("out.txt");
        fs::write(&path, "old").unwrap();

        let result = write_atomic(&path, |_| Err(IoError::NotFound("missing".into())));
        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "old");
        // The temporary file is cleaned up on drop
        assert_eq!(fs::read_dir(root.path()).unwrap().count(), 1);
    }
}
