use std::{fs, io::Cursor, path::Path};

use zip::ZipArchive;

use crate::error::Result;

/// Create the directory if it doesn’t exist; error if a non-directory exists there.
pub(crate) fn ensure_dir_exists(path: &Path) -> Result<()> {
    if path.exists() {
        if !path.is_dir() {
            return Err(std::io::Error::other(
                format!("Path exists but is not a directory: {}", path.display())
            ).into());
        }
    } else {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Extracts an in-memory `.zip` archive into the target directory.
pub(crate) fn extract_zip(archive: &[u8], dest_dir: &Path) -> Result<()> {
    let mut archive = ZipArchive::new(Cursor::new(archive))?;
    log::debug!("[common::fs] extracting {} entries to {}", archive.len(), dest_dir.display());
    archive.extract(dest_dir)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use zip::{write::SimpleFileOptions, ZipWriter};

    use super::*;

    #[test]
    fn creates_missing_dirs_and_rejects_files() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b");
        ensure_dir_exists(&nested).unwrap();
        assert!(nested.is_dir());
        ensure_dir_exists(&nested).unwrap();

        let file = dir.path().join("file");
        fs::write(&file, b"x").unwrap();
        assert!(ensure_dir_exists(&file).is_err());
    }

    #[test]
    fn extracts_nested_entries() {
        let mut bytes = Vec::new();
        {
            let mut zip = ZipWriter::new(Cursor::new(&mut bytes));
            zip.start_file("outer/inner.txt", SimpleFileOptions::default()).unwrap();
            zip.write_all(b"hello").unwrap();
            zip.finish().unwrap();
        }

        let dir = tempfile::tempdir().unwrap();
        extract_zip(&bytes, dir.path()).unwrap();
        assert_eq!(fs::read(dir.path().join("outer/inner.txt")).unwrap(), b"hello");
    }

    #[test]
    fn rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        assert!(extract_zip(b"not a zip", dir.path()).is_err());
    }
}
