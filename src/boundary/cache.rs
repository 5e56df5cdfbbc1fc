use std::{fs, io::Write, path::{Path, PathBuf}};

use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;

use crate::{common::ensure_dir_exists, error::Result};

/// On-disk cache of HTTP response bodies, keyed by request URL.
///
/// Each body is stored in a file named by the hex SHA-256 of its URL.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    dir: PathBuf,
}

impl ResponseCache {
    /// Cache rooted at `dir`; the directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self { Self { dir: dir.into() } }

    /// Default per-user location, `<cache dir>/ukgeo/web-cache`.
    pub fn default_dir() -> Option<PathBuf> {
        dirs::cache_dir().map(|dir| dir.join("ukgeo").join("web-cache"))
    }

    #[inline] pub fn dir(&self) -> &Path { &self.dir }

    /// File holding the cached body for `url`.
    pub fn path_for(&self, url: &str) -> PathBuf {
        self.dir.join(hex::encode(Sha256::digest(url.as_bytes())))
    }

    /// Cached body for `url`, if present.
    pub fn get(&self, url: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path_for(url);
        if !path.is_file() { return Ok(None) }
        Ok(Some(fs::read(path)?))
    }

    /// Store a body (tempfile -> atomic rename, so readers never see partial entries).
    pub fn put(&self, url: &str, body: &[u8]) -> Result<()> {
        ensure_dir_exists(&self.dir)?;
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(body)?;
        tmp.as_file().sync_all().ok(); // best-effort fsync file
        tmp.persist(self.path_for(url)).map_err(|e| e.error)?;
        Ok(())
    }

    /// Remove every cached entry.
    pub fn clear(&self) -> Result<()> {
        if !self.dir.exists() { return Ok(()) }
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.is_file() { fs::remove_file(path)? }
        }
        Ok(())
    }

    /// GET `url`, serving the body from the cache when present.
    /// Transport and status errors are returned as-is; nothing is retried.
    #[cfg(feature = "download")]
    pub fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(body) = self.get(url)? {
            log::info!("[boundary::cache] {url} served from {}", self.dir.display());
            return Ok(body)
        }

        log::info!("[boundary::cache] GET {url}");
        let body = reqwest::blocking::get(url)?
            .error_for_status()?
            .bytes()?
            .to_vec();

        self.put(url, &body)?;
        Ok(body)
    }
}
