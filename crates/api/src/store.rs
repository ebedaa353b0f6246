//! Filesystem store for cover images.
//!
//! Covers live flat in one public directory under generated filenames
//! (see `kinoteka_core::covers`). There is no coordination across
//! concurrent requests; random names make writes collision-free, and
//! deletes tolerate files that are already gone.

use std::io;
use std::path::{Path, PathBuf};

use kinoteka_core::covers;

/// Handle to the images directory. Cheap to clone.
#[derive(Debug, Clone)]
pub struct CoverStore {
    dir: PathBuf,
}

impl CoverStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create the images directory if it does not exist yet.
    pub async fn ensure_dir(&self) -> io::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await
    }

    /// Absolute path of a stored cover file.
    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write validated cover bytes under a fresh generated filename,
    /// returning that filename.
    pub async fn save(&self, extension: &str, bytes: &[u8]) -> io::Result<String> {
        let filename = covers::storage_filename(extension);
        tokio::fs::write(self.path_for(&filename), bytes).await?;
        Ok(filename)
    }

    /// Remove a stored cover file. A file that is already gone is a
    /// silent no-op; other IO errors are returned.
    pub async fn delete(&self, filename: &str) -> io::Result<()> {
        match tokio::fs::remove_file(self.path_for(filename)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Check whether a stored cover file exists.
    pub async fn exists(&self, filename: &str) -> bool {
        tokio::fs::try_exists(self.path_for(filename))
            .await
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_delete_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let store = CoverStore::new(tmp.path());

        let filename = store.save("png", b"\x89PNG\r\n\x1a\n").await.unwrap();
        assert!(filename.ends_with(".png"));
        assert!(store.exists(&filename).await);

        store.delete(&filename).await.unwrap();
        assert!(!store.exists(&filename).await);

        // Deleting again is a no-op, not an error.
        store.delete(&filename).await.unwrap();
    }

    #[tokio::test]
    async fn test_ensure_dir_creates_nested_path() {
        let tmp = tempfile::tempdir().unwrap();
        let store = CoverStore::new(tmp.path().join("public/images"));
        store.ensure_dir().await.unwrap();
        let filename = store.save("gif", b"GIF89a").await.unwrap();
        assert!(store.exists(&filename).await);
    }
}
