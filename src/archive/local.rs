//! Directory-backed archive implementation.
//!
//! Files live under `<root>/<branch>/<path>`; the version token of a file is
//! the SHA-256 of its bytes, so a token stays valid exactly as long as the
//! content it was read from.

use crate::archive::{Archive, ArchiveFile};
use crate::errors::{AppError, AppResult};
use sha2::{Digest, Sha256};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub struct LocalArchive {
    root: PathBuf,
}

impl LocalArchive {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn blob_path(&self, branch: &str, path: &str) -> PathBuf {
        self.root.join(branch).join(path)
    }
}

fn version_of(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}

fn read_blob(full: &Path) -> AppResult<Option<Vec<u8>>> {
    match fs::read(full) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(AppError::Archive(format!(
            "read failed for '{}': {}",
            full.display(),
            e
        ))),
    }
}

impl Archive for LocalArchive {
    fn get_contents(&self, path: &str, branch: &str) -> AppResult<Option<ArchiveFile>> {
        let full = self.blob_path(branch, path);
        Ok(read_blob(&full)?.map(|content| {
            let version = version_of(&content);
            ArchiveFile { content, version }
        }))
    }

    fn create_file(
        &self,
        path: &str,
        _message: &str,
        content: &[u8],
        branch: &str,
    ) -> AppResult<()> {
        let full = self.blob_path(branch, path);

        if full.exists() {
            return Err(AppError::Archive(format!("'{}' already exists", path)));
        }
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| AppError::Archive(format!("create failed for '{}': {}", path, e)))?;
        }

        fs::write(&full, content)
            .map_err(|e| AppError::Archive(format!("create failed for '{}': {}", path, e)))
    }

    fn update_file(
        &self,
        path: &str,
        _message: &str,
        content: &[u8],
        version: &str,
        branch: &str,
    ) -> AppResult<()> {
        let full = self.blob_path(branch, path);

        let current = read_blob(&full)?
            .ok_or_else(|| AppError::Archive(format!("'{}' not found for update", path)))?;

        if version_of(&current) != version {
            return Err(AppError::Archive(format!(
                "stale version token for '{}': file changed since last read",
                path
            )));
        }

        fs::write(&full, content)
            .map_err(|e| AppError::Archive(format!("update failed for '{}': {}", path, e)))
    }
}
