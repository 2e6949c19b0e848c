use std::path::{Path, PathBuf};

/// Owns a downloaded file and removes it when dropped.
pub struct TempFile {
    path: PathBuf,
}

impl TempFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        if self.path.exists() {
            if let Err(e) = std::fs::remove_file(&self.path) {
                log::warn!("Failed to remove file {}: {}", self.path.display(), e);
            } else {
                log::debug!("Removed {}", self.path.display());
            }
        }
    }
}
