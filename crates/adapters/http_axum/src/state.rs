//! Shared state for the static site router.

use std::path::{Path, PathBuf};

/// Where the compiled bundle lives on disk.
#[derive(Debug, Clone)]
pub struct SiteState {
    dist_dir: PathBuf,
}

impl SiteState {
    /// Create state serving files from `dist_dir`.
    pub fn new(dist_dir: impl Into<PathBuf>) -> Self {
        Self {
            dist_dir: dist_dir.into(),
        }
    }

    #[must_use]
    pub fn dist_dir(&self) -> &Path {
        &self.dist_dir
    }

    /// Entry document served for `/` and unknown paths.
    #[must_use]
    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }

    /// Whether the bundle has been built into `dist_dir`.
    #[must_use]
    pub fn is_built(&self) -> bool {
        self.index_file().is_file()
    }
}
