//! Subversion working copy accessor

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::{Result, backend::SvnBackend, on_disk::FsSvnBackend, scm::LocalScm};

/// Read-only view of the Subversion working copy enclosing a path.
#[derive(Clone)]
pub struct Svn {
    path: PathBuf,
    backend: Arc<dyn SvnBackend>,
}

impl std::fmt::Debug for Svn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Svn")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl Svn {
    pub const EXECUTABLE: &'static str = "svn";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_backend(path, Arc::new(FsSvnBackend::new()))
    }

    pub fn with_backend(path: impl Into<PathBuf>, backend: Arc<dyn SvnBackend>) -> Self {
        Self {
            path: path.into(),
            backend,
        }
    }

    pub fn root_path(&self) -> Result<PathBuf> {
        self.backend.working_copy_root(&self.path)
    }
}

impl LocalScm for Svn {
    fn executable(&self) -> &'static str {
        Self::EXECUTABLE
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn root_path(&self) -> Result<PathBuf> {
        Svn::root_path(self)
    }

    fn is_git(&self) -> bool {
        false
    }

    fn is_svn(&self) -> bool {
        true
    }
}
