//! SCM detection
//!
//! Picks the accessor for a path: Git is tried first, then Subversion.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::{
    Error, Git, Result, ScmConfig, Svn,
    backend::{GitBackend, SvnBackend},
    on_disk::{FsSvnBackend, Git2Backend},
};

/// Behaviour shared by every local checkout accessor.
pub trait LocalScm {
    /// Name of the command line tool for this SCM
    fn executable(&self) -> &'static str;

    /// Path the accessor was created for
    fn path(&self) -> &Path;

    /// Root of the enclosing checkout
    fn root_path(&self) -> Result<PathBuf>;

    fn is_git(&self) -> bool;

    fn is_svn(&self) -> bool;
}

/// A detected checkout.
#[derive(Debug, Clone)]
pub enum Scm {
    Git(Git),
    Svn(Svn),
}

impl Scm {
    /// Detect the checkout enclosing `path` using the on-disk backends.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        ScmDetector::default().detect(path)
    }

    pub fn as_git(&self) -> Option<&Git> {
        match self {
            Scm::Git(git) => Some(git),
            Scm::Svn(_) => None,
        }
    }

    pub fn as_svn(&self) -> Option<&Svn> {
        match self {
            Scm::Svn(svn) => Some(svn),
            Scm::Git(_) => None,
        }
    }

    fn inner(&self) -> &dyn LocalScm {
        match self {
            Scm::Git(git) => git,
            Scm::Svn(svn) => svn,
        }
    }
}

impl LocalScm for Scm {
    fn executable(&self) -> &'static str {
        self.inner().executable()
    }

    fn path(&self) -> &Path {
        self.inner().path()
    }

    fn root_path(&self) -> Result<PathBuf> {
        self.inner().root_path()
    }

    fn is_git(&self) -> bool {
        self.inner().is_git()
    }

    fn is_svn(&self) -> bool {
        self.inner().is_svn()
    }
}

/// Detects checkouts with a chosen pair of backends.
#[derive(Clone)]
pub struct ScmDetector {
    git: Arc<dyn GitBackend>,
    svn: Arc<dyn SvnBackend>,
    config: ScmConfig,
}

impl Default for ScmDetector {
    fn default() -> Self {
        Self::new(Arc::new(Git2Backend::new()), Arc::new(FsSvnBackend::new()))
    }
}

impl ScmDetector {
    pub fn new(git: Arc<dyn GitBackend>, svn: Arc<dyn SvnBackend>) -> Self {
        Self {
            git,
            svn,
            config: ScmConfig::default(),
        }
    }

    /// Config handed to detected [`Git`] accessors.
    pub fn with_config(mut self, config: ScmConfig) -> Self {
        self.config = config;
        self
    }

    /// Detect the checkout enclosing `path`.
    ///
    /// Returns [`Error::NoRepository`] when neither backend recognises it.
    pub fn detect(&self, path: impl AsRef<Path>) -> Result<Scm> {
        let path = path.as_ref();

        match self.git.toplevel(path) {
            Ok(root) => {
                tracing::debug!(path = %path.display(), root = %root.display(), "Detected git checkout");
                return Ok(Scm::Git(
                    Git::with_backend(path, Arc::clone(&self.git)).with_config(self.config.clone()),
                ));
            }
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(e),
        }

        match self.svn.working_copy_root(path) {
            Ok(root) => {
                tracing::debug!(path = %path.display(), root = %root.display(), "Detected svn checkout");
                Ok(Scm::Svn(Svn::with_backend(path, Arc::clone(&self.svn))))
            }
            Err(e) if e.is_not_found() => Err(Error::NoRepository {
                path: path.to_path_buf(),
            }),
            Err(e) => Err(e),
        }
    }
}
