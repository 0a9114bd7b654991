//! Backend traits for repository queries
//!
//! Accessors ask a backend for raw repository state (HEAD, reference names,
//! config values) and derive their properties from it. The on-disk backends
//! live in [`crate::on_disk`], the in-memory ones in [`crate::mocks`].

use std::path::{Path, PathBuf};

use crate::Result;

/// State of HEAD in a git repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Head {
    /// HEAD is a symbolic reference to `refs/heads/<name>`.
    Branch(String),

    /// HEAD points directly at a commit (if any).
    Detached(Option<String>),
}

impl Head {
    /// Branch name, or `None` when detached.
    pub fn branch(&self) -> Option<&str> {
        match self {
            Head::Branch(name) => Some(name),
            Head::Detached(_) => None,
        }
    }
}

/// Raw queries against a git repository.
///
/// Every method except [`GitBackend::toplevel`] takes the working tree root
/// returned by `toplevel`.
pub trait GitBackend: Send + Sync {
    /// Working tree root of the repository enclosing `path`.
    ///
    /// Fails with an I/O error of kind `NotFound` when neither `path` nor any
    /// of its ancestors is inside a repository.
    fn toplevel(&self, path: &Path) -> Result<PathBuf>;

    /// Current HEAD.
    fn head(&self, root: &Path) -> Result<Head>;

    /// Full reference names (`refs/heads/...`, `refs/remotes/...`,
    /// `refs/tags/...`) in backend order.
    fn references(&self, root: &Path) -> Result<Vec<String>>;

    /// Target of a symbolic reference, `None` if missing or direct.
    fn symbolic_target(&self, root: &Path, name: &str) -> Result<Option<String>>;

    /// String value of a config key such as `remote.origin.url`.
    fn config_value(&self, root: &Path, key: &str) -> Result<Option<String>>;
}

/// Raw queries against a Subversion working copy.
pub trait SvnBackend: Send + Sync {
    /// Root of the working copy enclosing `path`, with the same failure
    /// contract as [`GitBackend::toplevel`].
    fn working_copy_root(&self, path: &Path) -> Result<PathBuf>;
}
