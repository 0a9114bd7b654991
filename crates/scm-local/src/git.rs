//! Git checkout accessor

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::{
    Error, Result, ScmConfig, SvnInfo,
    backend::{GitBackend, Head},
    on_disk::Git2Backend,
    refs,
    scm::LocalScm,
};

/// Read-only view of the git checkout enclosing a path.
///
/// Construction never touches the repository; every property is resolved
/// through the backend when asked for.
#[derive(Clone)]
pub struct Git {
    path: PathBuf,
    backend: Arc<dyn GitBackend>,
    config: ScmConfig,
}

impl std::fmt::Debug for Git {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git")
            .field("path", &self.path)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Git {
    pub const EXECUTABLE: &'static str = "git";

    /// Accessor for `path` backed by the on-disk repository.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_backend(path, Arc::new(Git2Backend::new()))
    }

    /// Accessor for `path` backed by `backend`.
    pub fn with_backend(path: impl Into<PathBuf>, backend: Arc<dyn GitBackend>) -> Self {
        Self {
            path: path.into(),
            backend,
            config: ScmConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ScmConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ScmConfig {
        &self.config
    }

    /// Working tree root of the enclosing repository.
    ///
    /// Returns [`Error::Io`] (kind `NotFound`) outside any repository.
    pub fn root_path(&self) -> Result<PathBuf> {
        self.backend.toplevel(&self.path)
    }

    /// Checked out branch, `None` when HEAD is detached.
    pub fn branch(&self) -> Result<Option<String>> {
        let root = self.root_path()?;
        Ok(self.backend.head(&root)?.branch().map(str::to_string))
    }

    /// Local and remote branch names, local first, without duplicates.
    pub fn branches(&self) -> Result<Vec<String>> {
        let root = self.root_path()?;
        Ok(refs::branch_names(&self.backend.references(&root)?))
    }

    pub fn tags(&self) -> Result<Vec<String>> {
        let root = self.root_path()?;
        Ok(refs::tag_names(&self.backend.references(&root)?))
    }

    /// Default branch of the repository.
    ///
    /// Resolution order: the configured remote's `HEAD`, the first
    /// configured candidate that exists, the checked out branch.
    pub fn default_branch(&self) -> Result<String> {
        let root = self.root_path()?;
        self.default_branch_at(&root)
    }

    fn default_branch_at(&self, root: &Path) -> Result<String> {
        let remote = &self.config.remote;
        let remote_head = format!("refs/remotes/{remote}/HEAD");

        if let Some(target) = self.backend.symbolic_target(root, &remote_head)?
            && let Some(branch) = refs::remote_branch(&target, remote)
        {
            return Ok(branch.to_string());
        }

        let branches = refs::branch_names(&self.backend.references(root)?);
        if let Some(candidate) = self
            .config
            .default_branches
            .iter()
            .find(|candidate| branches.contains(candidate))
        {
            tracing::debug!(branch = %candidate, "No remote HEAD, using configured default branch");
            return Ok(candidate.clone());
        }

        match self.backend.head(root)? {
            Head::Branch(branch) => {
                tracing::debug!(%branch, "Falling back to checked out branch as default");
                Ok(branch)
            }
            Head::Detached(_) => Err(Error::NoDefaultBranch {
                path: root.to_path_buf(),
            }),
        }
    }

    /// URL of the configured remote, `None` if it is not set.
    pub fn remote(&self) -> Result<Option<String>> {
        let root = self.root_path()?;
        self.backend
            .config_value(&root, &self.config.remote_url_key())
    }

    pub fn is_git(&self) -> bool {
        true
    }

    /// Whether this checkout mirrors a Subversion repository through git-svn.
    pub fn is_svn(&self) -> bool {
        match self.svn_url() {
            Ok(url) => url.is_some(),
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "Could not read git-svn config");
                false
            }
        }
    }

    fn svn_url(&self) -> Result<Option<String>> {
        let root = self.root_path()?;
        self.backend.config_value(&root, &self.config.svn_url_key())
    }

    /// Subversion view of a git-svn checkout.
    ///
    /// Fails with [`Error::NotGitSvn`] when no git-svn remote is configured.
    pub fn info(&self) -> Result<SvnInfo> {
        let root = self.root_path()?;
        let repository_root = self
            .backend
            .config_value(&root, &self.config.svn_url_key())?
            .ok_or_else(|| Error::NotGitSvn { path: root.clone() })?;

        let branch = match self.backend.head(&root)? {
            Head::Branch(branch) => branch,
            Head::Detached(_) => self.default_branch_at(&root)?,
        };

        let svn_path = self
            .backend
            .config_value(&root, &self.config.svn_fetch_key())?
            .and_then(|fetch| svn_path_for(&fetch, &branch).map(str::to_string))
            .unwrap_or(branch);

        let url = if svn_path.is_empty() {
            repository_root.clone()
        } else {
            format!("{}/{}", repository_root.trim_end_matches('/'), svn_path)
        };

        Ok(SvnInfo {
            path: relative_path(&self.path, &root),
            repository_root,
            url,
        })
    }
}

impl LocalScm for Git {
    fn executable(&self) -> &'static str {
        Self::EXECUTABLE
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn root_path(&self) -> Result<PathBuf> {
        Git::root_path(self)
    }

    fn is_git(&self) -> bool {
        Git::is_git(self)
    }

    fn is_svn(&self) -> bool {
        Git::is_svn(self)
    }
}

/// Subversion path of a git-svn fetch mapping (`trunk:refs/remotes/origin/trunk`)
/// whose tracking ref, minus `refs/remotes/<remote>/`, is `branch`.
fn svn_path_for<'a>(fetch: &'a str, branch: &str) -> Option<&'a str> {
    let (svn_path, tracking) = fetch.split_once(':')?;
    let (_, tracked) = tracking.strip_prefix("refs/remotes/")?.split_once('/')?;
    (tracked == branch).then_some(svn_path.trim_matches('/'))
}

/// `path` relative to `root` with forward slashes, `.` for the root itself.
fn relative_path(path: &Path, root: &Path) -> String {
    let path = dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    match path.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Ok(rel) => rel.to_string_lossy().replace('\\', "/"),
        Err(_) => path.to_string_lossy().into_owned(),
    }
}
