//! In-memory repositories for exercising the accessors without a checkout
//!
//! A mock is a plain value: build it, hand [`MockGit::backend`] to an
//! accessor, and drop it when done.
//!
//! ```
//! use scm_local::{Git, mocks::MockGit};
//!
//! let repo = MockGit::new("/mock/repository").tags(["tag-1"]);
//! let git = Git::with_backend("/mock/repository", repo.backend());
//! assert_eq!(git.branch().unwrap().as_deref(), Some("main"));
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::{
    Error, Result,
    backend::{GitBackend, Head, SvnBackend},
};

/// Commit id reported for a detached HEAD.
pub const DETACHED_COMMIT: &str = "d8bce26fa65c6fc8f39c17927abb77f69fab82fc";

fn contains(root: &Path, path: &Path) -> bool {
    path.ancestors().any(|ancestor| ancestor == root)
}

/// A simulated git repository rooted at a fixed path.
///
/// Defaults: `main` checked out, remote `origin` at
/// `git@webkit.org:<path>` whose `HEAD` points at `main`, git-svn remote
/// id `svn`.
#[derive(Debug, Clone)]
pub struct MockGit {
    path: PathBuf,
    default_branch: String,
    branches: Vec<String>,
    tags: Vec<String>,
    detached: bool,
    remote: String,
    remote_name: String,
    svn_remote: String,
    git_svn: bool,
    svn_fetch: Option<String>,
}

impl MockGit {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let remote = format!("git@webkit.org:{}", path.to_string_lossy());
        Self {
            path,
            default_branch: "main".into(),
            branches: Vec::new(),
            tags: Vec::new(),
            detached: false,
            remote,
            remote_name: "origin".into(),
            svn_remote: "svn".into(),
            git_svn: false,
            svn_fetch: None,
        }
    }

    /// Extra branches. Names starting with `remotes/` become remote-tracking
    /// refs, everything else a local branch.
    pub fn branches<I, S>(mut self, branches: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.branches = branches.into_iter().map(Into::into).collect();
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn detached(mut self, detached: bool) -> Self {
        self.detached = detached;
        self
    }

    /// Configure the checkout as a git-svn mirror of the remote URL.
    pub fn git_svn(mut self, git_svn: bool) -> Self {
        self.git_svn = git_svn;
        self
    }

    pub fn with_remote(mut self, url: impl Into<String>) -> Self {
        self.remote = url.into();
        self
    }

    /// Name of the remote the URL and remote-tracking refs live under.
    pub fn remote_name(mut self, name: impl Into<String>) -> Self {
        self.remote_name = name.into();
        self
    }

    /// Id of the git-svn remote, the `<id>` in `svn-remote.<id>.url`.
    pub fn svn_remote(mut self, id: impl Into<String>) -> Self {
        self.svn_remote = id.into();
        self
    }

    /// git-svn fetch mapping, e.g. `trunk:refs/remotes/origin/main`.
    pub fn svn_fetch(mut self, mapping: impl Into<String>) -> Self {
        self.svn_fetch = Some(mapping.into());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// URL of the configured remote.
    pub fn remote(&self) -> &str {
        &self.remote
    }

    pub fn backend(&self) -> Arc<dyn GitBackend> {
        Arc::new(self.clone())
    }

    fn check_root(&self, root: &Path) -> Result<()> {
        if root == self.path {
            Ok(())
        } else {
            Err(Error::not_found(root, "not the root of the mock repository"))
        }
    }
}

impl GitBackend for MockGit {
    fn toplevel(&self, path: &Path) -> Result<PathBuf> {
        if contains(&self.path, path) {
            Ok(self.path.clone())
        } else {
            Err(Error::not_found(
                path,
                "not a git repository (or any of the parent directories)",
            ))
        }
    }

    fn head(&self, root: &Path) -> Result<Head> {
        self.check_root(root)?;
        Ok(if self.detached {
            Head::Detached(Some(DETACHED_COMMIT.to_string()))
        } else {
            Head::Branch(self.default_branch.clone())
        })
    }

    fn references(&self, root: &Path) -> Result<Vec<String>> {
        self.check_root(root)?;

        let mut references = vec![format!("refs/heads/{}", self.default_branch)];
        references.extend(self.branches.iter().map(|branch| {
            match branch.strip_prefix("remotes/") {
                Some(remote) => format!("refs/remotes/{remote}"),
                None => format!("refs/heads/{branch}"),
            }
        }));
        references.push(format!("refs/remotes/{}/HEAD", self.remote_name));
        references.push(format!(
            "refs/remotes/{}/{}",
            self.remote_name, self.default_branch
        ));
        references.extend(self.tags.iter().map(|tag| format!("refs/tags/{tag}")));

        Ok(references)
    }

    fn symbolic_target(&self, root: &Path, name: &str) -> Result<Option<String>> {
        self.check_root(root)?;
        Ok(match name {
            "HEAD" if !self.detached => Some(format!("refs/heads/{}", self.default_branch)),
            _ if name == format!("refs/remotes/{}/HEAD", self.remote_name) => Some(format!(
                "refs/remotes/{}/{}",
                self.remote_name, self.default_branch
            )),
            _ => None,
        })
    }

    fn config_value(&self, root: &Path, key: &str) -> Result<Option<String>> {
        self.check_root(root)?;
        if key == format!("remote.{}.url", self.remote_name) {
            return Ok(Some(self.remote.clone()));
        }
        if !self.git_svn {
            return Ok(None);
        }
        Ok(match key.strip_prefix(&format!("svn-remote.{}.", self.svn_remote)) {
            Some("url") => Some(self.remote.clone()),
            Some("fetch") => self.svn_fetch.clone(),
            _ => None,
        })
    }
}

/// A simulated Subversion installation with zero or more working copies.
#[derive(Debug, Clone, Default)]
pub struct MockSvn {
    checkouts: Vec<PathBuf>,
}

impl MockSvn {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a working copy rooted at `path`.
    pub fn checkout(mut self, path: impl Into<PathBuf>) -> Self {
        self.checkouts.push(path.into());
        self
    }

    pub fn backend(&self) -> Arc<dyn SvnBackend> {
        Arc::new(self.clone())
    }
}

impl SvnBackend for MockSvn {
    fn working_copy_root(&self, path: &Path) -> Result<PathBuf> {
        self.checkouts
            .iter()
            .filter(|root| contains(root, path))
            .max_by_key(|root| root.components().count())
            .cloned()
            .ok_or_else(|| Error::not_found(path, "not a subversion working copy"))
    }
}
