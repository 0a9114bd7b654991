//! [`TestRepo`] builder for git checkout scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use git2::{Oid, Repository};
use tempfile::TempDir;

use crate::git::real_git_repo_with_commit;

/// A git repository with one commit on `main` in a temporary directory.
///
/// # Example
///
/// ```rust,no_run
/// use scm_test_utils::TestRepo;
///
/// let repo = TestRepo::new();
/// repo.add_branch("feature");
/// repo.add_tag("v1.0");
/// repo.add_remote("origin", "https://example.com/project.git");
/// ```
pub struct TestRepo {
    // Dropped before the directory is removed
    repo: Repository,
    temp_dir: TempDir,
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRepo {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let repo = real_git_repo_with_commit(temp_dir.path());
        Self { repo, temp_dir }
    }

    /// Return the root path of the working tree.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn repository(&self) -> &Repository {
        &self.repo
    }

    fn head_commit(&self) -> Oid {
        self.repo
            .head()
            .and_then(|head| head.peel_to_commit())
            .map(|commit| commit.id())
            .expect("TestRepo: HEAD does not resolve to a commit")
    }

    /// Create a local branch at the current commit.
    pub fn add_branch(&self, name: &str) {
        let commit = self.repo.find_commit(self.head_commit()).unwrap();
        self.repo
            .branch(name, &commit, false)
            .unwrap_or_else(|e| panic!("TestRepo::add_branch({name}): {e}"));
    }

    /// Create a lightweight tag at the current commit.
    pub fn add_tag(&self, name: &str) {
        let object = self.repo.find_object(self.head_commit(), None).unwrap();
        self.repo
            .tag_lightweight(name, &object, false)
            .unwrap_or_else(|e| panic!("TestRepo::add_tag({name}): {e}"));
    }

    pub fn add_remote(&self, name: &str, url: &str) {
        self.repo
            .remote(name, url)
            .unwrap_or_else(|e| panic!("TestRepo::add_remote({name}): {e}"));
    }

    /// Create `refs/remotes/<remote>/<branch>` at the current commit, as a
    /// fetch would.
    pub fn add_remote_branch(&self, remote: &str, branch: &str) {
        let name = format!("refs/remotes/{remote}/{branch}");
        self.repo
            .reference(&name, self.head_commit(), true, "test: remote branch")
            .unwrap_or_else(|e| panic!("TestRepo::add_remote_branch({name}): {e}"));
    }

    /// Point `refs/remotes/<remote>/HEAD` at `<remote>/<branch>`.
    pub fn set_remote_head(&self, remote: &str, branch: &str) {
        self.add_remote_branch(remote, branch);
        self.repo
            .reference_symbolic(
                &format!("refs/remotes/{remote}/HEAD"),
                &format!("refs/remotes/{remote}/{branch}"),
                true,
                "test: remote head",
            )
            .unwrap_or_else(|e| panic!("TestRepo::set_remote_head({remote}): {e}"));
    }

    pub fn checkout_branch(&self, name: &str) {
        self.repo
            .set_head(&format!("refs/heads/{name}"))
            .unwrap_or_else(|e| panic!("TestRepo::checkout_branch({name}): {e}"));
    }

    /// Detach HEAD at the current commit.
    pub fn detach_head(&self) {
        self.repo
            .set_head_detached(self.head_commit())
            .unwrap_or_else(|e| panic!("TestRepo::detach_head: {e}"));
    }

    /// Write the `svn-remote.svn.*` keys `git svn init` would set.
    pub fn configure_git_svn(&self, url: &str, fetch: Option<&str>) {
        let mut config = self.repo.config().unwrap();
        config.set_str("svn-remote.svn.url", url).unwrap();
        if let Some(fetch) = fetch {
            config.set_str("svn-remote.svn.fetch", fetch).unwrap();
        }
    }

    /// Create a subdirectory (relative to root) and return its path.
    pub fn mkdir(&self, path: &str) -> PathBuf {
        let full_path = self.root().join(path);
        fs::create_dir_all(&full_path).unwrap();
        full_path
    }
}
