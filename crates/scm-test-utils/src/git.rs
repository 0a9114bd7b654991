//! Checkout fixtures at two realism levels.
//!
//! Choose the lowest-realism fixture that satisfies your test's needs.

use std::fs;
use std::path::Path;

use git2::{Repository, RepositoryInitOptions, Signature};

/// Name of the branch every fixture repository starts on.
pub const INITIAL_BRANCH: &str = "main";

/// Creates a `.svn` administrative directory **without** a real working copy.
///
/// Realism level: **FAKE**: directory marker only.
///
/// # Panics
/// Panics if the filesystem operations fail.
pub fn fake_svn_checkout(path: &Path) {
    fs::create_dir_all(path.join(".svn"))
        .unwrap_or_else(|e| panic!("fake_svn_checkout: failed to create .svn: {e}"));
    fs::write(path.join(".svn/wc.db"), "")
        .unwrap_or_else(|e| panic!("fake_svn_checkout: failed to write wc.db: {e}"));
}

/// Initialises a real git repository on `main` with one empty commit.
///
/// Realism level: **REAL WITH HISTORY**: valid object store, `main` branch,
/// one commit. Uses `git2` only, so no `git` binary or user config is needed.
///
/// # Panics
/// Panics if any git operation fails.
pub fn real_git_repo_with_commit(path: &Path) -> Repository {
    let mut opts = RepositoryInitOptions::new();
    opts.initial_head(INITIAL_BRANCH);

    let repo = Repository::init_opts(path, &opts).unwrap_or_else(|e| {
        panic!(
            "real_git_repo_with_commit: failed to init repository at {}: {e}",
            path.display()
        )
    });

    commit_empty(&repo, "Initial commit");
    repo
}

/// Commits the current index on HEAD with a fixed test identity.
///
/// # Panics
/// Panics if any git operation fails.
pub fn commit_empty(repo: &Repository, message: &str) -> git2::Oid {
    let sig = Signature::now("Test User", "test@test.com")
        .unwrap_or_else(|e| panic!("commit_empty: failed to build signature: {e}"));
    let tree_id = repo
        .index()
        .and_then(|mut index| index.write_tree())
        .unwrap_or_else(|e| panic!("commit_empty: failed to write tree: {e}"));
    let tree = repo
        .find_tree(tree_id)
        .unwrap_or_else(|e| panic!("commit_empty: failed to find tree: {e}"));

    let parents = match repo.head().and_then(|head| head.peel_to_commit()) {
        Ok(commit) => vec![commit],
        Err(_) => Vec::new(),
    };
    let parent_refs: Vec<&git2::Commit<'_>> = parents.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
        .unwrap_or_else(|e| panic!("commit_empty: failed to commit: {e}"))
}
