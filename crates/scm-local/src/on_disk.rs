//! Backends that read real checkouts from disk

use std::path::{Path, PathBuf};

use git2::{ErrorCode, Repository};

use crate::{
    Error, Result,
    backend::{GitBackend, Head, SvnBackend},
};

fn canonicalize(path: &Path) -> Result<PathBuf> {
    dunce::canonicalize(path).map_err(|e| Error::io(path, e))
}

/// Git backend built on `git2`.
///
/// Opens the repository on every call; nothing is cached between queries.
#[derive(Debug, Clone, Copy, Default)]
pub struct Git2Backend;

impl Git2Backend {
    pub fn new() -> Self {
        Self
    }

    fn open(&self, root: &Path) -> Result<Repository> {
        Ok(Repository::open(root)?)
    }
}

impl GitBackend for Git2Backend {
    fn toplevel(&self, path: &Path) -> Result<PathBuf> {
        let path = canonicalize(path)?;

        let repo = match Repository::discover(&path) {
            Ok(repo) => repo,
            Err(e) if e.code() == ErrorCode::NotFound => {
                return Err(Error::not_found(
                    &path,
                    "not a git repository (or any of the parent directories)",
                ));
            }
            Err(e) => return Err(e.into()),
        };

        let workdir = repo
            .workdir()
            .ok_or_else(|| Error::not_found(&path, "bare repository has no working tree"))?;

        tracing::debug!(path = %path.display(), root = %workdir.display(), "Resolved git toplevel");
        canonicalize(workdir)
    }

    fn head(&self, root: &Path) -> Result<Head> {
        let repo = self.open(root)?;
        // Read HEAD itself rather than `repo.head()` so unborn branches resolve
        let head = repo.find_reference("HEAD")?;

        Ok(match head.symbolic_target() {
            Some(target) => Head::Branch(
                target
                    .strip_prefix("refs/heads/")
                    .unwrap_or(target)
                    .to_string(),
            ),
            None => Head::Detached(head.target().map(|oid| oid.to_string())),
        })
    }

    fn references(&self, root: &Path) -> Result<Vec<String>> {
        let repo = self.open(root)?;
        let mut names = Vec::new();

        for reference in repo.references()? {
            let reference = reference?;
            match reference.name() {
                Some(name) => names.push(name.to_string()),
                None => tracing::warn!(
                    root = %root.display(),
                    "Skipping reference with a non UTF-8 name"
                ),
            }
        }

        Ok(names)
    }

    fn symbolic_target(&self, root: &Path, name: &str) -> Result<Option<String>> {
        let repo = self.open(root)?;
        match repo.find_reference(name) {
            Ok(reference) => Ok(reference.symbolic_target().map(str::to_string)),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn config_value(&self, root: &Path, key: &str) -> Result<Option<String>> {
        let repo = self.open(root)?;
        let config = repo.config()?;
        match config.get_string(key) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Subversion backend that looks for `.svn` administrative directories.
///
/// Since Subversion 1.7 only the working copy root carries `.svn`, so the
/// nearest ancestor holding one is the root.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSvnBackend;

impl FsSvnBackend {
    pub fn new() -> Self {
        Self
    }
}

impl SvnBackend for FsSvnBackend {
    fn working_copy_root(&self, path: &Path) -> Result<PathBuf> {
        let path = canonicalize(path)?;

        path.ancestors()
            .find(|dir| dir.join(".svn").is_dir())
            .map(Path::to_path_buf)
            .ok_or_else(|| Error::not_found(&path, "not a subversion working copy"))
    }
}
