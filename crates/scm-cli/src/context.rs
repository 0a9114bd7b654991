//! Accessor construction from command-line arguments

use std::path::{Path, PathBuf};

use scm_local::{Git, Scm, ScmConfig, ScmDetector};

use crate::error::{CliError, Result};

/// Path and config every command works from.
#[derive(Debug, Clone)]
pub struct Context {
    path: PathBuf,
    config: ScmConfig,
}

impl Context {
    /// Build a context, loading `config` when given.
    pub fn new(path: &Path, config: Option<&Path>) -> Result<Self> {
        let config = match config {
            Some(file) => ScmConfig::load(file)?,
            None => ScmConfig::default(),
        };
        Ok(Self {
            path: path.to_path_buf(),
            config,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Detect the checkout enclosing the path.
    pub fn detect(&self) -> Result<Scm> {
        Ok(ScmDetector::default()
            .with_config(self.config.clone())
            .detect(&self.path)?)
    }

    /// Git accessor for the path, failing for non-git checkouts.
    pub fn git(&self) -> Result<Git> {
        match self.detect()? {
            Scm::Git(git) => Ok(git),
            Scm::Svn(_) => Err(CliError::user(format!(
                "{} is a Subversion working copy, not a git checkout",
                self.path.display()
            ))),
        }
    }
}
