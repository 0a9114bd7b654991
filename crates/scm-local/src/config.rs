//! Accessor configuration
//!
//! Loaded from TOML or JSON, picked by file extension.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Names the accessors use when reading repository config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScmConfig {
    /// Remote whose URL `remote()` reports and whose `HEAD` names the
    /// default branch.
    pub remote: String,

    /// Branch names tried, in order, when the remote has no `HEAD`.
    pub default_branches: Vec<String>,

    /// git-svn remote id (`svn-remote.<id>.url`).
    pub svn_remote: String,
}

impl Default for ScmConfig {
    fn default() -> Self {
        Self {
            remote: "origin".into(),
            default_branches: vec!["main".into(), "master".into()],
            svn_remote: "svn".into(),
        }
    }
}

impl ScmConfig {
    /// Load configuration from a file.
    ///
    /// Format is detected from file extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");

        let config = match extension.to_lowercase().as_str() {
            "toml" => toml::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_path_buf(),
                format: "TOML".into(),
                message: e.to_string(),
            })?,
            "json" => serde_json::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_path_buf(),
                format: "JSON".into(),
                message: e.to_string(),
            })?,
            _ => {
                return Err(Error::UnsupportedFormat {
                    extension: extension.to_string(),
                });
            }
        };

        tracing::debug!(path = %path.display(), ?config, "Loaded scm config");
        Ok(config)
    }

    /// Config key holding the remote URL.
    pub fn remote_url_key(&self) -> String {
        format!("remote.{}.url", self.remote)
    }

    /// Config key holding the git-svn repository URL.
    pub fn svn_url_key(&self) -> String {
        format!("svn-remote.{}.url", self.svn_remote)
    }

    /// Config key holding the git-svn fetch mapping.
    pub fn svn_fetch_key(&self) -> String {
        format!("svn-remote.{}.fetch", self.svn_remote)
    }
}
