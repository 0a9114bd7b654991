//! Error types for scm-local

use std::path::PathBuf;

/// Result type for scm-local operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while inspecting a checkout
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("{path} is not a git-svn checkout")]
    NotGitSvn { path: PathBuf },

    #[error("No git or svn checkout found at {path}")]
    NoRepository { path: PathBuf },

    #[error("Could not determine the default branch of {path}")]
    NoDefaultBranch { path: PathBuf },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// I/O error of kind `NotFound` for a path outside any checkout.
    pub fn not_found(path: impl Into<PathBuf>, message: &str) -> Self {
        Self::io(
            path,
            std::io::Error::new(std::io::ErrorKind::NotFound, message.to_string()),
        )
    }

    /// Whether this is an OS-level "not found" error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
