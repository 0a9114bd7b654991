//! Read-only inspection of local Git and Subversion checkouts
//!
//! [`Git`] answers questions about a git checkout (root, branch, branches,
//! tags, default branch, remote, git-svn info). [`Scm::from_path`] detects
//! which SCM manages a path. Repository access goes through the
//! [`GitBackend`] / [`SvnBackend`] traits, with on-disk implementations in
//! [`on_disk`] and in-memory ones in [`mocks`].

pub mod backend;
pub mod config;
pub mod error;
pub mod git;
pub mod info;
pub mod mocks;
pub mod on_disk;
pub mod refs;
pub mod scm;
pub mod svn;

pub use backend::{GitBackend, Head, SvnBackend};
pub use config::ScmConfig;
pub use error::{Error, Result};
pub use git::Git;
pub use info::SvnInfo;
pub use scm::{LocalScm, Scm, ScmDetector};
pub use svn::Svn;
