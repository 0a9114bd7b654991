//! git-svn `info` record

use std::collections::BTreeMap;

use serde::Serialize;

/// Subversion view of a git-svn checkout, keyed like `git svn info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SvnInfo {
    /// Handle path relative to the checkout root (`.` at the root)
    #[serde(rename = "Path")]
    pub path: String,

    #[serde(rename = "Repository Root")]
    pub repository_root: String,

    /// Subversion URL of the checked out branch
    #[serde(rename = "URL")]
    pub url: String,
}

impl SvnInfo {
    pub const PATH: &'static str = "Path";
    pub const REPOSITORY_ROOT: &'static str = "Repository Root";
    pub const URL: &'static str = "URL";

    /// The record as a key/value mapping.
    pub fn to_map(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            (Self::PATH, self.path.clone()),
            (Self::REPOSITORY_ROOT, self.repository_root.clone()),
            (Self::URL, self.url.clone()),
        ])
    }
}
