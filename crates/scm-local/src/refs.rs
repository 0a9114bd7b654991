//! Reference name handling

const HEADS: &str = "refs/heads/";
const REMOTES: &str = "refs/remotes/";
const TAGS: &str = "refs/tags/";

/// Branch names from a list of full reference names.
///
/// Local branches come first in the given order, followed by remote
/// branches whose short name was not already seen. The remote prefix
/// (`origin/`) is stripped and symbolic `<remote>/HEAD` entries are skipped.
pub fn branch_names<S: AsRef<str>>(references: &[S]) -> Vec<String> {
    let mut local = Vec::new();
    let mut remote = Vec::new();

    for name in references.iter().map(AsRef::as_ref) {
        if let Some(branch) = name.strip_prefix(HEADS) {
            local.push(branch);
        } else if let Some(branch) = name.strip_prefix(REMOTES).and_then(strip_remote)
            && branch != "HEAD"
        {
            remote.push(branch);
        }
    }

    let mut names: Vec<String> = Vec::with_capacity(local.len() + remote.len());
    for branch in local.into_iter().chain(remote) {
        if !names.iter().any(|seen| seen == branch) {
            names.push(branch.to_string());
        }
    }
    names
}

/// Tag names from a list of full reference names, in the given order.
pub fn tag_names<S: AsRef<str>>(references: &[S]) -> Vec<String> {
    references
        .iter()
        .filter_map(|name| name.as_ref().strip_prefix(TAGS))
        .map(str::to_string)
        .collect()
}

/// Short branch name of a remote-tracking ref such as
/// `refs/remotes/origin/main`, optionally restricted to one remote.
pub fn remote_branch<'a>(reference: &'a str, remote: &str) -> Option<&'a str> {
    reference
        .strip_prefix(REMOTES)?
        .strip_prefix(remote)?
        .strip_prefix('/')
}

/// Drop the `<remote>/` component, keeping slashes in the branch name.
fn strip_remote(name: &str) -> Option<&str> {
    name.split_once('/').map(|(_, branch)| branch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_before_remote() {
        let refs = [
            "refs/remotes/origin/zeta",
            "refs/heads/main",
            "refs/heads/feat/login",
        ];
        assert_eq!(branch_names(&refs), vec!["main", "feat/login", "zeta"]);
    }

    #[test]
    fn test_remote_duplicates_and_head_skipped() {
        let refs = [
            "refs/heads/main",
            "refs/remotes/origin/HEAD",
            "refs/remotes/origin/main",
            "refs/remotes/upstream/main",
        ];
        assert_eq!(branch_names(&refs), vec!["main"]);
    }

    #[test]
    fn test_tags_keep_order() {
        let refs = ["refs/tags/v2", "refs/heads/main", "refs/tags/v1"];
        assert_eq!(tag_names(&refs), vec!["v2", "v1"]);
    }

    #[test]
    fn test_remote_branch() {
        assert_eq!(remote_branch("refs/remotes/origin/main", "origin"), Some("main"));
        assert_eq!(remote_branch("refs/remotes/originals/main", "origin"), None);
        assert_eq!(remote_branch("refs/heads/main", "origin"), None);
    }
}
