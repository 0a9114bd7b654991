//! Git accessor behaviour against the in-memory mock repository

use std::collections::BTreeMap;
use std::path::Path;

use pretty_assertions::assert_eq;
use scm_local::mocks::{DETACHED_COMMIT, MockGit, MockSvn};
use scm_local::{
    Error, Git, GitBackend, Head, LocalScm, Scm, ScmConfig, ScmDetector, SvnInfo,
};

const PATH: &str = "/mock/repository";

fn git(repo: &MockGit) -> Git {
    Git::with_backend(PATH, repo.backend())
}

#[test]
fn test_detection() {
    let repo = MockGit::new(PATH);
    let svn = MockSvn::new();

    let detect = ScmDetector::new(repo.backend(), svn.backend())
        .detect(PATH)
        .unwrap();
    assert_eq!(detect.executable(), Git::EXECUTABLE);
    assert!(detect.as_git().is_some());
}

#[test]
fn test_root() {
    let repo = MockGit::new(PATH);
    assert_eq!(git(&repo).root_path().unwrap(), Path::new(PATH));

    let parent = Path::new(PATH).parent().unwrap();
    let err = Git::with_backend(parent, repo.backend())
        .root_path()
        .unwrap_err();
    assert!(matches!(err, Error::Io { .. }), "unexpected error: {err}");
    assert!(err.is_not_found());
}

#[test]
fn test_root_from_subdirectory() {
    let repo = MockGit::new(PATH);
    let git = Git::with_backend("/mock/repository/Source/WTF", repo.backend());
    assert_eq!(git.root_path().unwrap(), Path::new(PATH));
}

#[test]
fn test_branch() {
    let repo = MockGit::new(PATH);
    assert_eq!(git(&repo).branch().unwrap().as_deref(), Some("main"));

    let repo = MockGit::new(PATH).detached(true);
    assert_eq!(git(&repo).branch().unwrap(), None);
}

#[test]
fn test_detached_head_reports_commit() {
    let repo = MockGit::new(PATH).detached(true);
    assert_eq!(
        repo.head(Path::new(PATH)).unwrap(),
        Head::Detached(Some(DETACHED_COMMIT.to_string()))
    );
}

#[test]
fn test_remote() {
    let repo = MockGit::new(PATH);
    assert_eq!(git(&repo).remote().unwrap().as_deref(), Some(repo.remote()));
    assert_eq!(repo.remote(), "git@webkit.org:/mock/repository");
}

#[test]
fn test_branches() {
    let repo = MockGit::new(PATH).branches(["branch-1", "branch-2", "remotes/origin/branch-3"]);
    assert_eq!(
        git(&repo).branches().unwrap(),
        vec!["main", "branch-1", "branch-2", "branch-3"],
    );
}

#[test]
fn test_tags() {
    let repo = MockGit::new(PATH).tags(["tag-1", "tag-2"]);
    assert_eq!(git(&repo).tags().unwrap(), vec!["tag-1", "tag-2"]);
}

#[test]
fn test_default_branch() {
    let repo = MockGit::new(PATH);
    assert_eq!(git(&repo).default_branch().unwrap(), "main");
}

#[test]
fn test_default_branch_when_detached() {
    let repo = MockGit::new(PATH).detached(true);
    assert_eq!(git(&repo).default_branch().unwrap(), "main");
}

#[test]
fn test_scm_type() {
    let repo = MockGit::new(PATH);
    assert!(git(&repo).is_git());
    assert!(!git(&repo).is_svn());

    let repo = MockGit::new(PATH).git_svn(true);
    assert!(git(&repo).is_git());
    assert!(git(&repo).is_svn());
}

#[test]
fn test_is_svn_outside_repository_is_false() {
    let repo = MockGit::new(PATH).git_svn(true);
    assert!(!Git::with_backend("/elsewhere", repo.backend()).is_svn());
}

#[test]
fn test_info() {
    let repo = MockGit::new(PATH);
    let err = git(&repo).info().unwrap_err();
    assert!(matches!(err, Error::NotGitSvn { .. }), "unexpected error: {err}");

    let repo = MockGit::new(PATH).git_svn(true);
    let info = git(&repo).info().unwrap();
    assert_eq!(
        info.to_map(),
        BTreeMap::from([
            (SvnInfo::PATH, ".".to_string()),
            (
                SvnInfo::REPOSITORY_ROOT,
                "git@webkit.org:/mock/repository".to_string()
            ),
            (
                SvnInfo::URL,
                "git@webkit.org:/mock/repository/main".to_string()
            ),
        ]),
    );
}

#[test]
fn test_info_uses_fetch_mapping() {
    let repo = MockGit::new(PATH)
        .git_svn(true)
        .with_remote("https://svn.webkit.org/repository/webkit")
        .svn_fetch("trunk:refs/remotes/origin/main");

    let info = Git::with_backend("/mock/repository/Tools", repo.backend())
        .info()
        .unwrap();
    assert_eq!(info.path, "Tools");
    assert_eq!(info.repository_root, "https://svn.webkit.org/repository/webkit");
    assert_eq!(info.url, "https://svn.webkit.org/repository/webkit/trunk");
}

#[test]
fn test_info_serializes_with_svn_keys() {
    let repo = MockGit::new(PATH).git_svn(true);
    let json = serde_json::to_value(git(&repo).info().unwrap()).unwrap();
    assert_eq!(json["Path"], ".");
    assert_eq!(json["Repository Root"], "git@webkit.org:/mock/repository");
    assert_eq!(json["URL"], "git@webkit.org:/mock/repository/main");
}

#[test]
fn test_scm_enum_delegates() {
    let repo = MockGit::new(PATH).git_svn(true);
    let scm = Scm::Git(git(&repo));
    assert!(scm.is_git());
    assert!(scm.is_svn());
    assert_eq!(scm.path(), Path::new(PATH));
    assert_eq!(scm.root_path().unwrap(), Path::new(PATH));
}

#[test]
fn test_configured_remote_name() {
    let repo = MockGit::new(PATH)
        .remote_name("upstream")
        .branches(["remotes/upstream/branch-3"]);
    let config = ScmConfig {
        remote: "upstream".into(),
        ..ScmConfig::default()
    };
    let git = git(&repo).with_config(config);

    assert_eq!(git.remote().unwrap().as_deref(), Some(repo.remote()));
    assert_eq!(git.default_branch().unwrap(), "main");
    assert_eq!(git.branches().unwrap(), vec!["main", "branch-3"]);

    // The default config still looks for `origin`.
    assert_eq!(Git::with_backend(PATH, repo.backend()).remote().unwrap(), None);
}

#[test]
fn test_configured_svn_remote_id() {
    let repo = MockGit::new(PATH)
        .git_svn(true)
        .svn_remote("webkit")
        .svn_fetch("trunk:refs/remotes/origin/main");
    let config = ScmConfig {
        svn_remote: "webkit".into(),
        ..ScmConfig::default()
    };
    let git = git(&repo).with_config(config);

    assert!(git.is_svn());
    let info = git.info().unwrap();
    assert_eq!(info.repository_root, "git@webkit.org:/mock/repository");
    assert_eq!(info.url, "git@webkit.org:/mock/repository/trunk");

    assert!(!Git::with_backend(PATH, repo.backend()).is_svn());
}
