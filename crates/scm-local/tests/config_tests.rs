use std::fs;

use rstest::rstest;
use scm_local::{Error, ScmConfig};
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = ScmConfig::default();
    assert_eq!(config.remote, "origin");
    assert_eq!(config.default_branches, vec!["main", "master"]);
    assert_eq!(config.remote_url_key(), "remote.origin.url");
    assert_eq!(config.svn_url_key(), "svn-remote.svn.url");
}

#[rstest]
#[case("scm.toml", "remote = \"upstream\"\n")]
#[case("scm.json", r#"{"remote": "upstream"}"#)]
fn test_load_partial_config(#[case] name: &str, #[case] content: &str) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(name);
    fs::write(&path, content).unwrap();

    let config = ScmConfig::load(&path).unwrap();
    assert_eq!(config.remote, "upstream");
    assert_eq!(config.default_branches, ScmConfig::default().default_branches);
}

#[test]
fn test_load_full_toml() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("scm.toml");
    fs::write(
        &path,
        "remote = \"upstream\"\ndefault_branches = [\"trunk\"]\nsvn_remote = \"webkit\"\n",
    )
    .unwrap();

    let config = ScmConfig::load(&path).unwrap();
    assert_eq!(config.default_branches, vec!["trunk"]);
    assert_eq!(config.svn_url_key(), "svn-remote.webkit.url");
    assert_eq!(config.svn_fetch_key(), "svn-remote.webkit.fetch");
}

#[rstest]
#[case("scm.toml", "remote = [", "TOML")]
#[case("scm.json", r#"{"remote":"#, "JSON")]
fn test_load_invalid_config(#[case] name: &str, #[case] content: &str, #[case] expected: &str) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(name);
    fs::write(&path, content).unwrap();

    let err = ScmConfig::load(&path).unwrap_err();
    assert!(
        matches!(err, Error::ConfigParse { ref format, .. } if format == expected),
        "unexpected error: {err}"
    );
}

#[test]
fn test_load_unsupported_extension() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("scm.ini");
    fs::write(&path, "remote=upstream").unwrap();

    let err = ScmConfig::load(&path).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat { ref extension } if extension == "ini"));
}

#[test]
fn test_load_missing_file() {
    let temp = TempDir::new().unwrap();
    let err = ScmConfig::load(&temp.path().join("absent.toml")).unwrap_err();
    assert!(err.is_not_found());
}
