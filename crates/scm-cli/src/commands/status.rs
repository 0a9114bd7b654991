//! Status command implementation

use colored::Colorize;
use scm_local::{Git, LocalScm, Scm, SvnInfo};
use serde::Serialize;

use super::print_json;
use crate::context::Context;
use crate::error::Result;

/// Every property of a checkout, as printed by `scm status`.
#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub scm: &'static str,
    pub path: String,
    pub root: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git: Option<GitStatus>,
}

#[derive(Debug, Serialize)]
pub struct GitStatus {
    pub branch: Option<String>,
    pub default_branch: Option<String>,
    pub remote: Option<String>,
    pub branches: Vec<String>,
    pub tags: Vec<String>,
    pub git_svn: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<SvnInfo>,
}

impl GitStatus {
    fn collect(git: &Git) -> scm_local::Result<Self> {
        let git_svn = git.is_svn();
        let default_branch = match git.default_branch() {
            Ok(branch) => Some(branch),
            Err(scm_local::Error::NoDefaultBranch { .. }) => None,
            Err(e) => return Err(e),
        };

        Ok(Self {
            branch: git.branch()?,
            default_branch,
            remote: git.remote()?,
            branches: git.branches()?,
            tags: git.tags()?,
            git_svn,
            info: if git_svn { Some(git.info()?) } else { None },
        })
    }
}

impl StatusReport {
    pub fn collect(ctx: &Context) -> Result<Self> {
        let scm = ctx.detect()?;
        let root = scm.root_path()?;
        tracing::debug!(root = %root.display(), scm = scm.executable(), "Collecting status");

        let git = match &scm {
            Scm::Git(git) => Some(GitStatus::collect(git)?),
            Scm::Svn(_) => None,
        };

        Ok(Self {
            scm: scm.executable(),
            path: ctx.path().display().to_string(),
            root: root.display().to_string(),
            git,
        })
    }
}

/// Run the status command
pub fn run_status(ctx: &Context, json: bool) -> Result<()> {
    let report = StatusReport::collect(ctx)?;
    if json {
        return print_json(&report);
    }

    println!("{}", "Checkout Status".bold());
    println!();
    println!("{}:   {}", "SCM".dimmed(), report.scm.cyan());
    println!("{}:  {}", "Root".dimmed(), report.root);

    let Some(git) = &report.git else {
        return Ok(());
    };

    let branch = match &git.branch {
        Some(branch) => branch.cyan(),
        None => "(detached)".yellow(),
    };
    println!("{}: {}", "Branch".dimmed(), branch);
    if let Some(default_branch) = &git.default_branch {
        println!("{}: {}", "Default".dimmed(), default_branch);
    }
    match &git.remote {
        Some(remote) => println!("{}: {}", "Remote".dimmed(), remote),
        None => println!("{}: {}", "Remote".dimmed(), "None".dimmed()),
    }
    println!();

    println!("{}:", "Branches".bold());
    for name in &git.branches {
        let marker = if git.branch.as_ref() == Some(name) {
            "*".green()
        } else {
            " ".normal()
        };
        println!("  {} {}", marker, name);
    }
    println!();

    println!("{}:", "Tags".bold());
    if git.tags.is_empty() {
        println!("  {}", "None".dimmed());
    } else {
        for tag in &git.tags {
            println!("  {} {}", "+".green(), tag);
        }
    }

    if let Some(info) = &git.info {
        println!();
        println!("{}:", "git-svn".bold());
        for (key, value) in info.to_map() {
            println!("  {}: {}", key.dimmed(), value);
        }
    }

    Ok(())
}
