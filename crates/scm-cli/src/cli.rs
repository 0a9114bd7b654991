//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Inspect the local Git or Subversion checkout enclosing a path
#[derive(Parser, Debug)]
#[command(name = "scm")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path inside the checkout to inspect
    #[arg(short = 'C', long, global = true, default_value = ".")]
    pub path: PathBuf,

    /// Accessor config file (.toml or .json)
    #[arg(long, global = true, env = "SCM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output as JSON for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Print which SCM manages the path (git or svn)
    Detect,

    /// Print the checkout root
    Root,

    /// Print the checked out branch
    Branch,

    /// List local and remote branches
    Branches,

    /// List tags
    Tags,

    /// Print the default branch
    DefaultBranch,

    /// Print the remote URL
    Remote,

    /// Print the Subversion info of a git-svn checkout
    Info,

    /// Show every property at once
    Status,
}
