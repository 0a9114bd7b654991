//! scm CLI
//!
//! Prints what a local Git or Subversion checkout looks like.

mod cli;
mod commands;
mod context;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::Cli;
use context::Context;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = Context::new(&cli.path, cli.config.as_deref())?;

    match cli.command {
        Some(command) => commands::run_inspect(&ctx, command, cli.json),
        None => commands::run_status(&ctx, cli.json),
    }
}

fn init_tracing(verbose: bool) {
    let builder = FmtSubscriber::builder()
        .with_writer(std::io::stderr)
        .with_target(true);

    let result = if verbose {
        tracing::subscriber::set_global_default(builder.with_max_level(Level::DEBUG).finish())
    } else {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing::subscriber::set_global_default(builder.with_env_filter(filter).finish())
    };

    if let Err(e) = result {
        eprintln!("{}: failed to set tracing subscriber: {}", "warning".yellow(), e);
    }
    tracing::debug!("Verbose mode enabled");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Commands;

    #[test]
    fn test_cli_error_user() {
        let error = crate::error::CliError::user("test error");
        assert_eq!(format!("{}", error), "test error");
    }

    #[test]
    fn test_cli_error_wraps_scm_error() {
        let error = crate::error::CliError::from(scm_local::Error::NoRepository {
            path: "/nowhere".into(),
        });
        assert!(matches!(error, crate::error::CliError::Scm(_)));
        assert!(error.to_string().contains("/nowhere"));
    }

    #[test]
    fn test_context_without_config_uses_defaults() {
        let ctx = Context::new(std::path::Path::new("."), None).unwrap();
        assert_eq!(ctx.path(), std::path::Path::new("."));
    }

    #[test]
    fn test_status_is_a_command() {
        let cli = Cli::try_parse_from(["scm", "status"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Status));
    }
}
