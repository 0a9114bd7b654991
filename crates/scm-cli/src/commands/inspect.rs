//! Single-property commands
//!
//! Text output is one value per line so it can be consumed by scripts;
//! `--json` prints the bare JSON value.

use colored::Colorize;
use scm_local::LocalScm;

use super::print_json;
use crate::cli::Commands;
use crate::context::Context;
use crate::error::Result;

/// Run a single-property command.
pub fn run_inspect(ctx: &Context, command: Commands, json: bool) -> Result<()> {
    match command {
        Commands::Detect => {
            let scm = ctx.detect()?;
            emit_value(scm.executable(), json)
        }
        Commands::Root => {
            let root = ctx.detect()?.root_path()?;
            emit_value(&root.display().to_string(), json)
        }
        Commands::Branch => {
            let branch = ctx.git()?.branch()?;
            if json {
                return print_json(&branch);
            }
            match branch {
                Some(branch) => println!("{branch}"),
                None => println!("{}", "(detached)".dimmed()),
            }
            Ok(())
        }
        Commands::Branches => emit_list(&ctx.git()?.branches()?, json),
        Commands::Tags => emit_list(&ctx.git()?.tags()?, json),
        Commands::DefaultBranch => emit_value(&ctx.git()?.default_branch()?, json),
        Commands::Remote => {
            let remote = ctx.git()?.remote()?;
            if json {
                return print_json(&remote);
            }
            if let Some(remote) = remote {
                println!("{remote}");
            }
            Ok(())
        }
        Commands::Info => {
            let info = ctx.git()?.info()?;
            if json {
                return print_json(&info);
            }
            for (key, value) in info.to_map() {
                println!("{}: {}", key.dimmed(), value);
            }
            Ok(())
        }
        Commands::Status => super::run_status(ctx, json),
    }
}

fn emit_value(value: &str, json: bool) -> Result<()> {
    if json {
        return print_json(value);
    }
    println!("{value}");
    Ok(())
}

fn emit_list(values: &[String], json: bool) -> Result<()> {
    if json {
        return print_json(values);
    }
    for value in values {
        println!("{value}");
    }
    Ok(())
}
