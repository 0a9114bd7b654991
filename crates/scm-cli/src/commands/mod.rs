//! Command implementations for scm-cli

pub mod inspect;
pub mod status;

pub use inspect::run_inspect;
pub use status::run_status;

use serde::Serialize;

use crate::error::Result;

/// Print `value` as pretty JSON.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
