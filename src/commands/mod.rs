//! Command implementations for windcfg.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Each command renders its output to a string first so
//! the rendering can be tested without capturing stdout.

mod check;
mod merge;
mod scan;
mod show;


use crate::cli::Command;
use windcfg::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    let output = match command {
        Command::Check(args) => check::run(&args)?,
        Command::Show(args) => show::run(&args)?,
        Command::Scan(args) => scan::run(&args)?,
        Command::Merge(args) => merge::run(&args)?,
    };
    print!("{}", output);
    Ok(())
}
