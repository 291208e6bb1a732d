//! CLI argument parsing for windcfg.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use windcfg::config::{DEFAULT_DOCUMENT, LoadMode, LoadOptions};

/// windcfg: loader and validator for utility-CSS build configuration.
///
/// The document declares which source files are scanned for class names,
/// which variant states are generated, which plugins are loaded, and which
/// theme tokens are extended.
#[derive(Parser, Debug)]
#[command(name = "windcfg")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log debug output to stderr.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for windcfg.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load and validate a document.
    ///
    /// Prints warnings and exits non-zero on any error.
    Check(DocumentArgs),

    /// Print the normalized record.
    Show(ShowArgs),

    /// Scan a source tree with the document's content globs.
    ///
    /// Prints candidate class names, or matched files with `--files`.
    Scan(ScanArgs),

    /// Load two documents independently and print their explicit merge.
    Merge(MergeArgs),
}

/// Which document to load and how.
#[derive(Args, Debug)]
pub struct DocumentArgs {
    /// Path to the configuration document.
    #[arg(short, long, env = "WINDCFG_CONFIG", default_value = DEFAULT_DOCUMENT)]
    pub config: PathBuf,

    /// How to treat unknown keys (strict or lenient).
    #[arg(long, env = "WINDCFG_MODE", default_value = "strict")]
    pub mode: LoadMode,

    /// Shorthand for `--mode lenient`.
    #[arg(long)]
    pub lenient: bool,
}

impl DocumentArgs {
    pub fn load_options(&self) -> LoadOptions {
        if self.lenient {
            LoadOptions::lenient()
        } else {
            LoadOptions { mode: self.mode }
        }
    }
}

/// Arguments for the `show` command.
#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub document: DocumentArgs,

    /// Print JSON instead of YAML.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `scan` command.
#[derive(Args, Debug)]
pub struct ScanArgs {
    #[command(flatten)]
    pub document: DocumentArgs,

    /// Source root the content globs are relative to.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// List matched files instead of candidate class names.
    #[arg(long)]
    pub files: bool,
}

/// Arguments for the `merge` command.
#[derive(Args, Debug)]
pub struct MergeArgs {
    /// First document.
    pub first: PathBuf,

    /// Second document; its scalar settings win.
    pub second: PathBuf,

    /// How to treat unknown keys (strict or lenient).
    #[arg(long, env = "WINDCFG_MODE", default_value = "strict")]
    pub mode: LoadMode,

    /// Print JSON instead of YAML.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Log filter used when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}
