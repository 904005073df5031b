//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{GOBIN_ENV, GO_BINARY_ENV};

/// Update globally installed Go binaries.
#[derive(Debug, Parser)]
#[command(name = "go-global-update")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Binaries to update (default: every binary in GOBIN)
    #[arg(value_name = "BINARY")]
    pub binaries: Vec<String>,

    /// Check which binaries would be updated without updating them
    #[arg(long)]
    pub dry_run: bool,

    /// Show package paths and the output of go install
    #[arg(short, long)]
    pub verbose: bool,

    /// Reinstall binaries even when they are up to date
    #[arg(short, long)]
    pub force_reinstall: bool,

    /// Force colored output even when stdout is not a terminal
    #[arg(long, conflicts_with = "no_color")]
    pub colors: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Print the binary inventory as JSON (implies --dry-run)
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Directory with installed binaries (overrides `go env GOBIN`)
    #[arg(long, value_name = "DIR", env = GOBIN_ENV)]
    pub gobin: Option<PathBuf>,

    /// Go executable to run
    #[arg(long = "go", value_name = "PATH", env = GO_BINARY_ENV, default_value = "go")]
    pub go_binary: PathBuf,
}
