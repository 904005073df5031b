//! Command-line interface for go-global-update.

pub mod args;

pub use args::Cli;
