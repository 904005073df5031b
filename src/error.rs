//! Error types for go-global-update operations.
//!
//! This module defines [`UpdateError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Per-binary failures (module info, latest version) are wrapped with the
//!   binary or module they concern and stored in that binary's result slot
//! - Directory and configuration failures abort the whole run
//! - Reinstall failures are counted and reported once as [`UpdateError::InstallFailed`]

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for go-global-update operations.
#[derive(Debug, Error)]
pub enum UpdateError {
    /// The go executable could not be started at all.
    #[error("Could not run '{command}': {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// A go command ran but exited unsuccessfully.
    #[error("Command failed {}: {command}\n{output}", exit_status(.code))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        output: String,
    },

    /// `go version -m` could not be run for a binary.
    #[error("could not retrieve version information about binary {}", path.display())]
    ModuleInfo {
        path: PathBuf,
        #[source]
        source: Box<UpdateError>,
    },

    /// `go version -m` output did not contain a `path` line.
    #[error("could not parse module information for binary {}", path.display())]
    UnparseableModuleInfo { path: PathBuf },

    /// The module proxy could not tell the latest version of a module.
    #[error("could not get latest version of {module}")]
    LatestVersion {
        module: String,
        #[source]
        source: Box<UpdateError>,
    },

    /// Wraps any failure that happened while introspecting one binary.
    #[error("could not introspect binary {binary}")]
    Introspection {
        binary: String,
        #[source]
        source: Box<UpdateError>,
    },

    /// The install directory could not be listed.
    #[error("could not list GOBIN ({}) entries", path.display())]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Neither GOBIN nor GOPATH is reported by `go env`.
    #[error("GOBIN and GOPATH are not defined in 'go env' command")]
    GobinUndefined,

    /// One or more reinstalls failed.
    #[error("could not install {count} package(s)")]
    InstallFailed { count: usize },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl UpdateError {
    /// Render the error followed by every error in its source chain.
    pub fn chain_message(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            // Some variants already print their source inline.
            let cause_message = cause.to_string();
            if !message.ends_with(&cause_message) {
                message.push_str(": ");
                message.push_str(&cause_message);
            }
            source = cause.source();
        }
        message
    }
}

fn exit_status(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("with exit code {code}"),
        None => "after being killed by a signal".to_string(),
    }
}

/// Result type alias for go-global-update operations.
pub type Result<T> = std::result::Result<T, UpdateError>;
