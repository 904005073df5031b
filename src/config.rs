//! Runtime configuration: which go executable to run and where binaries live.

use std::path::PathBuf;

use crate::error::{Result, UpdateError};
use crate::gocli::{GoCli, GoCmdRunner};

/// Environment variable overriding the install directory.
pub const GOBIN_ENV: &str = "GO_GLOBAL_UPDATE_GOBIN";

/// Environment variable overriding the go executable.
pub const GO_BINARY_ENV: &str = "GO_GLOBAL_UPDATE_GO";

/// Resolved configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Install directory holding the binaries.
    pub gobin: PathBuf,
    /// The go executable.
    pub go_binary: PathBuf,
}

impl Config {
    /// Resolve the install directory, asking `go env` unless overridden.
    pub fn resolve(
        gobin_override: Option<PathBuf>,
        go_binary: PathBuf,
        runner: &dyn GoCmdRunner,
    ) -> Result<Self> {
        let gobin = match gobin_override {
            Some(dir) => dir,
            None => resolve_gobin(&GoCli::new(runner))?,
        };
        tracing::debug!(gobin = %gobin.display(), go = %go_binary.display(), "resolved configuration");

        Ok(Self { gobin, go_binary })
    }
}

/// `go env GOBIN`, falling back to `bin` under the first GOPATH entry.
pub fn resolve_gobin(cli: &GoCli<'_>) -> Result<PathBuf> {
    let gobin = cli.env_var("GOBIN")?;
    if !gobin.is_empty() {
        return Ok(PathBuf::from(gobin));
    }

    let gopath = cli.env_var("GOPATH")?;
    first_gopath_entry(&gopath)
        .map(|dir| dir.join("bin"))
        .ok_or(UpdateError::GobinUndefined)
}

/// GOPATH may list several workspaces; `go install` uses the first one.
fn first_gopath_entry(gopath: &str) -> Option<PathBuf> {
    std::env::split_paths(gopath).find(|p| !p.as_os_str().is_empty())
}
