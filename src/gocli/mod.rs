//! Go toolchain command execution.
//!
//! [`GoCmdRunner`] is the only way the rest of the crate talks to the go
//! tool. [`GoCli`] wraps a runner with the handful of typed commands the
//! updater needs.

pub mod mock;
pub mod runner;

pub use mock::{MockGoCmdRunner, MockResponse};
pub use runner::{format_command, CommandResult, GoCmdRunner, RealGoCmdRunner};

use std::path::Path;

use crate::error::{Result, UpdateError};

/// Suffix asking the module proxy for the newest release.
pub const LATEST_SUFFIX: &str = "@latest";

/// Typed go subcommands on top of a [`GoCmdRunner`].
#[derive(Clone, Copy)]
pub struct GoCli<'a> {
    runner: &'a dyn GoCmdRunner,
}

impl<'a> GoCli<'a> {
    /// Wrap a runner.
    pub fn new(runner: &'a dyn GoCmdRunner) -> Self {
        Self { runner }
    }

    /// `go env <name>`.
    pub fn env_var(&self, name: &str) -> Result<String> {
        self.run_checked(&["env", name])
    }

    /// `go version -m <binary>`: build metadata embedded in a binary.
    pub fn module_info(&self, binary_path: &Path) -> Result<String> {
        let path = binary_path.to_string_lossy();
        self.run_checked(&["version", "-m", &path])
    }

    /// `go list -m -f {{.Version}} <module>@latest`.
    pub fn latest_version(&self, module_path: &str) -> Result<String> {
        let module = format!("{}{}", module_path, LATEST_SUFFIX);
        self.run_checked(&["list", "-m", "-f", "{{.Version}}", &module])
    }

    /// `go install [-tags <tags>] <package>@latest`.
    ///
    /// Returns the raw result so callers can inspect the output of a failed
    /// install.
    pub fn install_latest(&self, package_path: &str, build_tags: &[String]) -> Result<CommandResult> {
        let args = install_args(package_path, build_tags);
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        self.runner.run_go_command(&args)
    }

    fn run_checked(&self, args: &[&str]) -> Result<String> {
        let result = self.runner.run_go_command(args)?;
        if result.success {
            Ok(result.output)
        } else {
            Err(UpdateError::CommandFailed {
                command: format_command(self.runner.program(), args),
                code: result.exit_code,
                output: result.output,
            })
        }
    }
}

/// Arguments for reinstalling a package at its latest version with the
/// given build tags, in their original order.
pub fn install_args(package_path: &str, build_tags: &[String]) -> Vec<String> {
    let mut args = vec!["install".to_string()];
    if !build_tags.is_empty() {
        args.push("-tags".to_string());
        args.push(build_tags.join(","));
    }
    args.push(format!("{}{}", package_path, LATEST_SUFFIX));
    args
}
