//! Go command execution.

use crate::error::{Result, UpdateError};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing a go command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Combined standard output and standard error, whitespace-trimmed.
    pub output: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(output: impl Into<String>, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            output: output.into(),
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, output: impl Into<String>, duration: Duration) -> Self {
        Self {
            exit_code,
            output: output.into(),
            duration,
            success: false,
        }
    }
}

/// Capability to run `go <args>`.
///
/// Implementations must return the combined output even when the command
/// fails; known-problem diagnosis depends on it. `Err` is reserved for
/// commands that could not be started at all.
pub trait GoCmdRunner: Send + Sync {
    /// Run the go tool with the given arguments.
    fn run_go_command(&self, args: &[&str]) -> Result<CommandResult>;

    /// The executable shown in error messages.
    fn program(&self) -> &Path {
        Path::new("go")
    }
}

/// Runs the real go executable as a child process.
#[derive(Debug, Clone)]
pub struct RealGoCmdRunner {
    go_binary: PathBuf,
    cwd: Option<PathBuf>,
}

impl RealGoCmdRunner {
    /// Create a runner for the given go executable.
    pub fn new(go_binary: impl Into<PathBuf>) -> Self {
        Self {
            go_binary: go_binary.into(),
            cwd: None,
        }
    }

    /// Run every command from `dir` instead of the current directory.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }
}

impl GoCmdRunner for RealGoCmdRunner {
    fn run_go_command(&self, args: &[&str]) -> Result<CommandResult> {
        let start = Instant::now();

        let mut cmd = Command::new(&self.go_binary);
        cmd.args(args);
        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        let output = cmd.output().map_err(|source| UpdateError::CommandSpawn {
            command: format_command(self.program(), args),
            source,
        })?;

        let duration = start.elapsed();

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !combined.is_empty() && !stderr.is_empty() && !combined.ends_with('\n') {
            combined.push('\n');
        }
        combined.push_str(&stderr);
        let combined = combined.trim().to_string();

        tracing::debug!(
            args = ?args,
            exit_code = ?output.status.code(),
            duration_ms = duration.as_millis() as u64,
            output = %combined,
            "go command output"
        );

        if output.status.success() {
            Ok(CommandResult::success(combined, duration))
        } else {
            Ok(CommandResult::failure(
                output.status.code(),
                combined,
                duration,
            ))
        }
    }

    fn program(&self) -> &Path {
        &self.go_binary
    }
}

/// Render a command line for error messages.
pub fn format_command(program: &Path, args: &[&str]) -> String {
    let mut rendered = program.display().to_string();
    for arg in args {
        rendered.push(' ');
        rendered.push_str(arg);
    }
    rendered
}
