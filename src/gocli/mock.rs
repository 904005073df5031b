//! Scripted go command runner for testing.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use super::runner::{CommandResult, GoCmdRunner};
use crate::error::Result;

/// A canned response for one exact argument list.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub args: Vec<String>,
    pub output: String,
    pub success: bool,
}

/// Go command runner that answers from a list of scripted responses.
///
/// Every invocation is recorded, so tests can assert which commands were
/// (or were not) issued. Arguments with no scripted response produce a
/// failed result naming the arguments.
#[derive(Debug, Default)]
pub struct MockGoCmdRunner {
    responses: Vec<MockResponse>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl MockGoCmdRunner {
    /// Create a runner with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful response.
    pub fn respond(mut self, args: &[&str], output: &str) -> Self {
        self.responses.push(MockResponse {
            args: to_owned_args(args),
            output: output.to_string(),
            success: true,
        });
        self
    }

    /// Script a failed response.
    pub fn fail(mut self, args: &[&str], output: &str) -> Self {
        self.responses.push(MockResponse {
            args: to_owned_args(args),
            output: output.to_string(),
            success: false,
        });
        self
    }

    /// Every argument list this runner has been called with, in call order.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether the runner was called with exactly these arguments.
    pub fn was_called_with(&self, args: &[&str]) -> bool {
        self.calls().iter().any(|call| call == args)
    }

    /// Calls whose first argument is the given go subcommand.
    pub fn calls_to(&self, subcommand: &str) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter(|call| call.first().map(String::as_str) == Some(subcommand))
            .collect()
    }
}

impl GoCmdRunner for MockGoCmdRunner {
    fn run_go_command(&self, args: &[&str]) -> Result<CommandResult> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(to_owned_args(args));

        let response = self.responses.iter().find(|r| r.args == args);
        Ok(match response {
            Some(r) if r.success => CommandResult::success(r.output.clone(), Duration::ZERO),
            Some(r) => CommandResult::failure(Some(1), r.output.clone(), Duration::ZERO),
            None => CommandResult::failure(
                Some(1),
                format!("could not match args: {:?}", args),
                Duration::ZERO,
            ),
        })
    }
}

fn to_owned_args(args: &[&str]) -> Vec<String> {
    args.iter().map(|a| a.to_string()).collect()
}
