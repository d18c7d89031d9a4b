//! Mock command runner for testing.
//!
//! `MockRunner` implements the `CommandRunner` trait and records every
//! invocation instead of spawning it. Exit codes and output can be
//! configured per command line, programs can be marked as missing, and
//! single command lines can fail to spawn or end without an exit code.
//!
//! # Example
//!
//! ```
//! use pdfutil_setup::shell::{CommandOptions, CommandRunner, Invocation, MockRunner};
//!
//! let mut runner = MockRunner::new();
//! runner.set_exit_code("pip install pypdf", 1);
//!
//! let inv = Invocation::new("pip").args(["install", "pypdf"]);
//! let result = runner.run(&inv, &CommandOptions::captured()).unwrap();
//!
//! assert!(!result.success);
//! assert_eq!(runner.command_lines(), vec!["pip install pypdf".to_string()]);
//! ```

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use crate::error::{Result, SetupError};

use super::command::{CommandOptions, CommandResult, Invocation};
use super::runner::CommandRunner;

/// Mock runner implementation for testing.
///
/// Commands succeed with empty output unless configured otherwise.
#[derive(Debug, Default, Clone)]
pub struct MockRunner {
    calls: Vec<(Invocation, CommandOptions)>,
    exit_codes: HashMap<String, i32>,
    stdout: HashMap<String, String>,
    stderr: HashMap<String, String>,
    missing: HashSet<String>,
    spawn_failures: HashSet<String>,
    killed: HashSet<String>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the given command line exit with `code`.
    pub fn set_exit_code(&mut self, command_line: &str, code: i32) {
        self.exit_codes.insert(command_line.to_string(), code);
    }

    /// Set the stdout produced by the given command line.
    pub fn set_stdout(&mut self, command_line: &str, output: &str) {
        self.stdout
            .insert(command_line.to_string(), output.to_string());
    }

    /// Set the stderr produced by the given command line.
    pub fn set_stderr(&mut self, command_line: &str, output: &str) {
        self.stderr
            .insert(command_line.to_string(), output.to_string());
    }

    /// Make every invocation of `program` fail to spawn.
    pub fn set_missing(&mut self, program: &str) {
        self.missing.insert(program.to_string());
    }

    /// Make the given command line fail to spawn.
    pub fn set_spawn_failure(&mut self, command_line: &str) {
        self.spawn_failures.insert(command_line.to_string());
    }

    /// Make the given command line end without an exit code, as when it is
    /// killed by a signal.
    pub fn set_killed(&mut self, command_line: &str) {
        self.killed.insert(command_line.to_string());
    }

    /// Every invocation received, in order.
    pub fn calls(&self) -> Vec<&Invocation> {
        self.calls.iter().map(|(inv, _)| inv).collect()
    }

    /// Options passed with each invocation, in order.
    pub fn options(&self) -> Vec<CommandOptions> {
        self.calls.iter().map(|(_, opts)| *opts).collect()
    }

    /// Every invocation received, rendered as a command line.
    pub fn command_lines(&self) -> Vec<String> {
        self.calls.iter().map(|(inv, _)| inv.to_string()).collect()
    }
}

impl CommandRunner for MockRunner {
    fn run(&mut self, invocation: &Invocation, options: &CommandOptions) -> Result<CommandResult> {
        self.calls.push((invocation.clone(), *options));

        let line = invocation.to_string();
        if self.missing.contains(&invocation.program) || self.spawn_failures.contains(&line) {
            return Err(SetupError::CommandFailed {
                command: line,
                code: None,
            });
        }

        let stdout = self.stdout.get(&line).cloned().unwrap_or_default();
        let stderr = self.stderr.get(&line).cloned().unwrap_or_default();

        if self.killed.contains(&line) {
            return Ok(CommandResult::failure(None, stdout, stderr, Duration::ZERO));
        }

        match self.exit_codes.get(&line) {
            Some(&code) if code != 0 => Ok(CommandResult::failure(
                Some(code),
                stdout,
                stderr,
                Duration::ZERO,
            )),
            _ => Ok(CommandResult::success(stdout, stderr, Duration::ZERO)),
        }
    }
}
