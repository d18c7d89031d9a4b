//! The seam between the bootstrapper and real processes.

use crate::error::Result;

use super::command::{execute, CommandOptions, CommandResult, Invocation};

/// Runs invocations on behalf of the bootstrapper.
///
/// This trait allows replacing subprocesses with a [`MockRunner`](super::MockRunner) in tests.
pub trait CommandRunner {
    /// Run an invocation to completion.
    fn run(&mut self, invocation: &Invocation, options: &CommandOptions) -> Result<CommandResult>;
}

/// Runs invocations as real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&mut self, invocation: &Invocation, options: &CommandOptions) -> Result<CommandResult> {
        tracing::debug!("Executing: {}", invocation);
        let result = execute(invocation, options)?;
        tracing::debug!(
            "'{}' exited with {:?} after {:?}",
            invocation,
            result.exit_code,
            result.duration
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn system_runner_runs_real_processes() {
        let mut runner = SystemRunner::new();
        let result = runner
            .run(
                &Invocation::new("echo").arg("ok"),
                &CommandOptions::captured(),
            )
            .unwrap();
        assert!(result.success);
        assert!(result.stdout.contains("ok"));
    }

    #[test]
    fn system_runner_reports_spawn_failures() {
        let mut runner = SystemRunner::new();
        let result = runner.run(
            &Invocation::new("definitely-not-a-real-program-4f1c"),
            &CommandOptions::captured(),
        );
        assert!(result.is_err());
    }
}
