//! Sequential dependency installation.

use std::time::Duration;

use crate::error::Result;
use crate::shell::{default_interpreter, CommandOptions, CommandRunner};
use crate::ui::{format_duration, UserInterface};

use super::interpreter::{check_interpreter, InterpreterInfo};
use super::plan::{setup_steps, SetupStep};

/// Banner shown at the start of a run.
pub const BANNER: &str = "PDF Utility Setup";

/// Prompt shown before the process exits in interactive sessions.
pub const PAUSE_MESSAGE: &str = "Press Enter to exit";

/// Where users are sent when the interpreter is missing.
pub const PYTHON_DOWNLOAD_URL: &str = "https://www.python.org/downloads/";

/// Lines of captured output shown when a quiet-mode step fails.
const OUTPUT_TAIL_LINES: usize = 10;

/// What happened when a step ran.
#[derive(Debug, Clone)]
pub struct StepOutcome {
    /// The step that ran.
    pub step: SetupStep,
    /// Command line as executed.
    pub command: String,
    /// Exit code (None if the process could not be spawned or was killed).
    pub exit_code: Option<i32>,
    /// Whether the command exited with 0.
    pub success: bool,
    /// Wall time spent on the step.
    pub duration: Duration,
}

/// Record of a completed run.
#[derive(Debug, Clone)]
pub struct BootstrapReport {
    /// The interpreter that passed the version check.
    pub interpreter: InterpreterInfo,
    /// One outcome per step, in execution order.
    pub outcomes: Vec<StepOutcome>,
}

impl BootstrapReport {
    /// Steps whose command did not exit with 0.
    pub fn failures(&self) -> Vec<&StepOutcome> {
        self.outcomes.iter().filter(|o| !o.success).collect()
    }

    /// Check if every step succeeded.
    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(|o| o.success)
    }

    /// Process exit code for a run that got past the interpreter check.
    ///
    /// Always 0: install failures are reported, never escalated.
    pub fn exit_code(&self) -> u8 {
        0
    }
}

/// Checks for the interpreter, then runs every setup step in order.
#[derive(Debug, Clone)]
pub struct Bootstrapper {
    interpreter: String,
}

impl Default for Bootstrapper {
    fn default() -> Self {
        Self::new(default_interpreter())
    }
}

impl Bootstrapper {
    /// Create a bootstrapper that runs pip through `interpreter`.
    pub fn new(interpreter: impl Into<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }

    /// The interpreter program name.
    pub fn interpreter(&self) -> &str {
        &self.interpreter
    }

    /// Run the whole setup.
    ///
    /// Returns an error only when the interpreter check fails, in which case
    /// no step is attempted. Once the check passes every step runs,
    /// regardless of how earlier steps exited.
    pub fn run(
        &self,
        runner: &mut dyn CommandRunner,
        ui: &mut dyn UserInterface,
    ) -> Result<BootstrapReport> {
        ui.show_header(BANNER);
        ui.message("Checking for Python...");

        let interpreter = match check_interpreter(&self.interpreter, runner) {
            Ok(info) => info,
            Err(e) => {
                tracing::debug!("Interpreter check failed: {}", e);
                ui.error("Python is not installed or is not on PATH.");
                ui.message(&format!(
                    "Install Python from {} (tick \"Add python.exe to PATH\" on Windows), then run this setup again.",
                    PYTHON_DOWNLOAD_URL
                ));
                if ui.output_mode().shows_details() {
                    ui.message(&format!("  {}", e));
                }
                return Err(e);
            }
        };
        ui.success(&format!("Found {}", interpreter.describe()));

        let steps = setup_steps();
        let total = steps.len();
        let mut outcomes = Vec::with_capacity(total);

        for (index, step) in steps.into_iter().enumerate() {
            ui.show_step(index + 1, total, &step.title());
            outcomes.push(self.run_step(step, runner, ui));
        }

        let report = BootstrapReport {
            interpreter,
            outcomes,
        };

        ui.success("Installation complete!");
        report_failures(&report, ui);

        Ok(report)
    }

    fn run_step(
        &self,
        step: SetupStep,
        runner: &mut dyn CommandRunner,
        ui: &mut dyn UserInterface,
    ) -> StepOutcome {
        let invocation = step.invocation(&self.interpreter);
        let command = invocation.to_string();
        let mode = ui.output_mode();

        if mode.shows_details() {
            ui.message(&format!("  $ {}", command));
        }

        let options = if mode.streams_command_output() {
            CommandOptions::inherited()
        } else {
            CommandOptions::captured()
        };

        let mut spinner = mode
            .shows_spinners()
            .then(|| ui.start_spinner(&step.title()));

        let mut spawn_error = None;
        let (exit_code, success, duration, output) = match runner.run(&invocation, &options) {
            Ok(result) => {
                let output = if result.stderr.trim().is_empty() {
                    result.stdout
                } else {
                    result.stderr
                };
                (result.exit_code, result.success, result.duration, output)
            }
            Err(e) => {
                spawn_error = Some(e.to_string());
                (None, false, Duration::ZERO, String::new())
            }
        };

        if let Some(spinner) = spinner.as_mut() {
            if success {
                spinner.finish_success(&format!("{} done", step.label()));
            } else {
                spinner.finish_error(&format!("{} failed", step.label()));
            }
        }

        if success {
            tracing::debug!("Step '{}' succeeded", step.label());
        } else {
            tracing::warn!("Step '{}' failed with exit code {:?}", step.label(), exit_code);
            if let Some(reason) = spawn_error {
                // The process never started, so nothing reached the console.
                ui.show_error_block(&command, &reason);
            } else if options.capture_stderr {
                ui.show_error_block(&command, &tail(&output, OUTPUT_TAIL_LINES));
            }
        }

        if mode.shows_details() {
            ui.message(&format!("  finished in {}", format_duration(duration)));
        }

        StepOutcome {
            step,
            command,
            exit_code,
            success,
            duration,
        }
    }
}

fn report_failures(report: &BootstrapReport, ui: &mut dyn UserInterface) {
    let failures = report.failures();
    if failures.is_empty() {
        return;
    }

    ui.warning(&format!(
        "{} of {} steps reported an error. Re-run manually to retry:",
        failures.len(),
        report.outcomes.len()
    ));
    for failure in failures {
        let code = failure
            .exit_code
            .map(|c| c.to_string())
            .unwrap_or_else(|| "none".to_string());
        ui.message(&format!("    {}  (exit code {})", failure.command, code));
    }
}

/// Last `n` lines of `output`.
fn tail(output: &str, n: usize) -> String {
    let lines: Vec<&str> = output.trim_end().lines().collect();
    let start = lines.len().saturating_sub(n);
    lines[start..].join("\n")
}
