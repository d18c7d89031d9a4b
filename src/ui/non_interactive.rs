//! Non-interactive UI for CI/headless environments.

use crate::error::Result;

use super::theme::SetupTheme;
use super::{OutputMode, ProgressSpinner, SpinnerHandle, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Writes plain lines to stdout and never waits for input. Spinners are
/// replaced by a single line when the step finishes, since animated output
/// is noise in CI logs.
pub struct NonInteractiveUI {
    mode: OutputMode,
    theme: SetupTheme,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: SetupTheme::detect(),
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    fn warning(&mut self, msg: &str) {
        println!("{}", self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        // Errors go to stdout too, next to the step banners they relate to.
        println!("{}", self.theme.format_error(msg));
    }

    fn show_header(&mut self, title: &str) {
        println!("\n{}\n", self.theme.format_header(title));
    }

    fn show_step(&mut self, current: usize, total: usize, title: &str) {
        println!("\n{}", self.theme.format_step(current, total, title));
    }

    fn show_error_block(&mut self, command: &str, output: &str) {
        println!("    $ {}", command);
        for line in output.lines() {
            println!("    {}", line);
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(LineSpinner {
                theme: self.theme.clone(),
            })
        } else {
            tracing::trace!("Spinner suppressed: {}", message);
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn pause(&mut self, message: &str) -> Result<()> {
        tracing::debug!("Skipping pause in non-interactive mode: {}", message);
        Ok(())
    }
}

/// Spinner stand-in that prints only the final status line.
struct LineSpinner {
    theme: SetupTheme,
}

impl SpinnerHandle for LineSpinner {
    fn finish_success(&mut self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    fn finish_error(&mut self, msg: &str) {
        println!("{}", self.theme.format_error(msg));
    }
}
