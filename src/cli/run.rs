//! Top-level run: setup, exit code, and the closing pause.

use crate::bootstrap::{Bootstrapper, PAUSE_MESSAGE};
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

/// Run the setup and wait for the user before returning the exit code.
///
/// The pause happens on every path, including a missing interpreter, so a
/// console window opened by double-click stays up long enough to read.
pub fn run(
    bootstrapper: &Bootstrapper,
    runner: &mut dyn CommandRunner,
    ui: &mut dyn UserInterface,
) -> u8 {
    let exit_code = match bootstrapper.run(runner, ui) {
        Ok(report) => {
            tracing::debug!(
                "Setup finished: {} of {} steps succeeded",
                report.outcomes.len() - report.failures().len(),
                report.outcomes.len()
            );
            report.exit_code()
        }
        Err(e) => {
            // The bootstrapper has already explained the failure.
            tracing::debug!("Setup stopped: {}", e);
            e.exit_code()
        }
    };

    if let Err(e) = ui.pause(PAUSE_MESSAGE) {
        tracing::debug!("Pause prompt failed: {}", e);
    }

    exit_code
}
