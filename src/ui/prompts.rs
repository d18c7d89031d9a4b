//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::error::{Result, SetupError};

/// Convert dialoguer errors to SetupError.
fn map_dialoguer_err(e: dialoguer::Error) -> SetupError {
    SetupError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Block until the user presses Enter.
///
/// Any text typed before Enter is discarded.
pub fn wait_for_enter(message: &str, term: &Term) -> Result<()> {
    let _ = Input::<String>::with_theme(&prompt_theme())
        .with_prompt(message)
        .allow_empty(true)
        .report(false)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;
    Ok(())
}
