//! CLI argument definitions.
//!
//! The tool takes no arguments that change what it does. Every flag here
//! only affects how progress is presented.

use clap::Parser;

use crate::ui::OutputMode;

/// Installs the Python packages the PDF utility needs.
#[derive(Debug, Parser)]
#[command(name = "pdfutil-setup")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Show command lines and step timings
    #[arg(short, long)]
    pub verbose: bool,

    /// Hide pip output unless a step fails
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Exit without waiting for Enter
    #[arg(long)]
    pub no_pause: bool,
}

impl Cli {
    /// Output mode selected by `--verbose` / `--quiet`.
    pub fn output_mode(&self) -> OutputMode {
        OutputMode::from_flags(self.verbose, self.quiet)
    }
}
