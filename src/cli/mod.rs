//! Command-line interface.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`run`](mod@run) - Runs the setup and the closing pause, returning the exit code

pub mod args;
pub mod run;

pub use args::Cli;
pub use run::run;
