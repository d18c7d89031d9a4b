//! pdfutil-setup CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use pdfutil_setup::bootstrap::Bootstrapper;
use pdfutil_setup::cli::{run, Cli};
use pdfutil_setup::shell::{is_ci, SystemRunner};
use pdfutil_setup::ui::create_ui;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("pdfutil_setup=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pdfutil_setup=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("pdfutil-setup starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let interactive = !cli.no_pause && !is_ci();
    let mut ui = create_ui(interactive, cli.output_mode());

    let mut runner = SystemRunner::new();
    let exit_code = run(&Bootstrapper::default(), &mut runner, ui.as_mut());

    ExitCode::from(exit_code)
}
