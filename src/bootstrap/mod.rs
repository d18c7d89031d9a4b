//! Python dependency bootstrapping.
//!
//! The flow is a straight line with one early exit:
//!
//! 1. Check the interpreter answers `--version` ([`interpreter`])
//! 2. Upgrade pip, then install each package in [`PACKAGES`] ([`plan`])
//! 3. Report the outcome of every step ([`bootstrapper`])
//!
//! # Example
//!
//! ```
//! use pdfutil_setup::bootstrap::Bootstrapper;
//! use pdfutil_setup::shell::MockRunner;
//! use pdfutil_setup::ui::MockUI;
//!
//! let mut runner = MockRunner::new();
//! let mut ui = MockUI::new();
//!
//! let report = Bootstrapper::new("python3").run(&mut runner, &mut ui).unwrap();
//! assert_eq!(report.outcomes.len(), 4);
//! assert_eq!(runner.calls().len(), 5);
//! ```

pub mod bootstrapper;
pub mod interpreter;
pub mod packages;
pub mod plan;

pub use bootstrapper::{
    BootstrapReport, Bootstrapper, StepOutcome, BANNER, PAUSE_MESSAGE, PYTHON_DOWNLOAD_URL,
};
pub use interpreter::{check_interpreter, parse_version, InterpreterInfo};
pub use packages::{Package, PACKAGES};
pub use plan::{setup_steps, SetupStep};
