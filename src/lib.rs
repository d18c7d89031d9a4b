//! pdfutil-setup - installs the Python dependencies of the PDF utility.
//!
//! Checks that a Python interpreter can be invoked, upgrades pip, then
//! installs `pypdf`, `Pillow`, and `msoffcrypto-tool` in that order.
//!
//! # Modules
//!
//! - [`bootstrap`] - Interpreter check, step sequence, and run report
//! - [`cli`] - Command-line argument parsing
//! - [`error`] - Error types and result aliases
//! - [`shell`] - Subprocess execution
//! - [`ui`] - Terminal output and the closing pause
//!
//! # Example
//!
//! ```
//! use pdfutil_setup::bootstrap::setup_steps;
//!
//! let commands: Vec<String> = setup_steps()
//!     .iter()
//!     .map(|step| step.invocation("python3").to_string())
//!     .collect();
//! assert_eq!(commands[0], "python3 -m pip install --upgrade pip");
//! assert_eq!(commands[3], "python3 -m pip install msoffcrypto-tool");
//! ```

pub mod bootstrap;
pub mod cli;
pub mod error;
pub mod shell;
pub mod ui;

pub use error::{Result, SetupError};
