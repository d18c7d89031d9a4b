//! Subprocess execution and platform detection.

pub mod command;
pub mod mock;
pub mod platform;
pub mod runner;

pub use command::{execute, CommandOptions, CommandResult, Invocation};
pub use mock::MockRunner;
pub use platform::{default_interpreter, is_ci};
pub use runner::{CommandRunner, SystemRunner};
