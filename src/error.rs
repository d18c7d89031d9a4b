//! Error types for setup operations.
//!
//! This module defines [`SetupError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Only [`SetupError::InterpreterNotFound`] stops a run; [`crate::cli::run`] maps it to exit code 1
//! - Install step failures become step outcomes and are never propagated

use thiserror::Error;

/// Core error type for setup operations.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The interpreter could not be invoked, or its version check failed.
    #[error("Python interpreter '{interpreter}' not found: {message}")]
    InterpreterNotFound {
        interpreter: String,
        message: String,
    },

    /// A command could not be spawned or waited on.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SetupError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

/// Result type alias for setup operations.
pub type Result<T> = std::result::Result<T, SetupError>;
