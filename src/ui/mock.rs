//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use pdfutil_setup::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//!
//! // Use ui in code under test...
//! ui.message("Installing packages");
//! ui.success("Done!");
//!
//! // Assert on captured interactions
//! assert!(ui.has_message("Installing"));
//! assert!(ui.successes().contains(&"Done!".to_string()));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Result;

use super::{OutputMode, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    steps: Vec<(usize, usize, String)>,
    error_blocks: Vec<(String, String)>,
    spinners: Vec<Rc<RefCell<MockSpinner>>>,
    pauses: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all step banners as (current, total, title).
    pub fn steps(&self) -> &[(usize, usize, String)] {
        &self.steps
    }

    /// Get all error blocks as (command, output).
    pub fn error_blocks(&self) -> &[(String, String)] {
        &self.error_blocks
    }

    /// Get a snapshot of every spinner that was started.
    pub fn spinners(&self) -> Vec<MockSpinner> {
        self.spinners.iter().map(|s| s.borrow().clone()).collect()
    }

    /// Get the messages of every pause that was shown.
    pub fn pauses(&self) -> &[String] {
        &self.pauses
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_step(&mut self, current: usize, total: usize, title: &str) {
        self.steps.push((current, total, title.to_string()));
    }

    fn show_error_block(&mut self, command: &str, output: &str) {
        self.error_blocks
            .push((command.to_string(), output.to_string()));
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        let spinner = Rc::new(RefCell::new(MockSpinner::new(message)));
        self.spinners.push(Rc::clone(&spinner));
        Box::new(SharedSpinner(spinner))
    }

    fn pause(&mut self, message: &str) -> Result<()> {
        self.pauses.push(message.to_string());
        Ok(())
    }
}

/// Mock spinner that records its message and final status.
#[derive(Debug, Clone, Default)]
pub struct MockSpinner {
    message: String,
    finish_message: Option<String>,
    status: Option<SpinnerStatus>,
}

/// Status of a mock spinner when finished.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinnerStatus {
    /// Finished successfully.
    Success,
    /// Finished with error.
    Error,
}

impl MockSpinner {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            ..Default::default()
        }
    }

    /// The message the spinner was started with.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The message the spinner finished with.
    pub fn finish_message(&self) -> Option<&str> {
        self.finish_message.as_deref()
    }

    /// How the spinner finished, if it did.
    pub fn status(&self) -> Option<SpinnerStatus> {
        self.status
    }
}

/// Spinner handle that writes through to a spinner the `MockUI` still owns.
struct SharedSpinner(Rc<RefCell<MockSpinner>>);

impl SpinnerHandle for SharedSpinner {
    fn finish_success(&mut self, msg: &str) {
        let mut spinner = self.0.borrow_mut();
        spinner.finish_message = Some(msg.to_string());
        spinner.status = Some(SpinnerStatus::Success);
    }

    fn finish_error(&mut self, msg: &str) {
        let mut spinner = self.0.borrow_mut();
        spinner.finish_message = Some(msg.to_string());
        spinner.status = Some(SpinnerStatus::Error);
    }
}
