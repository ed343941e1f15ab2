//! Crate-level error types.
//!
//! Errors raised while talking to the user or the terminal. Failures of the
//! packaging tool itself are not errors: they are reported as
//! [`RunOutcome`](crate::bundler::RunOutcome) values.

use thiserror::Error;

/// Result type alias for wizard operations
pub type Result<T> = std::result::Result<T, WizardError>;

/// Main error type for all wizard operations
#[derive(Error, Debug)]
pub enum WizardError {
    /// IO errors while reading prompts or writing messages
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Standard input closed while a prompt was waiting for an answer
    #[error("Input closed while waiting for: {prompt}")]
    InputClosed {
        /// Prompt that was left unanswered
        prompt: String,
    },
}

impl WizardError {
    /// Whether this error only means the user stopped answering prompts.
    pub fn is_input_closed(&self) -> bool {
        matches!(self, Self::InputClosed { .. })
    }
}
