//! Errors for tool discovery and argument parsing.

use thiserror::Error;

/// Result type alias for bundler operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while locating the packaging tool
#[derive(Error, Debug)]
pub enum Error {
    /// Every probe failed; the tool is not installed where we can reach it
    #[error("{tool} not found. Install it with: {hint}")]
    ToolNotFound {
        /// Executable name of the tool
        tool: String,
        /// Installation hint shown to the user
        hint: String,
    },
}

/// Why the extra-arguments field could not be split into words
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitError {
    /// A single or double quote was never closed
    #[error("no closing quotation")]
    UnterminatedQuote,

    /// The text ended right after a backslash
    #[error("no escaped character")]
    TrailingEscape,
}
