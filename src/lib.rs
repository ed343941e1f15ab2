//! Interactive front-end for the PyInstaller packaging tool
//!
//! This library provides the pieces of the wizard:
//! - Locating PyInstaller on the host (PATH, interpreter module, prefix scripts)
//! - Validated prompts collecting the packaging choices
//! - Deterministic command line assembly and execution
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use error::{Result, WizardError};
