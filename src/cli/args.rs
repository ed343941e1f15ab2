//! Command line argument parsing.
//!
//! The wizard is driven by prompts; these flags only tune tool discovery and
//! diagnostics. Running without any flag is the normal way to use it.

use clap::Parser;
use std::path::PathBuf;

/// Interactive PyInstaller front-end
#[derive(Parser, Debug, Default)]
#[command(
    name = "pyinstaller-wizard",
    version,
    about = "Interactive PyInstaller front-end",
    long_about = "Locates PyInstaller, asks for the script to package and the packaging options,
shows the resulting command and runs it after confirmation.

Artifacts are written by PyInstaller to ./dist."
)]
pub struct Args {
    /// Python interpreter used to look for PyInstaller
    ///
    /// Defaults to the first of python3 and python found on PATH.
    #[arg(long, value_name = "PATH")]
    pub python: Option<PathBuf>,

    /// Log every discovery probe to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    /// Interpreter override for the locator
    pub python: Option<PathBuf>,
    /// Debug logging and verbose messages
    pub verbose: bool,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            python: args.python.clone(),
            verbose: args.verbose,
        }
    }
}

impl RuntimeConfig {
    /// Default log filter for this configuration.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "error" }
    }
}
