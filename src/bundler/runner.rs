//! Packaging tool execution.
//!
//! Runs the assembled command line once and turns whatever happens into a
//! [`RunOutcome`]. Nothing escapes this module as an error.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use path_absolutize::Absolutize;

use super::command::CommandLine;

/// Directory the tool writes its artifacts to, relative to the working directory.
pub const DIST_DIR: &str = "dist";

/// How a packaging run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The tool exited successfully
    Success {
        /// Absolute path of the output directory
        output_dir: PathBuf,
    },
    /// The tool ran but exited with a non-zero status
    ToolFailure {
        /// Exit code, `-1` when the process ended without one
        code: i32,
    },
    /// The tool could not be run at all
    UnexpectedFailure {
        /// Error category, such as `NotFound` or `PermissionDenied`
        category: String,
        /// Error message
        message: String,
    },
}

impl RunOutcome {
    /// True for [`RunOutcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Runs command lines inside a working directory.
#[derive(Debug, Clone)]
pub struct Runner {
    working_dir: PathBuf,
}

impl Runner {
    /// Runner whose child processes start in `working_dir`.
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }

    /// Working directory handed to the child process.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Absolute path of the tool's conventional output directory.
    pub fn output_dir(&self) -> PathBuf {
        let dist = self.working_dir.join(DIST_DIR);
        let absolute = dist.absolutize().map(|path| path.into_owned());
        absolute.unwrap_or(dist)
    }

    /// Run `command` to completion with inherited standard streams.
    pub fn run(&self, command: &CommandLine) -> RunOutcome {
        match self.execute(command) {
            Ok(status) if status.success() => RunOutcome::Success {
                output_dir: self.output_dir(),
            },
            Ok(status) => RunOutcome::ToolFailure {
                code: status.code().unwrap_or(-1),
            },
            Err(e) => {
                log::debug!("{} could not be run: {}", command.program(), e);
                RunOutcome::UnexpectedFailure {
                    category: format!("{:?}", e.kind()),
                    message: e.to_string(),
                }
            }
        }
    }

    fn execute(&self, command: &CommandLine) -> io::Result<ExitStatus> {
        log::info!("Running {} in {}", command, self.working_dir.display());

        let status = Command::new(command.program())
            .args(command.args())
            .current_dir(&self.working_dir)
            .status()?;

        log::debug!("{} exited with {:?}", command.program(), status.code());
        Ok(status)
    }
}
