//! Command line interface for the PyInstaller wizard.
//!
//! A [`Session`] walks through the three steps of a run in order: locate the
//! tool, collect the packaging choices, then build, confirm and run the
//! command.

mod args;
mod output;
mod prompts;

pub use args::{Args, RuntimeConfig};
pub use output::OutputManager;
pub use prompts::{Prompter, YES_NO, has_extension, resolve_path};

use std::io::{self, BufRead, Write};

use crate::bundler::{
    self, PackagingRequest, ProcessProbe, PythonEnvironment, RunOutcome, Runner,
    SOURCE_EXTENSION, SystemProbe, ToolLocator, build_command,
};
use crate::error::Result;

/// Flags worth mentioning next to the extra-arguments prompt.
const ADVANCED_FLAGS_HINT: &str = "--add-data, --hidden-import, --noconfirm, --log-level";

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// The tool could not be located; nothing was asked
    ToolMissing,
    /// The user declined to run the command
    Cancelled,
    /// The command was run
    Finished(RunOutcome),
}

/// One interactive run of the wizard.
pub struct Session<R, W, P = SystemProbe> {
    prompter: Prompter<R, W>,
    locator: ToolLocator<P>,
    runner: Runner,
}

impl<R: BufRead, W: Write, P: ProcessProbe> Session<R, W, P> {
    /// Session using `prompter` for interaction and `runner` for execution.
    pub fn new(prompter: Prompter<R, W>, locator: ToolLocator<P>, runner: Runner) -> Self {
        Self {
            prompter,
            locator,
            runner,
        }
    }

    /// Give back the prompter, for inspecting what was written.
    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }

    /// Run every step in order.
    pub fn run(&mut self) -> Result<SessionEnd> {
        let out = self.prompter.output();
        out.section("PyInstaller packaging wizard")?;
        out.progress(&format!("Looking for {}...", self.locator.tool().executable))?;

        let prefix = match self.locator.locate() {
            Ok(prefix) => prefix,
            Err(bundler::Error::ToolNotFound { tool, hint }) => {
                let out = self.prompter.output();
                out.error(&format!("Could not find {}, make sure it is installed", tool))?;
                out.indent(&format!("Hint: install it with '{}'", hint))?;
                return Ok(SessionEnd::ToolMissing);
            }
        };
        self.prompter.output().verbose(&format!("Using {}", prefix))?;

        let request = self.collect_request()?;
        let built = build_command(&prefix, &request);
        if let Some(warning) = &built.warning {
            self.prompter.output().warn(warning)?;
        }

        let out = self.prompter.output();
        out.println("")?;
        out.rule()?;
        out.println("About to run:")?;
        out.println(&built.command.to_string())?;
        out.rule()?;

        if !self.prompter.confirm("\nRun this command? (y/n): ")? {
            self.prompter.output().println("\nCancelled.")?;
            return Ok(SessionEnd::Cancelled);
        }

        let tool = &self.locator.tool().executable;
        self.prompter.output().progress(&format!("Running {}...", tool))?;
        let outcome = self.runner.run(&built.command);
        self.report(&outcome)?;
        Ok(SessionEnd::Finished(outcome))
    }

    /// Ask for every field of a [`PackagingRequest`], in order.
    pub fn collect_request(&mut self) -> Result<PackagingRequest> {
        let source = self.prompter.file_path(
            "\nPath of the .py file to package: ",
            Some(SOURCE_EXTENSION),
        )?;
        let onefile = self.prompter.confirm("Package as a single file? (y/n): ")?;
        let console = self.prompter.confirm("Show a console window? (y/n): ")?;
        let icon = self
            .prompter
            .icon_path("Icon file path (optional, press Enter to skip): ")?;

        let out = self.prompter.output();
        out.println("\nAdvanced options (space separated, press Enter to skip):")?;
        out.println(&format!("Available options include: {}", ADVANCED_FLAGS_HINT))?;
        let extra_args = self.prompter.free_text("> ")?;

        Ok(PackagingRequest {
            source,
            onefile,
            console,
            icon,
            extra_args,
        })
    }

    fn report(&mut self, outcome: &RunOutcome) -> Result<()> {
        let out = self.prompter.output();
        out.println("")?;
        match outcome {
            RunOutcome::Success { output_dir } => out.success(&format!(
                "Executable generated! Output directory: {}",
                output_dir.display()
            ))?,
            RunOutcome::ToolFailure { code } => {
                out.error(&format!("Packaging failed! Exit code: {}", code))?
            }
            RunOutcome::UnexpectedFailure { category, message } => {
                out.error(&format!("Unexpected error: {} - {}", category, message))?
            }
        }
        Ok(())
    }
}

/// Main CLI entry point
///
/// Runs one session on the real terminal. Every outcome, including a missing
/// tool or a failed build, is reported on stdout rather than as an error.
pub fn run(config: &RuntimeConfig) -> Result<SessionEnd> {
    let working_dir = std::env::current_dir()?;
    let environment = PythonEnvironment::detect(config.python.as_deref());
    let locator = ToolLocator::new(environment);

    let stdin = io::stdin();
    let output = OutputManager::new(io::stdout(), config.verbose);
    let prompter = Prompter::new(stdin.lock(), output, working_dir.clone());

    let mut session = Session::new(prompter, locator, Runner::new(working_dir));
    match session.run() {
        Err(e) if e.is_input_closed() => {
            let out = session.prompter.output();
            out.println("")?;
            out.warn("Input closed, exiting.")?;
            Ok(SessionEnd::Cancelled)
        }
        other => other,
    }
}
