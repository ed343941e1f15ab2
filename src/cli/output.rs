//! Styled terminal output.

use std::io::{self, Write};

use console::style;

/// Width of the rule lines framing sections.
const RULE_WIDTH: usize = 50;

/// Writes user-facing messages with consistent styling.
#[derive(Debug)]
pub struct OutputManager<W> {
    writer: W,
    verbose: bool,
}

impl<W: Write> OutputManager<W> {
    /// Output manager writing to `writer`.
    pub fn new(writer: W, verbose: bool) -> Self {
        Self { writer, verbose }
    }

    /// Consume the manager and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Print a plain line.
    pub fn println(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", message)
    }

    /// Print a message only in verbose mode.
    pub fn verbose(&mut self, message: &str) -> io::Result<()> {
        if self.verbose {
            writeln!(self.writer, "{}", style(message).dim())?;
        }
        Ok(())
    }

    /// Print a rule line.
    pub fn rule(&mut self) -> io::Result<()> {
        writeln!(self.writer, "{}", "=".repeat(RULE_WIDTH))
    }

    /// Print a section title framed by rule lines.
    pub fn section(&mut self, title: &str) -> io::Result<()> {
        self.rule()?;
        writeln!(self.writer, "{}", style(title).cyan().bold())?;
        self.rule()
    }

    /// Print a progress message.
    pub fn progress(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{} {}", style("→").cyan(), message)
    }

    /// Print a success message.
    pub fn success(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{} {}", style("✓").green().bold(), style(message).green())
    }

    /// Print a warning.
    pub fn warn(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{} {}", style("⚠").yellow().bold(), style(message).yellow())
    }

    /// Print an error.
    pub fn error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{} {}", style("✗").red().bold(), style(message).red())
    }

    /// Print indented text.
    pub fn indent(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "    {}", message)
    }

    /// Write a prompt without a trailing newline and flush it.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<()> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()
    }
}
