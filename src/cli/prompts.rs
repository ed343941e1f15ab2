//! Line-oriented prompts with validation loops.
//!
//! Every prompt keeps asking until the answer is valid, so callers never see
//! an invalid value. The only way out early is end of input.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use path_absolutize::Absolutize;

use super::output::OutputManager;
use crate::bundler::ICON_EXTENSION;
use crate::error::{Result, WizardError};

/// Answers accepted by yes/no questions.
pub const YES_NO: &[&str] = &["y", "n"];

/// Reads answers from `R` and writes prompts and messages to `W`.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: OutputManager<W>,
    working_dir: PathBuf,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Prompter resolving relative paths against `working_dir`.
    pub fn new(input: R, output: OutputManager<W>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            input,
            output,
            working_dir: working_dir.into(),
        }
    }

    /// Output used for prompts and messages.
    pub fn output(&mut self) -> &mut OutputManager<W> {
        &mut self.output
    }

    /// Split back into input and output.
    pub fn into_parts(self) -> (R, OutputManager<W>) {
        (self.input, self.output)
    }

    /// Ask until the answer, trimmed and lower-cased, is one of `allowed`.
    pub fn choice(&mut self, prompt: &str, allowed: &[&str]) -> Result<String> {
        loop {
            let answer = self.read_line(prompt)?.to_lowercase();
            if allowed.contains(&answer.as_str()) {
                return Ok(answer);
            }
            self.output
                .warn(&format!("Invalid input, choose one of: {}", allowed.join(", ")))?;
        }
    }

    /// Yes/no question.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(self.choice(prompt, YES_NO)? == "y")
    }

    /// Ask for an existing file, optionally with a required extension.
    ///
    /// Empty answers are ignored. Returns the absolute path.
    pub fn file_path(&mut self, prompt: &str, extension: Option<&str>) -> Result<PathBuf> {
        loop {
            let answer = self.read_line(prompt)?;
            if answer.is_empty() {
                continue;
            }
            let message = extension
                .map(|ext| format!("Wrong file type, please provide a {} file", ext))
                .unwrap_or_default();
            if let Some(path) = self.check_file(&answer, extension, &message)? {
                return Ok(path);
            }
        }
    }

    /// Ask for an optional `.ico` file; an empty answer means no icon.
    pub fn icon_path(&mut self, prompt: &str) -> Result<Option<PathBuf>> {
        loop {
            let answer = self.read_line(prompt)?;
            if answer.is_empty() {
                return Ok(None);
            }
            let message = format!("The icon must be a {} file", ICON_EXTENSION);
            if let Some(path) = self.check_file(&answer, Some(ICON_EXTENSION), &message)? {
                return Ok(Some(path));
            }
        }
    }

    /// Free text without validation; an empty answer means none.
    pub fn free_text(&mut self, prompt: &str) -> Result<Option<String>> {
        let answer = self.read_line(prompt)?;
        Ok(if answer.is_empty() { None } else { Some(answer) })
    }

    /// Resolve `raw` and validate it, printing why it was rejected.
    fn check_file(
        &mut self,
        raw: &str,
        extension: Option<&str>,
        wrong_type: &str,
    ) -> Result<Option<PathBuf>> {
        let path = resolve_path(raw, &self.working_dir)?;
        if !path.is_file() {
            self.output.warn("File does not exist, please try again")?;
            return Ok(None);
        }
        if let Some(ext) = extension {
            if !has_extension(&path, ext) {
                self.output.warn(wrong_type)?;
                return Ok(None);
            }
        }
        Ok(Some(path))
    }

    /// Print `prompt` and read one trimmed line.
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.output.prompt(prompt)?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(WizardError::InputClosed {
                prompt: prompt.trim().to_string(),
            });
        }
        Ok(line.trim().to_string())
    }
}

/// Expand `~` and make `raw` absolute relative to `working_dir`.
///
/// The result is normalized lexically; symlinks are not resolved.
pub fn resolve_path(raw: &str, working_dir: &Path) -> Result<PathBuf> {
    let expanded = expand_home(raw);
    Ok(expanded.absolutize_from(working_dir)?.into_owned())
}

fn expand_home(raw: &str) -> PathBuf {
    let rest = match raw.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with(['/', '\\']) => rest,
        _ => return PathBuf::from(raw),
    };
    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest.trim_start_matches(['/', '\\'])),
        None => PathBuf::from(raw),
    }
}

/// Case-insensitive suffix check on the whole path.
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.to_string_lossy()
        .to_lowercase()
        .ends_with(&extension.to_lowercase())
}
