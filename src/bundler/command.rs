//! Command line assembly.
//!
//! Turns an [`InvocationPrefix`] and a [`PackagingRequest`] into the exact
//! argument list handed to the packaging tool. Construction has no side
//! effects and the same inputs always produce the same arguments.

use std::fmt;

use super::error::SplitError;
use super::request::PackagingRequest;
use super::tool_detection::InvocationPrefix;

/// Remove build caches and temporary files before building.
pub const CLEAN_FLAG: &str = "--clean";

/// Bundle everything into one executable.
pub const ONEFILE_FLAG: &str = "--onefile";

/// Do not open a console window for the packaged program.
pub const NOCONSOLE_FLAG: &str = "--noconsole";

/// Prefix of the icon option; the path follows the `=`.
pub const ICON_FLAG: &str = "--icon";

/// Complete argument list for one tool invocation.
///
/// The first element is the program to launch. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    args: Vec<String>,
}

impl CommandLine {
    /// Program to launch.
    pub fn program(&self) -> &str {
        &self.args[0]
    }

    /// Arguments after the program.
    pub fn args(&self) -> &[String] {
        &self.args[1..]
    }

    /// Every element, program included.
    pub fn as_slice(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.args.join(" "))
    }
}

/// Result of assembling a command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltCommand {
    /// The command to run
    pub command: CommandLine,
    /// Set when the extra-arguments field was malformed and dropped
    pub warning: Option<String>,
}

/// Assemble the command line for `request`.
///
/// Extra arguments that fail to tokenize (for example an unmatched quote) are
/// dropped as a whole and reported through [`BuiltCommand::warning`].
pub fn build_command(prefix: &InvocationPrefix, request: &PackagingRequest) -> BuiltCommand {
    let mut args = prefix.to_args();
    let mut warning = None;

    args.push(CLEAN_FLAG.to_string());
    if request.onefile {
        args.push(ONEFILE_FLAG.to_string());
    }
    if !request.console {
        args.push(NOCONSOLE_FLAG.to_string());
    }
    if let Some(icon) = &request.icon {
        args.push(format!("{}={}", ICON_FLAG, icon.display()));
    }

    if let Some(raw) = request.extra_args.as_deref().filter(|raw| !raw.is_empty()) {
        match split_arguments(raw) {
            Ok(tokens) => args.extend(tokens),
            Err(e) => {
                log::debug!("Ignoring extra arguments {:?}: {}", raw, e);
                warning = Some(format!("Malformed extra arguments ({}), ignoring them", e));
            }
        }
    }

    args.push(request.source.to_string_lossy().into_owned());

    BuiltCommand {
        command: CommandLine { args },
        warning,
    }
}

/// Split `raw` into words using shell-style quoting, without expansion.
///
/// Whitespace separates words. Single quotes keep their content verbatim.
/// Inside double quotes a backslash only escapes `"` and `\`; any other
/// backslash is kept. Outside quotes a backslash escapes the next character.
/// `#` is an ordinary character, not the start of a comment.
pub fn split_arguments(raw: &str) -> std::result::Result<Vec<String>, SplitError> {
    let mut words = Vec::new();
    let mut word = String::new();
    let mut in_word = false;
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(c) => word.push(c),
                        None => return Err(SplitError::UnterminatedQuote),
                    }
                }
            }
            '"' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(c @ ('"' | '\\')) => word.push(c),
                            Some(c) => {
                                word.push('\\');
                                word.push(c);
                            }
                            None => return Err(SplitError::TrailingEscape),
                        },
                        Some(c) => word.push(c),
                        None => return Err(SplitError::UnterminatedQuote),
                    }
                }
            }
            '\\' => {
                in_word = true;
                word.push(chars.next().ok_or(SplitError::TrailingEscape)?);
            }
            c if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut word));
                    in_word = false;
                }
            }
            c => {
                in_word = true;
                word.push(c);
            }
        }
    }

    if in_word {
        words.push(word);
    }
    Ok(words)
}
