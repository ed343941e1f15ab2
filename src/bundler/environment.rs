//! Python interpreter environment descriptor.
//!
//! The locator never inspects the host on its own; it is handed a
//! [`PythonEnvironment`] describing the interpreter and its installation
//! prefixes. [`PythonEnvironment::detect`] builds one from the real host.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use super::tool_detection::SCRIPTS_DIR;

/// Interpreter names tried on `PATH`, in order.
const INTERPRETER_CANDIDATES: [&str; 2] = ["python3", "python"];

/// Prints `sys.prefix` and `sys.base_prefix` on separate lines.
const PREFIX_QUERY: &str = "import sys; print(sys.prefix); print(sys.base_prefix)";

/// Interpreter path plus its active and base installation prefixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonEnvironment {
    interpreter: PathBuf,
    prefix: PathBuf,
    base_prefix: PathBuf,
}

impl PythonEnvironment {
    /// Describe an environment explicitly.
    pub fn new(
        interpreter: impl Into<PathBuf>,
        prefix: impl Into<PathBuf>,
        base_prefix: impl Into<PathBuf>,
    ) -> Self {
        Self {
            interpreter: interpreter.into(),
            prefix: prefix.into(),
            base_prefix: base_prefix.into(),
        }
    }

    /// Detect the host interpreter.
    ///
    /// Uses `interpreter` when given, otherwise the first of `python3` and
    /// `python` found on `PATH`. Returns `None` when no interpreter can be
    /// determined.
    pub fn detect(interpreter: Option<&Path>) -> Option<Self> {
        let interpreter = match interpreter {
            Some(path) => path.to_path_buf(),
            None => find_interpreter()?,
        };

        match query_prefixes(&interpreter) {
            Some((prefix, base_prefix)) => {
                log::debug!(
                    "Interpreter {} reports prefix {} (base {})",
                    interpreter.display(),
                    prefix.display(),
                    base_prefix.display()
                );
                Some(Self::new(interpreter, prefix, base_prefix))
            }
            None => {
                let prefix = infer_prefix(&interpreter);
                log::debug!(
                    "Could not query {}; assuming prefix {}",
                    interpreter.display(),
                    prefix.display()
                );
                Some(Self::new(interpreter, prefix.clone(), prefix))
            }
        }
    }

    /// Path of the interpreter executable.
    pub fn interpreter(&self) -> &Path {
        &self.interpreter
    }

    /// Active installation prefix (the virtual environment, when one is active).
    pub fn prefix(&self) -> &Path {
        &self.prefix
    }

    /// Prefix of the installation the active environment was created from.
    pub fn base_prefix(&self) -> &Path {
        &self.base_prefix
    }

    /// True when running inside a virtual environment.
    pub fn is_isolated(&self) -> bool {
        self.prefix != self.base_prefix
    }
}

fn find_interpreter() -> Option<PathBuf> {
    INTERPRETER_CANDIDATES.iter().find_map(|name| match which::which(name) {
        Ok(path) => {
            log::debug!("Found {} at: {}", name, path.display());
            Some(path)
        }
        Err(e) => {
            log::debug!("{} not found in PATH: {}", name, e);
            None
        }
    })
}

fn query_prefixes(interpreter: &Path) -> Option<(PathBuf, PathBuf)> {
    let output = Command::new(interpreter)
        .args(["-c", PREFIX_QUERY])
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut lines = stdout.lines().map(str::trim).filter(|l| !l.is_empty());
    let prefix = PathBuf::from(lines.next()?);
    let base_prefix = PathBuf::from(lines.next()?);
    Some((prefix, base_prefix))
}

/// Guess the prefix from the interpreter's location in the standard layout.
fn infer_prefix(interpreter: &Path) -> PathBuf {
    let dir = interpreter.parent().unwrap_or(Path::new(""));
    match dir.file_name() {
        Some(name) if name == SCRIPTS_DIR => dir.parent().unwrap_or(dir).to_path_buf(),
        _ => dir.to_path_buf(),
    }
}
