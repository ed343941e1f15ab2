//! External tool detection.
//!
//! Works out how PyInstaller can be launched on this machine. Probes run in a
//! fixed priority order and the first one that succeeds wins:
//!
//! 1. the bare executable on `PATH`
//! 2. the interpreter's module form (`python -m PyInstaller`)
//! 3. the launcher script inside the active prefix
//! 4. the launcher script inside the base prefix, when a virtual environment
//!    is active

use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use super::environment::PythonEnvironment;
use super::error::{Error, Result};

/// Directory holding installed launcher scripts, relative to a prefix.
#[cfg(windows)]
pub const SCRIPTS_DIR: &str = "Scripts";
#[cfg(not(windows))]
pub const SCRIPTS_DIR: &str = "bin";

/// Flag asking the tool to print its version and exit.
pub const VERSION_FLAG: &str = "--version";

/// Interpreter flag that runs a library module as a script.
pub const MODULE_FLAG: &str = "-m";

/// Identity of the packaging tool being located.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSpec {
    /// Executable name looked up on `PATH`.
    pub executable: String,
    /// Importable package name for the `-m` form.
    pub module: String,
    /// Installation hint shown when the tool cannot be found.
    pub install_hint: String,
}

impl Default for ToolSpec {
    fn default() -> Self {
        Self {
            executable: "pyinstaller".to_string(),
            module: "PyInstaller".to_string(),
            install_hint: "pip install pyinstaller".to_string(),
        }
    }
}

impl ToolSpec {
    /// File name of the launcher script installed into a prefix.
    pub fn script_name(&self) -> String {
        if cfg!(windows) {
            format!("{}.exe", self.executable)
        } else {
            self.executable.clone()
        }
    }

    /// Location of the launcher script under `prefix`.
    pub fn script_path(&self, prefix: &Path) -> PathBuf {
        prefix.join(SCRIPTS_DIR).join(self.script_name())
    }
}

/// How to launch the packaging tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationPrefix {
    /// Bare executable name resolved through `PATH`
    Executable(String),
    /// `<interpreter> -m <module>`
    Module {
        /// Interpreter path
        interpreter: PathBuf,
        /// Module name
        module: String,
    },
    /// Launcher script found at a well-known location
    Script(PathBuf),
}

impl InvocationPrefix {
    /// Leading arguments of every command line built from this prefix.
    pub fn to_args(&self) -> Vec<String> {
        match self {
            Self::Executable(name) => vec![name.clone()],
            Self::Module {
                interpreter,
                module,
            } => vec![
                interpreter.to_string_lossy().into_owned(),
                MODULE_FLAG.to_string(),
                module.clone(),
            ],
            Self::Script(path) => vec![path.to_string_lossy().into_owned()],
        }
    }
}

impl fmt::Display for InvocationPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_args().join(" "))
    }
}

/// Launch check used by the first two probes.
pub trait ProcessProbe {
    /// Returns true when `program` could be started with `args`.
    ///
    /// The exit status does not matter; only a launch failure counts as a miss.
    fn launches(&self, program: &OsStr, args: &[&str]) -> bool;
}

/// Spawns the real process with all output discarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProbe;

impl ProcessProbe for SystemProbe {
    fn launches(&self, program: &OsStr, args: &[&str]) -> bool {
        match Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
        {
            Ok(status) => {
                log::debug!(
                    "{} {} exited with {:?}",
                    program.to_string_lossy(),
                    args.join(" "),
                    status.code()
                );
                true
            }
            Err(e) => {
                log::debug!("{} failed to launch: {}", program.to_string_lossy(), e);
                false
            }
        }
    }
}

/// Finds an [`InvocationPrefix`] for the packaging tool.
#[derive(Debug, Clone)]
pub struct ToolLocator<P = SystemProbe> {
    tool: ToolSpec,
    environment: Option<PythonEnvironment>,
    probe: P,
}

impl ToolLocator<SystemProbe> {
    /// Locator for PyInstaller using real process launches.
    pub fn new(environment: Option<PythonEnvironment>) -> Self {
        Self::with_probe(ToolSpec::default(), environment, SystemProbe)
    }
}

impl<P: ProcessProbe> ToolLocator<P> {
    /// Locator with an explicit tool identity and launch check.
    pub fn with_probe(tool: ToolSpec, environment: Option<PythonEnvironment>, probe: P) -> Self {
        Self {
            tool,
            environment,
            probe,
        }
    }

    /// The tool being located.
    pub fn tool(&self) -> &ToolSpec {
        &self.tool
    }

    /// The launch check in use.
    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// Run the probes in priority order.
    ///
    /// Returns [`Error::ToolNotFound`] once every probe has failed.
    pub fn locate(&self) -> Result<InvocationPrefix> {
        let executable = OsStr::new(&self.tool.executable);
        if self.probe.launches(executable, &[VERSION_FLAG]) {
            log::info!("✓ {} available on PATH", self.tool.executable);
            return Ok(InvocationPrefix::Executable(self.tool.executable.clone()));
        }

        let Some(env) = &self.environment else {
            log::debug!("No Python interpreter known; skipping interpreter probes");
            return Err(self.not_found());
        };

        let interpreter = env.interpreter().as_os_str();
        if self
            .probe
            .launches(interpreter, &[MODULE_FLAG, self.tool.module.as_str(), VERSION_FLAG])
        {
            log::info!(
                "✓ {} available as module of {}",
                self.tool.module,
                env.interpreter().display()
            );
            return Ok(InvocationPrefix::Module {
                interpreter: env.interpreter().to_path_buf(),
                module: self.tool.module.clone(),
            });
        }

        if let Some(script) = self.find_script(env.prefix()) {
            return Ok(InvocationPrefix::Script(script));
        }

        if env.is_isolated() {
            if let Some(script) = self.find_script(env.base_prefix()) {
                return Ok(InvocationPrefix::Script(script));
            }
        } else {
            log::debug!("No virtual environment active; skipping base prefix");
        }

        Err(self.not_found())
    }

    fn find_script(&self, prefix: &Path) -> Option<PathBuf> {
        let script = self.tool.script_path(prefix);
        if script.is_file() {
            log::info!("✓ {} found at: {}", self.tool.executable, script.display());
            Some(script)
        } else {
            log::debug!("{} not found at: {}", self.tool.executable, script.display());
            None
        }
    }

    fn not_found(&self) -> Error {
        Error::ToolNotFound {
            tool: self.tool.executable.clone(),
            hint: self.tool.install_hint.clone(),
        }
    }
}
