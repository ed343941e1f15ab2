//! User choices for one packaging run.

use std::path::PathBuf;

/// Extension required for the script being packaged.
pub const SOURCE_EXTENSION: &str = ".py";

/// Extension required for the executable icon.
pub const ICON_EXTENSION: &str = ".ico";

/// Everything the user chose for one packaging run.
///
/// Paths are absolute and were checked to exist when collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagingRequest {
    /// Script to package
    pub source: PathBuf,
    /// Produce a single executable instead of a directory
    pub onefile: bool,
    /// Keep the console window of the packaged program
    pub console: bool,
    /// Icon embedded into the executable
    pub icon: Option<PathBuf>,
    /// Raw extra arguments, tokenized with shell quoting rules when building
    pub extra_args: Option<String>,
}

impl PackagingRequest {
    /// Request with the defaults PyInstaller itself would use.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            onefile: false,
            console: true,
            icon: None,
            extra_args: None,
        }
    }
}
