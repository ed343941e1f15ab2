//! Shared test utilities

#![allow(dead_code)]

use std::cell::RefCell;
use std::ffi::OsStr;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use pyinstaller_wizard::bundler::ProcessProbe;
use pyinstaller_wizard::cli::{OutputManager, Prompter};

/// Prompter reading scripted answers and writing into memory.
pub type ScriptedPrompter = Prompter<Cursor<Vec<u8>>, Vec<u8>>;

/// Launch check that succeeds only for the listed programs and records calls.
#[derive(Default)]
pub struct FakeProbe {
    launchable: Vec<String>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeProbe {
    pub fn launching(programs: &[&str]) -> Self {
        Self {
            launchable: programs.iter().map(|p| p.to_string()).collect(),
            calls: RefCell::default(),
        }
    }

    pub fn nothing() -> Self {
        Self::default()
    }
}

impl ProcessProbe for FakeProbe {
    fn launches(&self, program: &OsStr, args: &[&str]) -> bool {
        let program = program.to_string_lossy().into_owned();
        self.calls
            .borrow_mut()
            .push(format!("{} {}", program, args.join(" ")));
        self.launchable.contains(&program)
    }
}

/// Prompter answering with `input`, resolving paths against `dir`.
pub fn prompter(input: &str, dir: &Path) -> ScriptedPrompter {
    console::set_colors_enabled(false);
    let output = OutputManager::new(Vec::new(), false);
    Prompter::new(Cursor::new(input.as_bytes().to_vec()), output, dir)
}

/// Everything written so far, plus the unread input.
pub fn finish(prompter: ScriptedPrompter) -> (Cursor<Vec<u8>>, String) {
    let (input, output) = prompter.into_parts();
    let text = String::from_utf8_lossy(&output.into_inner()).into_owned();
    (input, text)
}

/// Create an empty file (and its parent directories) and return its path.
pub fn touch(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"").unwrap();
    path.to_path_buf()
}
