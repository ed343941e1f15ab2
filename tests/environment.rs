//! Tests for interpreter environment detection

use pyinstaller_wizard::bundler::PythonEnvironment;
use pyinstaller_wizard::bundler::tool_detection::SCRIPTS_DIR;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_explicit_environment_accessors() {
    let env = PythonEnvironment::new("/venv/bin/python", "/venv", "/usr");

    assert_eq!(env.interpreter(), Path::new("/venv/bin/python"));
    assert_eq!(env.prefix(), Path::new("/venv"));
    assert_eq!(env.base_prefix(), Path::new("/usr"));
    assert!(env.is_isolated());
    assert!(!PythonEnvironment::new("/usr/bin/python3", "/usr", "/usr").is_isolated());
}

#[test]
fn test_unlaunchable_interpreter_in_scripts_dir_uses_its_parent() {
    let dir = TempDir::new().unwrap();
    let interpreter = dir.path().join("venv").join(SCRIPTS_DIR).join("python-missing");

    let env = PythonEnvironment::detect(Some(&interpreter)).unwrap();

    assert_eq!(env.interpreter(), interpreter);
    assert_eq!(env.prefix(), dir.path().join("venv"));
    assert_eq!(env.base_prefix(), env.prefix());
    assert!(!env.is_isolated());
}

#[test]
fn test_unlaunchable_interpreter_elsewhere_uses_its_directory() {
    let dir = TempDir::new().unwrap();
    let interpreter = dir.path().join("tools").join("python-missing");

    let env = PythonEnvironment::detect(Some(&interpreter)).unwrap();

    assert_eq!(env.prefix(), dir.path().join("tools"));
    assert!(!env.is_isolated());
}

#[test]
fn test_bare_interpreter_name_without_directory() {
    let interpreter = Path::new("pyinstaller-wizard-no-such-python");

    let env = PythonEnvironment::detect(Some(interpreter)).unwrap();

    assert_eq!(env.interpreter(), interpreter);
    assert_eq!(env.prefix(), Path::new(""));
    assert!(!env.is_isolated());
}

#[cfg(unix)]
mod stub_interpreter {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;

    /// Executable shell script standing in for an interpreter.
    fn stub(dir: &Path, body: &str) -> PathBuf {
        let bin = dir.join("venv").join(SCRIPTS_DIR);
        fs::create_dir_all(&bin).unwrap();
        let path = bin.join("python3");
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn test_reported_prefixes_are_used() {
        let dir = TempDir::new().unwrap();
        let interpreter = stub(dir.path(), "echo /envs/app\necho /usr/local");

        let env = PythonEnvironment::detect(Some(&interpreter)).unwrap();

        assert_eq!(env.prefix(), Path::new("/envs/app"));
        assert_eq!(env.base_prefix(), Path::new("/usr/local"));
        assert!(env.is_isolated());
    }

    #[test]
    fn test_blank_lines_around_prefixes_are_skipped() {
        let dir = TempDir::new().unwrap();
        let interpreter = stub(dir.path(), "echo\necho '  /opt/py  '\necho\necho /opt/py");

        let env = PythonEnvironment::detect(Some(&interpreter)).unwrap();

        assert_eq!(env.prefix(), Path::new("/opt/py"));
        assert!(!env.is_isolated());
    }

    #[test]
    fn test_failing_query_falls_back_to_location() {
        let dir = TempDir::new().unwrap();
        let interpreter = stub(dir.path(), "echo /envs/app\necho /usr/local\nexit 1");

        let env = PythonEnvironment::detect(Some(&interpreter)).unwrap();

        assert_eq!(env.prefix(), dir.path().join("venv"));
        assert_eq!(env.base_prefix(), env.prefix());
    }

    #[test]
    fn test_incomplete_query_output_falls_back_to_location() {
        let dir = TempDir::new().unwrap();
        let interpreter = stub(dir.path(), "echo /envs/app");

        let env = PythonEnvironment::detect(Some(&interpreter)).unwrap();

        assert_eq!(env.prefix(), dir.path().join("venv"));
        assert!(!env.is_isolated());
    }
}
