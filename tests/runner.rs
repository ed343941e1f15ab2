//! Tests for running the assembled command

use pyinstaller_wizard::bundler::{
    InvocationPrefix, PackagingRequest, RunOutcome, Runner, build_command,
};
use tempfile::TempDir;

fn command_for(program: &str) -> pyinstaller_wizard::bundler::CommandLine {
    let prefix = InvocationPrefix::Executable(program.to_string());
    build_command(&prefix, &PackagingRequest::new("app.py")).command
}

#[test]
fn test_output_dir_is_absolute_dist() {
    let dir = TempDir::new().unwrap();
    let runner = Runner::new(dir.path());

    assert_eq!(runner.output_dir(), dir.path().join("dist"));
    assert!(runner.output_dir().is_absolute());
}

#[test]
fn test_missing_program_is_unexpected_failure() {
    let dir = TempDir::new().unwrap();
    let runner = Runner::new(dir.path());

    let outcome = runner.run(&command_for("pyinstaller-wizard-no-such-program"));

    match outcome {
        RunOutcome::UnexpectedFailure { category, message } => {
            assert_eq!(category, "NotFound");
            assert!(!message.is_empty());
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn test_missing_working_dir_is_unexpected_failure() {
    let dir = TempDir::new().unwrap();
    let runner = Runner::new(dir.path().join("gone"));

    let outcome = runner.run(&command_for("true"));

    assert!(matches!(outcome, RunOutcome::UnexpectedFailure { .. }));
    assert!(!outcome.is_success());
}

#[cfg(unix)]
#[test]
fn test_exit_status_maps_to_outcome() {
    let dir = TempDir::new().unwrap();
    let runner = Runner::new(dir.path());

    assert!(runner.run(&command_for("true")).is_success());
    assert_eq!(
        runner.run(&command_for("false")),
        RunOutcome::ToolFailure { code: 1 }
    );
}
