//! Locating, configuring and running the packaging tool.
//!
//! # Module Organization
//!
//! - [`environment`] - Python interpreter and prefix descriptor
//! - [`tool_detection`] - probes that find how to launch the tool
//! - [`request`] - the user's packaging choices
//! - [`command`] - deterministic command line assembly
//! - [`runner`] - child process execution and outcome reporting

pub mod command;
pub mod environment;
pub mod error;
pub mod request;
pub mod runner;
pub mod tool_detection;

pub use command::{BuiltCommand, CommandLine, build_command, split_arguments};
pub use environment::PythonEnvironment;
pub use error::{Error, Result, SplitError};
pub use request::{ICON_EXTENSION, PackagingRequest, SOURCE_EXTENSION};
pub use runner::{RunOutcome, Runner};
pub use tool_detection::{InvocationPrefix, ProcessProbe, SystemProbe, ToolLocator, ToolSpec};
