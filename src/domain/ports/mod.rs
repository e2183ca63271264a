//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod command_runner;
pub mod deploy_events;
pub mod file_system;
pub mod host_environment;

pub use command_runner::{CommandFailure, CommandResult, CommandRunner, HostCommand};
pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink};
pub use file_system::{EntryKind, FileSystem, FsError, FsResult};
pub use host_environment::HostEnvironment;
