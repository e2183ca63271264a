//! Command Runner Port
//!
//! Every external action of a deployment (systemd, nginx, placing the
//! project, the smoke check) goes through this single narrow interface so
//! the pipeline can be driven by a recording fake in tests.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// External action requested by the pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    /// Reload the supervisor's unit database
    ReloadSupervisor,
    /// Start a supervisor unit
    StartUnit { unit: String },
    /// Check the reverse proxy configuration syntax
    ValidateProxy,
    /// Restart the reverse proxy
    ReloadProxy,
    /// Symlink `target` to `source`
    Link { source: PathBuf, target: PathBuf },
    /// Recursively copy `source` to `target`
    Copy { source: PathBuf, target: PathBuf },
    /// Open the deployed site for a manual smoke check
    OpenBrowser { url: String },
    /// Project-provided pre-deployment check
    Check { argv: Vec<String>, cwd: PathBuf },
}

impl fmt::Display for HostCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostCommand::ReloadSupervisor => write!(f, "reload supervisor"),
            HostCommand::StartUnit { unit } => write!(f, "start {}", unit),
            HostCommand::ValidateProxy => write!(f, "validate proxy configuration"),
            HostCommand::ReloadProxy => write!(f, "reload proxy"),
            HostCommand::Link { source, target } => {
                write!(f, "link {} -> {}", target.display(), source.display())
            }
            HostCommand::Copy { source, target } => {
                write!(f, "copy {} to {}", source.display(), target.display())
            }
            HostCommand::OpenBrowser { url } => write!(f, "open {}", url),
            HostCommand::Check { argv, .. } => write!(f, "check `{}`", argv.join(" ")),
        }
    }
}

/// An external command did not succeed
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("`{command}` failed ({status}){}", detail_suffix(.detail))]
pub struct CommandFailure {
    /// Command line (or action label) that failed
    pub command: String,
    /// Human readable exit status
    pub status: String,
    /// Captured stderr or spawn error
    pub detail: String,
}

fn detail_suffix(detail: &str) -> String {
    let trimmed = detail.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {}", trimmed)
    }
}

impl CommandFailure {
    pub fn new(command: impl Into<String>, code: Option<i32>, detail: impl Into<String>) -> Self {
        let status = match code {
            Some(code) => format!("exit code {}", code),
            None => "terminated by signal".to_string(),
        };
        Self {
            command: command.into(),
            status,
            detail: detail.into(),
        }
    }

    /// The program could not be started at all
    pub fn spawn(command: impl Into<String>, err: &std::io::Error) -> Self {
        Self {
            command: command.into(),
            status: "not started".to_string(),
            detail: err.to_string(),
        }
    }
}

/// Result of running one host command
pub type CommandResult = Result<(), CommandFailure>;

/// Runs host commands synchronously, exactly once, with no timeout.
pub trait CommandRunner {
    fn run(&self, command: &HostCommand) -> CommandResult;
}
