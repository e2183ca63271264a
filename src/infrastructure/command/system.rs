//! System Command Runner
//!
//! Runs host commands as child processes (`systemctl`, `nginx`, `cp`) and
//! creates symbolic links directly. Each command runs once, to completion,
//! with no timeout.

use std::os::unix::fs::symlink;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::domain::ports::{CommandFailure, CommandResult, CommandRunner, HostCommand};

/// Opener used for the smoke check when none is configured
pub const DEFAULT_BROWSER: &str = "xdg-open";

#[derive(Debug, Clone)]
pub struct SystemRunner {
    browser: String,
}

impl SystemRunner {
    pub fn new() -> Self {
        Self {
            browser: DEFAULT_BROWSER.to_string(),
        }
    }

    pub fn with_browser(mut self, browser: impl Into<String>) -> Self {
        self.browser = browser.into();
        self
    }

    /// Program and arguments for a command; `None` for actions performed
    /// in-process.
    pub fn argv(&self, command: &HostCommand) -> Option<Vec<String>> {
        let argv = match command {
            HostCommand::ReloadSupervisor => vec!["systemctl".into(), "daemon-reload".into()],
            HostCommand::StartUnit { unit } => {
                vec!["systemctl".into(), "start".into(), unit.clone()]
            }
            HostCommand::ValidateProxy => vec!["nginx".into(), "-t".into()],
            HostCommand::ReloadProxy => {
                vec!["systemctl".into(), "restart".into(), "nginx".into()]
            }
            HostCommand::Copy { source, target } => vec![
                "cp".into(),
                "-r".into(),
                source.display().to_string(),
                target.display().to_string(),
            ],
            HostCommand::OpenBrowser { url } => vec![self.browser.clone(), url.clone()],
            HostCommand::Check { argv, .. } => argv.clone(),
            HostCommand::Link { .. } => return None,
        };
        Some(argv)
    }

    fn spawn(&self, argv: &[String], cwd: Option<&Path>) -> CommandResult {
        let line = argv.join(" ");
        let Some((program, args)) = argv.split_first() else {
            return Err(CommandFailure::new(line, None, "empty command"));
        };

        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        debug!(command = %line, "running");
        let output = cmd
            .output()
            .map_err(|e| CommandFailure::spawn(line.clone(), &e))?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let detail = if stderr.trim().is_empty() {
            String::from_utf8_lossy(&output.stdout).into_owned()
        } else {
            stderr.into_owned()
        };
        debug!(command = %line, status = ?output.status.code(), "command failed");
        Err(CommandFailure::new(line, output.status.code(), detail))
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, command: &HostCommand) -> CommandResult {
        match command {
            HostCommand::Link { source, target } => {
                debug!(%command, "creating symbolic link");
                symlink(source, target).map_err(|e| {
                    CommandFailure::new(command.to_string(), e.raw_os_error(), e.to_string())
                })
            }
            HostCommand::Check { cwd, .. } => match self.argv(command) {
                Some(argv) => self.spawn(&argv, Some(cwd)),
                None => Ok(()),
            },
            _ => match self.argv(command) {
                Some(argv) => self.spawn(&argv, None),
                None => Ok(()),
            },
        }
    }
}
