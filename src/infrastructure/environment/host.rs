//! Host environment backed by the running process
//!
//! Privilege is the effective user id; confirmation is an interactive
//! prompt on the terminal.

use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use is_terminal::IsTerminal;
use nix::unistd::geteuid;
use tracing::warn;

use crate::domain::ports::HostEnvironment;

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl SystemEnvironment {
    pub fn new() -> Self {
        Self
    }
}

impl HostEnvironment for SystemEnvironment {
    fn has_elevated_access(&self) -> bool {
        geteuid().is_root()
    }

    /// Without a terminal there is nobody to answer, which counts as "no".
    fn confirm(&self, prompt: &str) -> bool {
        if !std::io::stdin().is_terminal() {
            warn!("stdin is not a terminal and --yes was not given, not deploying");
            return false;
        }
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(true)
            .interact()
            .unwrap_or(false)
    }
}
