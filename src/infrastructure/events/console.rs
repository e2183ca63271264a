//! Console Event Sink
//!
//! Human-readable progress lines, one per pipeline step.

use std::io::{self, Write};
use std::sync::Mutex;

use crossterm::style::Stylize;
use is_terminal::IsTerminal;

use crate::domain::ports::{DeployEvent, DeployEventSink};

pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    color: bool,
}

#[derive(Clone, Copy)]
enum Mark {
    Step,
    Done,
    Warn,
}

impl ConsoleEventSink {
    /// Stdout, colored when it is a terminal and `NO_COLOR` is unset
    pub fn stdout() -> Self {
        let color = io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
            color,
        }
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, color: bool) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            color,
        }
    }

    fn line(&self, mark: Mark, text: String) {
        let icon = match (mark, self.color) {
            (Mark::Step, false) => "-".to_string(),
            (Mark::Done, false) => "[OK]".to_string(),
            (Mark::Warn, false) => "[WARN]".to_string(),
            (Mark::Step, true) => "●".cyan().to_string(),
            (Mark::Done, true) => "✓".green().to_string(),
            (Mark::Warn, true) => "⚠".yellow().to_string(),
        };
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{} {}", icon, text);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        match event {
            DeployEvent::Started {
                deploy_id,
                mode,
                source,
                fresh,
                dry_run,
            } => {
                let mut flags = Vec::new();
                if fresh {
                    flags.push("fresh");
                }
                if dry_run {
                    flags.push("dry run");
                }
                let suffix = if flags.is_empty() {
                    String::new()
                } else {
                    format!(" ({})", flags.join(", "))
                };
                self.line(
                    Mark::Step,
                    format!(
                        "Deploying {} [{}] from {}{}",
                        deploy_id,
                        mode,
                        source.display(),
                        suffix
                    ),
                );
            }
            DeployEvent::PrecheckPassed { config_root } => self.line(
                Mark::Done,
                format!("Prechecks passed ({})", config_root.display()),
            ),
            DeployEvent::Declined => self.line(Mark::Warn, "Deployment cancelled".to_string()),
            DeployEvent::Resolved { resolution } => {
                self.line(Mark::Step, format!("Existing deployment: {}", resolution))
            }
            DeployEvent::ArtifactRemoved { path } => {
                self.line(Mark::Step, format!("Removed {}", path.display()))
            }
            DeployEvent::ArtifactWritten { kind, path } => {
                self.line(Mark::Done, format!("Wrote {} {}", kind, path.display()))
            }
            DeployEvent::SupervisorReloaded => {
                self.line(Mark::Done, "systemd configuration reloaded".to_string())
            }
            DeployEvent::ProjectMaterialized { outcome, path } => self.line(
                Mark::Done,
                format!("Project {} at {}", outcome, path.display()),
            ),
            DeployEvent::UnitStarted { unit } => {
                self.line(Mark::Done, format!("Started {}", unit))
            }
            DeployEvent::ProxyReloaded => self.line(Mark::Done, "nginx reloaded".to_string()),
            DeployEvent::SmokeChecked { url, ok: true } => {
                self.line(Mark::Done, format!("Opened {}", url))
            }
            DeployEvent::SmokeChecked { url, ok: false } => {
                self.line(Mark::Warn, format!("Could not open {}", url))
            }
            DeployEvent::Completed { unit, url } => self.line(
                Mark::Done,
                format!("Deployed {}, serving {}", unit, url),
            ),
        }
    }
}
