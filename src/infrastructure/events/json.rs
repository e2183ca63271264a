//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// JSON representation of one event
pub fn event_json(event: &DeployEvent) -> serde_json::Value {
    match event {
        DeployEvent::Started {
            deploy_id,
            mode,
            source,
            fresh,
            dry_run,
        } => serde_json::json!({
            "event": "start",
            "command": "deploy",
            "deploy_id": deploy_id,
            "mode": mode.as_str(),
            "source": source.display().to_string(),
            "fresh": fresh,
            "dry_run": dry_run,
        }),

        DeployEvent::PrecheckPassed { config_root } => serde_json::json!({
            "event": "precheck_passed",
            "command": "deploy",
            "config_root": config_root.display().to_string(),
        }),

        DeployEvent::Declined => serde_json::json!({
            "event": "declined",
            "command": "deploy",
        }),

        DeployEvent::Resolved { resolution } => serde_json::json!({
            "event": "resolved",
            "command": "deploy",
            "resolution": resolution.to_string(),
        }),

        DeployEvent::ArtifactRemoved { path } => serde_json::json!({
            "event": "artifact_removed",
            "command": "deploy",
            "path": path.display().to_string(),
        }),

        DeployEvent::ArtifactWritten { kind, path } => serde_json::json!({
            "event": "artifact_written",
            "command": "deploy",
            "kind": kind.label(),
            "path": path.display().to_string(),
        }),

        DeployEvent::SupervisorReloaded => serde_json::json!({
            "event": "supervisor_reloaded",
            "command": "deploy",
        }),

        DeployEvent::ProjectMaterialized { outcome, path } => serde_json::json!({
            "event": "project_materialized",
            "command": "deploy",
            "outcome": outcome.to_string(),
            "path": path.display().to_string(),
        }),

        DeployEvent::UnitStarted { unit } => serde_json::json!({
            "event": "unit_started",
            "command": "deploy",
            "unit": unit,
        }),

        DeployEvent::ProxyReloaded => serde_json::json!({
            "event": "proxy_reloaded",
            "command": "deploy",
        }),

        DeployEvent::SmokeChecked { url, ok } => serde_json::json!({
            "event": "smoke_checked",
            "command": "deploy",
            "url": url,
            "ok": ok,
        }),

        DeployEvent::Completed { unit, url } => serde_json::json!({
            "event": "complete",
            "command": "deploy",
            "status": "success",
            "unit": unit,
            "url": url,
        }),
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        self.write_event(event_json(&event));
    }
}
