//! Deploy Event Port
//!
//! Provides an observable interface for deploy operations.
//! Enables progress reporting, JSON event streams, and debugging.

use std::path::PathBuf;

use crate::domain::entities::ArtifactKind;
use crate::domain::services::{MaterializeOutcome, Resolution};
use crate::domain::value_objects::ServingMode;

/// Event emitted during deploy operations
#[derive(Debug, Clone)]
pub enum DeployEvent {
    /// Deploy started
    Started {
        deploy_id: String,
        mode: ServingMode,
        source: PathBuf,
        fresh: bool,
        dry_run: bool,
    },

    /// Privilege and configuration root checks passed
    PrecheckPassed { config_root: PathBuf },

    /// Operator declined to continue
    Declined,

    /// Conflict resolution decided
    Resolved { resolution: Resolution },

    /// Previous artifact removed (fresh run)
    ArtifactRemoved { path: PathBuf },

    /// Artifact written
    ArtifactWritten { kind: ArtifactKind, path: PathBuf },

    /// Supervisor picked up the new units
    SupervisorReloaded,

    /// Project placed (or left) at the serving path
    ProjectMaterialized {
        outcome: MaterializeOutcome,
        path: PathBuf,
    },

    /// Unit started
    UnitStarted { unit: String },

    /// Proxy validated and restarted
    ProxyReloaded,

    /// Smoke check finished; failures are not fatal
    SmokeChecked { url: String, ok: bool },

    /// Deploy completed
    Completed { unit: String, url: String },
}

/// Trait for receiving deploy events
///
/// Implementations can be:
/// - ConsoleEventSink: Progress display in terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}
}
