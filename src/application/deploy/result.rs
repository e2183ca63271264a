//! Deploy Result
//!
//! Summary of a finished deploy run.

use std::path::PathBuf;

use crate::domain::entities::DeploymentSpec;
use crate::domain::services::MaterializeOutcome;

/// Result of a deploy operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployReport {
    pub deploy_id: String,
    /// systemd unit that was started
    pub unit: String,
    pub url: String,
    pub serving_dir: PathBuf,
    /// Artifacts removed by a fresh run
    pub removed: Vec<PathBuf>,
    /// Artifacts written
    pub written: Vec<PathBuf>,
    pub materialized: Option<MaterializeOutcome>,
    /// `None` when the smoke check was disabled
    pub smoke_check: Option<bool>,
    /// Operator answered "no" at the confirmation prompt
    pub declined: bool,
}

impl DeployReport {
    pub fn new(spec: &DeploymentSpec) -> Self {
        Self {
            deploy_id: spec.deploy_id().to_string(),
            unit: spec.service_name(),
            url: spec.url(),
            serving_dir: spec.serving_dir(),
            removed: Vec::new(),
            written: Vec::new(),
            materialized: None,
            smoke_check: None,
            declined: false,
        }
    }

    pub fn declined(spec: &DeploymentSpec) -> Self {
        Self {
            declined: true,
            ..Self::new(spec)
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.declined && self.materialized.is_some()
    }
}
