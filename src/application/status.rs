//! Status Use Case
//!
//! Read-only preview: inspects the host and reports what a deploy would do
//! with and without `--fresh`.

use std::path::PathBuf;

use crate::domain::entities::{ArtifactKind, DeploymentSpec, HostState};
use crate::domain::ports::FileSystem;
use crate::domain::services::{inspect, plan_materialize, render, resolve, MaterializePlan, Resolution};
use crate::domain::value_objects::IntegrityCheck;

/// Presence of one generated artifact on the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactStatus {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub exists: bool,
}

/// What a deploy would find and do
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub deploy_id: String,
    pub unit: String,
    pub serving_dir: PathBuf,
    pub artifacts: Vec<ArtifactStatus>,
    pub state: HostState,
    pub resolution: Resolution,
    pub fresh_resolution: Resolution,
    pub plan: MaterializePlan,
    pub fresh_plan: MaterializePlan,
}

impl StatusReport {
    pub fn is_deployed(&self) -> bool {
        self.state.any_artifact_exists()
    }
}

pub struct StatusUseCase<FS: FileSystem> {
    file_system: FS,
}

impl<FS: FileSystem> StatusUseCase<FS> {
    pub fn new(file_system: FS) -> Self {
        Self { file_system }
    }

    pub fn execute(
        &self,
        spec: &DeploymentSpec,
        integrity: IntegrityCheck,
        dry_run: bool,
    ) -> StatusReport {
        let rendered = render(spec);
        let state = inspect(&self.file_system, spec, &rendered, integrity);

        let artifacts = rendered
            .files()
            .into_iter()
            .map(|a| ArtifactStatus {
                exists: self.file_system.exists(&a.path),
                kind: a.kind,
                path: a.path,
            })
            .collect();

        StatusReport {
            deploy_id: spec.deploy_id().to_string(),
            unit: spec.service_name(),
            serving_dir: spec.serving_dir(),
            artifacts,
            state,
            resolution: resolve(&state, false),
            fresh_resolution: resolve(&state, true),
            plan: plan_materialize(&state, false, dry_run),
            fresh_plan: plan_materialize(&state, true, dry_run),
        }
    }
}
