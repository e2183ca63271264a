//! Diff Use Case
//!
//! Compares freshly rendered artifacts with the files currently installed
//! at their target paths. Nothing is written.

use std::path::PathBuf;

use similar::TextDiff;

use crate::domain::entities::{ArtifactKind, DeploymentSpec};
use crate::domain::ports::{FileSystem, FsError};
use crate::domain::services::render;

/// How an installed artifact differs from the rendered one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactChange {
    /// Nothing installed yet
    Create,
    Unchanged,
    /// Unified diff, installed → rendered
    Update { unified: String },
    /// Target exists but could not be read
    Unreadable { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactDiff {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub change: ArtifactChange,
}

impl ArtifactDiff {
    pub fn has_changes(&self) -> bool {
        self.change != ArtifactChange::Unchanged
    }
}

pub struct DiffUseCase<FS: FileSystem> {
    file_system: FS,
}

impl<FS: FileSystem> DiffUseCase<FS> {
    pub fn new(file_system: FS) -> Self {
        Self { file_system }
    }

    pub fn execute(&self, spec: &DeploymentSpec) -> Vec<ArtifactDiff> {
        render(spec)
            .files()
            .into_iter()
            .map(|artifact| {
                let change = match self.file_system.read(&artifact.path) {
                    Ok(installed) if installed == artifact.content => ArtifactChange::Unchanged,
                    Ok(installed) => ArtifactChange::Update {
                        unified: unified_diff(&artifact.path, &installed, &artifact.content),
                    },
                    Err(FsError::NotFound(_)) => ArtifactChange::Create,
                    Err(e) => ArtifactChange::Unreadable {
                        reason: e.to_string(),
                    },
                };
                ArtifactDiff {
                    kind: artifact.kind,
                    path: artifact.path,
                    change,
                }
            })
            .collect()
    }
}

fn unified_diff(path: &std::path::Path, old: &str, new: &str) -> String {
    let label = path.display().to_string();
    TextDiff::from_lines(old, new)
        .unified_diff()
        .header(&format!("installed {}", label), &format!("rendered {}", label))
        .to_string()
}
