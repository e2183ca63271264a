//! Artifact removal and installation

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::RenderedArtifactSet;
use crate::domain::ports::{CommandRunner, DeployEvent, DeployEventSink, FileSystem, HostCommand};
use crate::error::{DeployError, DeployResult, SupervisorStage};

/// Remove unit, socket and both vhost files. Missing paths are a no-op.
///
/// Returns the paths that were actually removed.
pub(super) fn remove_previous<FS: FileSystem + ?Sized>(
    fs: &FS,
    artifacts: &RenderedArtifactSet,
    event_sink: &Arc<dyn DeployEventSink>,
) -> DeployResult<Vec<PathBuf>> {
    let mut removed = Vec::new();
    for path in artifacts.all_paths() {
        let existed = fs
            .remove_if_exists(path)
            .map_err(|source| DeployError::Remove {
                path: path.to_path_buf(),
                source,
            })?;
        if existed {
            debug!(path = %path.display(), "removed previous artifact");
            event_sink.on_event(DeployEvent::ArtifactRemoved {
                path: path.to_path_buf(),
            });
            removed.push(path.to_path_buf());
        }
    }
    Ok(removed)
}

/// Create-exclusive writes of all four files, then a supervisor reload.
pub(super) fn install<FS, CR>(
    fs: &FS,
    runner: &CR,
    artifacts: &RenderedArtifactSet,
    event_sink: &Arc<dyn DeployEventSink>,
) -> DeployResult<Vec<PathBuf>>
where
    FS: FileSystem + ?Sized,
    CR: CommandRunner + ?Sized,
{
    let mut written = Vec::new();
    for artifact in artifacts.files() {
        fs.create_new(&artifact.path, &artifact.content)
            .map_err(|source| DeployError::Write {
                path: artifact.path.clone(),
                source,
            })?;
        info!(kind = %artifact.kind, path = %artifact.path.display(), "wrote artifact");
        event_sink.on_event(DeployEvent::ArtifactWritten {
            kind: artifact.kind,
            path: artifact.path.clone(),
        });
        written.push(artifact.path);
    }

    runner
        .run(&HostCommand::ReloadSupervisor)
        .map_err(|source| DeployError::Supervisor {
            stage: SupervisorStage::Reload,
            source,
        })?;
    event_sink.on_event(DeployEvent::SupervisorReloaded);

    Ok(written)
}
