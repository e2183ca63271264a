//! Project materialization
//!
//! Executes a [`MaterializePlan`]. The only deletion performed here is of a
//! single file or symbolic link at the serving path; directories and special
//! files are refused.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::{DeploymentSpec, HostState};
use crate::domain::ports::{
    CommandRunner, DeployEvent, DeployEventSink, EntryKind, FileSystem, HostCommand,
};
use crate::domain::services::{plan_materialize, MaterializeOutcome, MaterializePlan};
use crate::error::{DeployError, DeployResult};

use super::options::DeployOptions;

pub(super) fn materialize<FS, CR>(
    fs: &FS,
    runner: &CR,
    spec: &DeploymentSpec,
    state: &HostState,
    options: &DeployOptions,
    event_sink: &Arc<dyn DeployEventSink>,
) -> DeployResult<MaterializeOutcome>
where
    FS: FileSystem + ?Sized,
    CR: CommandRunner + ?Sized,
{
    let serving_dir = spec.serving_dir();
    let plan = plan_materialize(state, options.fresh, options.dry_run);
    debug!(?plan, path = %serving_dir.display(), "materialize plan");

    let outcome = match plan {
        MaterializePlan::Skip => MaterializeOutcome::AlreadyPresent,
        MaterializePlan::Link => {
            if options.fresh {
                remove_serving_entry(fs, &serving_dir)?;
            }
            ensure_vacant(fs, &serving_dir)?;
            prepare_parent(fs, &serving_dir)?;
            place(
                runner,
                &HostCommand::Link {
                    source: spec.source_dir().to_path_buf(),
                    target: serving_dir.clone(),
                },
                &serving_dir,
            )?;
            MaterializeOutcome::Linked
        }
        MaterializePlan::Copy { replace } => {
            if replace {
                remove_serving_entry(fs, &serving_dir)?;
            }
            ensure_vacant(fs, &serving_dir)?;
            prepare_parent(fs, &serving_dir)?;
            place(
                runner,
                &HostCommand::Copy {
                    source: spec.source_dir().to_path_buf(),
                    target: serving_dir.clone(),
                },
                &serving_dir,
            )?;
            if replace {
                MaterializeOutcome::Replaced
            } else {
                MaterializeOutcome::Copied
            }
        }
    };

    info!(%outcome, path = %serving_dir.display(), "project materialized");
    event_sink.on_event(DeployEvent::ProjectMaterialized {
        outcome,
        path: serving_dir,
    });
    Ok(outcome)
}

/// Remove a file or symbolic link at the serving path; anything else is
/// refused and left untouched.
fn remove_serving_entry<FS: FileSystem + ?Sized>(fs: &FS, path: &Path) -> DeployResult<()> {
    let kind = fs.entry_kind(path);
    if kind == EntryKind::Missing {
        return Ok(());
    }
    if !kind.is_removable() {
        return Err(DeployError::MaterializeRefused {
            path: path.to_path_buf(),
            kind: kind.to_string(),
        });
    }
    fs.remove_if_exists(path)
        .map_err(|source| DeployError::Remove {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), "removed previous serving entry");
    Ok(())
}

/// `ln -s` and `cp -r` nest into an existing directory; never let them.
fn ensure_vacant<FS: FileSystem + ?Sized>(fs: &FS, path: &Path) -> DeployResult<()> {
    match fs.entry_kind(path) {
        EntryKind::Missing => Ok(()),
        kind => Err(DeployError::Materialize {
            path: path.to_path_buf(),
            reason: format!("path is occupied by a {} that does not match the project", kind),
        }),
    }
}

fn prepare_parent<FS: FileSystem + ?Sized>(fs: &FS, path: &Path) -> DeployResult<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    fs.create_dir_all(parent)
        .map_err(|source| DeployError::Materialize {
            path: path.to_path_buf(),
            reason: source.to_string(),
        })
}

fn place<CR: CommandRunner + ?Sized>(
    runner: &CR,
    command: &HostCommand,
    path: &Path,
) -> DeployResult<()> {
    runner.run(command).map_err(|failure| DeployError::Materialize {
        path: path.to_path_buf(),
        reason: failure.to_string(),
    })
}
