//! Host State Inspector
//!
//! Read-only probes of the host. The project check is an approximation by
//! default: two trees are "identical" when their total sizes fall in the
//! same 10-byte bucket. Same-size trees with different content pass, and
//! that is accepted behaviour rather than a bug; `IntegrityCheck::Digest`
//! exists for callers that need an exact comparison.

use std::path::Path;

use tracing::{debug, warn};

use crate::domain::entities::{DeploymentSpec, HostState, RenderedArtifactSet};
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::IntegrityCheck;

/// Granularity of the size comparison
pub fn size_bucket(bytes: u64) -> u64 {
    bytes / 10
}

/// Snapshot the artifact paths and the serving directory
pub fn inspect<FS: FileSystem + ?Sized>(
    fs: &FS,
    spec: &DeploymentSpec,
    artifacts: &RenderedArtifactSet,
    integrity: IntegrityCheck,
) -> HostState {
    let serving_dir = spec.serving_dir();
    let serving_entry = fs.entry_kind(&serving_dir);

    let project_matches = serving_entry.is_present()
        && project_matches(fs, spec.source_dir(), &serving_dir, integrity);

    let state = HostState {
        service_exists: fs.exists(&artifacts.service().path),
        socket_exists: fs.exists(&artifacts.socket().path),
        vhost_available_exists: fs.exists(&artifacts.vhost().path),
        vhost_enabled_exists: fs.exists(artifacts.vhost_enabled_path()),
        serving_entry,
        project_matches,
    };
    debug!(?state, "inspected host");
    state
}

fn project_matches<FS: FileSystem + ?Sized>(
    fs: &FS,
    source: &Path,
    candidate: &Path,
    integrity: IntegrityCheck,
) -> bool {
    match integrity {
        IntegrityCheck::Size => {
            match (fs.tree_size(source), fs.tree_size(candidate)) {
                (Ok(a), Ok(b)) => {
                    debug!(source = a, candidate = b, "compared tree sizes");
                    size_bucket(a) == size_bucket(b)
                }
                (Err(e), _) | (_, Err(e)) => {
                    warn!("cannot measure project tree: {}", e);
                    false
                }
            }
        }
        IntegrityCheck::Digest => match (fs.tree_digest(source), fs.tree_digest(candidate)) {
            (Ok(a), Ok(b)) => a == b,
            (Err(e), _) | (_, Err(e)) => {
                warn!("cannot hash project tree: {}", e);
                false
            }
        },
    }
}
